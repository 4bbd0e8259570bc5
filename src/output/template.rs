/*
 * Copyright (c) 2023-2026. Trevor Campbell and others.
 *
 * This file is part of Coord Info.
 *
 * Coord Info is free software; you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation; either version 2 of the License, or
 * (at your option) any later version.
 *
 * Coord Info is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Coord Info; if not, write to the Free Software
 * Foundation, Inc., 59 Temple Place, Suite 330, Boston, MA  02111-1307  USA
 *
 * Contributors:
 *      Trevor Campbell
 *
 */

//! Markup skeletons for the panel body. `{...}` tokens are filled in
//! by the presenter: section and field labels from the locale table,
//! the rest from the gathered answer.

pub const BASE: &str = "\
<div class=\"coord-info\">
    <h3>{coordSection}</h3>
    <ul>
        <li>{coordDecimal}</li>
        <li>{coordLat}{pt.y}</li>
        <li>{coordLong}{pt.x}</li>
        <li>{coordDMS}</li>
        <li>{coordLat}{dms.y}</li>
        <li>{coordLong}{dms.x}</li>
    </ul>
    <h3>{utmSection}</h3>
    <ul>
        <li>{utmZone}{zone}</li>
        <li>{utmEast}{outPt.x}</li>
        <li>{utmNorth}{outPt.y}</li>
    </ul>
    <h3>{ntsSection}</h3>
    <ul>
        <li>{nts250}</li>
        <li>{nts50}</li>
    </ul>
    <h3>{altiSection}</h3>
    <ul>
        <li>{elevation} m</li>
    </ul>
{magSection}</div>
";

pub const MAG_SECTION: &str = "\
    <h3>{magTitle}</h3>
    <ul>
        <li>{magDate}{date}</li>
        <li>{magDecli}{magnetic}</li>
        <li>{magChange}{annChange}</li>
        <li>{compass}</li>
    </ul>
";
