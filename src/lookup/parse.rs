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

//! Transforms the raw service payloads into the result records shown in
//! the panel. Each function tolerates empty or partial payloads.

use log::warn;

use crate::host::Projector;
use crate::i18n::Translations;
use crate::lookup::response::{AltitudePayload, DeclinationPayload, Feature, NtsProperties, UtmProperties};
use crate::model::coord_info::{DeclinationResult, NtsResult, UtmPoint, UtmResult};
use crate::model::point::Point;

// Northern hemisphere UTM zones sit at EPSG 32601 to 32660.
const UTM_EPSG_BASE: u32 = 32600;

/// The first feature is the 250k sheet, the second the 50k sheet.
/// Missing features leave the matching name empty.
pub fn parse_nts(features: &[Feature<NtsProperties>]) -> NtsResult {
    let sheet_name =
        |f: &Feature<NtsProperties>| format!("{}-{}", f.properties.identifier, f.properties.name);
    NtsResult::new(
        features.first().map(&sheet_name).unwrap_or_default(),
        features.get(1).map(&sheet_name).unwrap_or_default(),
    )
}

/// Takes the zone from the first feature, pads it to two digits and
/// reprojects the clicked point into that zone's coordinate system for
/// the easting/northing values.
pub fn parse_utm(
    features: &[Feature<UtmProperties>],
    point: &Point,
    projector: &dyn Projector,
) -> UtmResult {
    let Some(feature) = features.first() else {
        return UtmResult::unavailable();
    };

    let zone = feature.properties.identifier;
    let zone_name = format!("{:02}", zone);

    match projector.project(point, UTM_EPSG_BASE + zone) {
        Ok(out_pt) => UtmResult::new(
            zone_name,
            UtmPoint::new(out_pt.get_x().to_string(), out_pt.get_y().to_string()),
        ),
        Err(e) => {
            warn!("UTM reprojection for zone {} failed: {}", zone_name, e);
            UtmResult::new(zone_name, UtmPoint::placeholder())
        }
    }
}

pub fn parse_elevation(payload: &AltitudePayload) -> f64 {
    payload.altitude.unwrap_or(0.0)
}

/// Formats the declination angle and its annual change, substituting
/// "---" for values the service could not supply. The compass warning
/// is only set when the service flags the compass as useless there.
pub fn parse_declination(payload: &DeclinationPayload, text: &Translations) -> DeclinationResult {
    let magnetic = match payload.components.d {
        Some(d) => format!("{}\u{00b0}", d),
        None => "---".to_string(),
    };
    let ann_change = match payload.annual_change.d_d {
        Some(d) => d.to_string(),
        None => "---".to_string(),
    };
    let compass = if payload.compass == "useless" {
        text.mag_compass_out.to_string()
    } else {
        String::new()
    };
    DeclinationResult::new(magnetic, ann_change, compass)
}
