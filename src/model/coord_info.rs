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

use crate::model::point::{DmsPoint, Point};

/// NTS map sheet names for a location, at the 250k and 50k scales.
/// A field is empty when the service returned no sheet at that scale.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NtsResult {
    nts250: String,
    nts50: String,
}

impl NtsResult {
    pub fn new(nts250: String, nts50: String) -> Self {
        Self { nts250, nts50 }
    }

    pub fn get_nts250(&self) -> &str {
        &self.nts250
    }

    pub fn get_nts50(&self) -> &str {
        &self.nts50
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct UtmPoint {
    x: String,
    y: String,
}

impl UtmPoint {
    pub fn new(x: String, y: String) -> Self {
        Self { x, y }
    }

    pub fn placeholder() -> Self {
        Self {
            x: "-".to_string(),
            y: "-".to_string(),
        }
    }

    pub fn get_x(&self) -> &str {
        &self.x
    }

    pub fn get_y(&self) -> &str {
        &self.y
    }
}

/// UTM zone and zone-local easting/northing for a location.
#[derive(Debug, Clone, PartialEq)]
pub struct UtmResult {
    zone: String,
    out_pt: UtmPoint,
}

impl UtmResult {
    pub fn new(zone: String, out_pt: UtmPoint) -> Self {
        Self { zone, out_pt }
    }

    /// The value reported when the zone lookup returned no feature.
    pub fn unavailable() -> Self {
        Self {
            zone: "Error".to_string(),
            out_pt: UtmPoint::placeholder(),
        }
    }

    pub fn get_zone(&self) -> &str {
        &self.zone
    }

    pub fn get_out_pt(&self) -> &UtmPoint {
        &self.out_pt
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeclinationResult {
    magnetic: String,
    ann_change: String,
    compass: String,
}

impl DeclinationResult {
    pub fn new(magnetic: String, ann_change: String, compass: String) -> Self {
        Self {
            magnetic,
            ann_change,
            compass,
        }
    }

    pub fn get_magnetic(&self) -> &str {
        &self.magnetic
    }

    pub fn get_ann_change(&self) -> &str {
        &self.ann_change
    }

    pub fn get_compass(&self) -> &str {
        &self.compass
    }
}

/// Everything gathered for one clicked location. Built once per click,
/// rendered once, then discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordinateInfo {
    point: Point,
    dms: DmsPoint,
    date: String,
    nts: NtsResult,
    utm: UtmResult,
    elevation: f64,
    declination: Option<DeclinationResult>,
}

impl CoordinateInfo {
    pub fn new(
        point: Point,
        dms: DmsPoint,
        date: String,
        nts: NtsResult,
        utm: UtmResult,
        elevation: f64,
        declination: Option<DeclinationResult>,
    ) -> Self {
        Self {
            point,
            dms,
            date,
            nts,
            utm,
            elevation,
            declination,
        }
    }

    pub fn get_point(&self) -> &Point {
        &self.point
    }

    pub fn get_dms(&self) -> &DmsPoint {
        &self.dms
    }

    pub fn get_date(&self) -> &str {
        &self.date
    }

    pub fn get_nts(&self) -> &NtsResult {
        &self.nts
    }

    pub fn get_utm(&self) -> &UtmResult {
        &self.utm
    }

    pub fn get_elevation(&self) -> f64 {
        self.elevation
    }

    pub fn get_declination(&self) -> Option<&DeclinationResult> {
        self.declination.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{NtsResult, UtmResult};

    #[test]
    fn test_nts_default_is_empty() {
        let nts = NtsResult::default();
        assert_eq!(nts.get_nts250(), "");
        assert_eq!(nts.get_nts50(), "");
    }

    #[test]
    fn test_utm_unavailable() {
        let utm = UtmResult::unavailable();
        assert_eq!(utm.get_zone(), "Error");
        assert_eq!(utm.get_out_pt().get_x(), "-");
        assert_eq!(utm.get_out_pt().get_y(), "-");
    }
}
