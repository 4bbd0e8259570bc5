use crate::model::coord_info::{CoordinateInfo, DeclinationResult, NtsResult, UtmPoint, UtmResult};
use crate::model::point::{DmsPoint, Point, WGS84};

pub fn make_point() -> Point {
    Point::new(-75.0, 45.0, WGS84)
}

pub fn make_info(declination: Option<DeclinationResult>) -> CoordinateInfo {
    CoordinateInfo::new(
        make_point(),
        DmsPoint::new("75 00 00 W".to_string(), "45 00 00 N".to_string()),
        "2026-08-05".to_string(),
        NtsResult::new("031G-Ottawa".to_string(), "031G05-Ottawa".to_string()),
        UtmResult::new(
            "18".to_string(),
            UtmPoint::new("341825.4".to_string(), "4984251.7".to_string()),
        ),
        120.0,
        declination,
    )
}
