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

//! Wire shapes of the lookup service payloads.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection<P> {
    #[serde(default = "Vec::new")]
    pub features: Vec<Feature<P>>,
}

#[derive(Debug, Deserialize)]
pub struct Feature<P> {
    pub properties: P,
}

#[derive(Debug, Deserialize)]
pub struct NtsProperties {
    pub identifier: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct UtmProperties {
    pub identifier: u32,
}

#[derive(Debug, Deserialize)]
pub struct AltitudePayload {
    pub altitude: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct DeclinationPayload {
    pub components: DeclinationComponents,
    pub annual_change: AnnualChange,
    #[serde(default)]
    pub compass: String,
}

#[derive(Debug, Deserialize)]
pub struct DeclinationComponents {
    #[serde(rename = "D")]
    pub d: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub struct AnnualChange {
    #[serde(rename = "dD")]
    pub d_d: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_nts_features() {
        let payload = r#"{"features": [
            {"properties": {"identifier": "031G", "name": "Ottawa", "scale": 250000}},
            {"properties": {"identifier": "031G05", "name": "Ottawa"}}
        ]}"#;
        let collection: FeatureCollection<NtsProperties> = serde_json::from_str(payload).unwrap();
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0].properties.identifier, "031G");
        assert_eq!(collection.features[1].properties.name, "Ottawa");
    }

    #[test]
    fn test_deserialize_missing_features_key() {
        let collection: FeatureCollection<UtmProperties> = serde_json::from_str("{}").unwrap();
        assert!(collection.features.is_empty());
    }

    #[test]
    fn test_deserialize_altitude_null() {
        let payload: AltitudePayload = serde_json::from_str(r#"{"altitude": null}"#).unwrap();
        assert_eq!(payload.altitude, None);
        let payload: AltitudePayload = serde_json::from_str(r#"{"altitude": 120.0}"#).unwrap();
        assert_eq!(payload.altitude, Some(120.0));
    }

    #[test]
    fn test_deserialize_declination() {
        let payload = r#"{
            "components": {"D": -10.5},
            "annual_change": {"dD": 2.0},
            "compass": "useless"
        }"#;
        let decli: DeclinationPayload = serde_json::from_str(payload).unwrap();
        assert_eq!(decli.components.d, Some(-10.5));
        assert_eq!(decli.annual_change.d_d, Some(2.0));
        assert_eq!(decli.compass, "useless");
    }
}
