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

//! Remote lookups for a clicked point and their aggregation. The four
//! services are queried concurrently; a failed or empty answer from any
//! of them degrades to that service's placeholder value so one dead
//! service never blocks the panel.

use std::error::Error;
use std::thread;
use std::thread::ScopedJoinHandle;
use std::time::Duration;

use log::warn;
use serde::de::DeserializeOwned;
use ureq::Agent;

use crate::host::{Projector, Transport};
use crate::i18n::Translations;
use crate::lookup::response::{
    AltitudePayload, DeclinationPayload, Feature, FeatureCollection, NtsProperties, UtmProperties,
};
use crate::model::coord_info::{CoordinateInfo, UtmResult};
use crate::model::point::{DmsPoint, Point};
use crate::preference;

pub(crate) mod parse;
pub mod response;

pub type LookupError = Box<dyn Error + Send + Sync>;

const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// One method per remote service. Implementations must be callable
/// from the aggregation worker threads.
pub trait LookupService: Send + Sync {
    fn nts_sheets(&self, point: &Point) -> Result<Vec<Feature<NtsProperties>>, LookupError>;

    fn utm_zone(&self, point: &Point) -> Result<Vec<Feature<UtmProperties>>, LookupError>;

    fn elevation(&self, point: &Point) -> Result<AltitudePayload, LookupError>;

    fn declination(&self, point: &Point, date: &str) -> Result<DeclinationPayload, LookupError>;
}

/// Endpoints queried for each click. Defaults point at the public
/// NRCan services; each can be overridden through preferences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceUrls {
    pub nts: String,
    pub utm: String,
    pub elevation: String,
    pub declination: String,
}

impl Default for ServiceUrls {
    fn default() -> Self {
        Self {
            nts: "https://geogratis.gc.ca/services/delimitation/en/nts".to_string(),
            utm: "https://geogratis.gc.ca/services/delimitation/en/utmzone".to_string(),
            elevation: "https://geogratis.gc.ca/services/elevation/cdem/altitude".to_string(),
            declination: "http://geomag.nrcan.gc.ca/service/tools/magnetic/calculator/".to_string(),
        }
    }
}

pub struct GeogratisClient {
    agent: Agent,
    urls: ServiceUrls,
}

impl GeogratisClient {
    pub fn new(urls: ServiceUrls, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self { agent, urls }
    }

    pub fn from_preferences() -> Self {
        let pref = preference::manager();
        let mut urls = ServiceUrls::default();
        if let Some(url) = pref.get::<String>(preference::NTS_URL) {
            urls.nts = url;
        }
        if let Some(url) = pref.get::<String>(preference::UTM_URL) {
            urls.utm = url;
        }
        if let Some(url) = pref.get::<String>(preference::ELEVATION_URL) {
            urls.elevation = url;
        }
        if let Some(url) = pref.get::<String>(preference::DECLINATION_URL) {
            urls.declination = url;
        }
        let timeout = pref
            .get::<u64>(preference::SERVICE_TIMEOUT)
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Self::new(urls, Duration::from_secs(timeout))
    }

    // Both delimitation services take the point as a degenerate bounding box.
    fn get_features<P: DeserializeOwned>(
        &self,
        url: &str,
        point: &Point,
    ) -> Result<Vec<Feature<P>>, LookupError> {
        let bbox = format!(
            "{},{},{},{}",
            point.get_x(),
            point.get_y(),
            point.get_x(),
            point.get_y()
        );
        let collection: FeatureCollection<P> = self
            .agent
            .get(url)
            .set("Cache-Control", "no-cache")
            .query("bbox", &bbox)
            .call()?
            .into_json()?;
        Ok(collection.features)
    }
}

impl LookupService for GeogratisClient {
    fn nts_sheets(&self, point: &Point) -> Result<Vec<Feature<NtsProperties>>, LookupError> {
        self.get_features(&self.urls.nts, point)
    }

    fn utm_zone(&self, point: &Point) -> Result<Vec<Feature<UtmProperties>>, LookupError> {
        self.get_features(&self.urls.utm, point)
    }

    fn elevation(&self, point: &Point) -> Result<AltitudePayload, LookupError> {
        let payload = self
            .agent
            .get(&self.urls.elevation)
            .set("Cache-Control", "no-cache")
            .query("lat", &point.get_y().to_string())
            .query("lon", &point.get_x().to_string())
            .call()?
            .into_json()?;
        Ok(payload)
    }

    // Responses vary only with position and date, so this one may be cached.
    fn declination(&self, point: &Point, date: &str) -> Result<DeclinationPayload, LookupError> {
        let payload = self
            .agent
            .get(&self.urls.declination)
            .query("latitude", &point.get_y().to_string())
            .query("longitude", &point.get_x().to_string())
            .query("date", date)
            .query("format", "json")
            .call()?
            .into_json()?;
        Ok(payload)
    }
}

/// Queries every reachable service for the point and assembles the
/// answer. The declination service only talks to plaintext pages, so
/// that call is skipped entirely on a secure transport. Returns once
/// every issued call has settled.
pub fn gather(
    service: &dyn LookupService,
    projector: &dyn Projector,
    point: &Point,
    dms: DmsPoint,
    date: String,
    transport: Transport,
    text: &Translations,
) -> CoordinateInfo {
    let (nts, utm, altitude, declination) = thread::scope(|s| {
        let nts = s.spawn(|| service.nts_sheets(point));
        let utm = s.spawn(|| service.utm_zone(point));
        let altitude = s.spawn(|| service.elevation(point));
        let declination = if transport.is_secure() {
            None
        } else {
            Some(s.spawn(|| service.declination(point, &date)))
        };
        (
            settle(nts, "map sheet"),
            settle(utm, "UTM zone"),
            settle(altitude, "elevation"),
            declination.and_then(|handle| settle(handle, "declination")),
        )
    });

    let nts = nts.map(|features| parse::parse_nts(&features)).unwrap_or_default();
    let utm = utm
        .map(|features| parse::parse_utm(&features, point, projector))
        .unwrap_or_else(UtmResult::unavailable);
    let elevation = altitude.map(|payload| parse::parse_elevation(&payload)).unwrap_or(0.0);
    let declination = declination.map(|payload| parse::parse_declination(&payload, text));

    CoordinateInfo::new(point.clone(), dms, date, nts, utm, elevation, declination)
}

fn settle<T>(handle: ScopedJoinHandle<'_, Result<T, LookupError>>, what: &str) -> Option<T> {
    match handle.join() {
        Ok(Ok(value)) => Some(value),
        Ok(Err(e)) => {
            warn!("The {} lookup failed: {}", what, e);
            None
        }
        Err(_) => {
            warn!("The {} lookup panicked", what);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::i18n::{Locale, TRANSLATIONS};
    use crate::model::point::WGS84;

    struct FakeProjector;

    impl Projector for FakeProjector {
        fn project(
            &self,
            point: &Point,
            spatial_reference: u32,
        ) -> Result<Point, Box<dyn Error + Send + Sync>> {
            Ok(Point::new(
                point.get_x() * 1000.0,
                point.get_y() * 1000.0,
                spatial_reference,
            ))
        }

        fn to_dms(&self, point: &Point) -> DmsPoint {
            DmsPoint::new(point.get_x().to_string(), point.get_y().to_string())
        }
    }

    struct StubService {
        nts: Option<&'static str>,
        utm: Option<&'static str>,
        altitude: Option<&'static str>,
        declination: Option<&'static str>,
        calls: Mutex<Vec<&'static str>>,
    }

    impl StubService {
        fn healthy() -> Self {
            Self {
                nts: Some(r#"{"features": [{"properties": {"identifier": "031G", "name": "Example"}}]}"#),
                utm: Some(r#"{"features": [{"properties": {"identifier": 9}}]}"#),
                altitude: Some(r#"{"altitude": 120}"#),
                declination: Some(
                    r#"{"components": {"D": 5}, "annual_change": {"dD": 2}, "compass": "good"}"#,
                ),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn record(&self, call: &'static str) {
            self.calls.lock().unwrap().push(call);
        }

        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl LookupService for StubService {
        fn nts_sheets(&self, _point: &Point) -> Result<Vec<Feature<NtsProperties>>, LookupError> {
            self.record("nts");
            match self.nts {
                Some(json) => {
                    Ok(serde_json::from_str::<FeatureCollection<NtsProperties>>(json)?.features)
                }
                None => Err("nts service down".into()),
            }
        }

        fn utm_zone(&self, _point: &Point) -> Result<Vec<Feature<UtmProperties>>, LookupError> {
            self.record("utm");
            match self.utm {
                Some(json) => {
                    Ok(serde_json::from_str::<FeatureCollection<UtmProperties>>(json)?.features)
                }
                None => Err("utm service down".into()),
            }
        }

        fn elevation(&self, _point: &Point) -> Result<AltitudePayload, LookupError> {
            self.record("altitude");
            match self.altitude {
                Some(json) => Ok(serde_json::from_str(json)?),
                None => Err("elevation service down".into()),
            }
        }

        fn declination(&self, _point: &Point, _date: &str) -> Result<DeclinationPayload, LookupError> {
            self.record("declination");
            match self.declination {
                Some(json) => Ok(serde_json::from_str(json)?),
                None => Err("declination service down".into()),
            }
        }
    }

    fn gather_with(service: &StubService, transport: Transport) -> CoordinateInfo {
        let point = Point::new(-75.0, 45.0, WGS84);
        let dms = DmsPoint::new("75 00 00 W".to_string(), "45 00 00 N".to_string());
        gather(
            service,
            &FakeProjector,
            &point,
            dms,
            "2026-08-05".to_string(),
            transport,
            TRANSLATIONS.get(Locale::EnCa),
        )
    }

    #[test]
    fn test_gather_all_services() {
        let service = StubService::healthy();
        let info = gather_with(&service, Transport::Http);

        assert_eq!(info.get_nts().get_nts250(), "031G-Example");
        assert_eq!(info.get_nts().get_nts50(), "");
        assert_eq!(info.get_utm().get_zone(), "09");
        assert_eq!(info.get_elevation(), 120.0);
        assert_eq!(info.get_declination().unwrap().get_magnetic(), "5\u{00b0}");
        assert_eq!(info.get_date(), "2026-08-05");

        let calls = service.calls();
        assert_eq!(calls.len(), 4);
        for call in ["nts", "utm", "altitude", "declination"] {
            assert!(calls.contains(&call), "missing {} call", call);
        }
    }

    #[test]
    fn test_gather_skips_declination_on_secure_transport() {
        let service = StubService::healthy();
        let info = gather_with(&service, Transport::Https);

        assert!(info.get_declination().is_none());
        let calls = service.calls();
        assert_eq!(calls.len(), 3);
        assert!(!calls.contains(&"declination"));
    }

    #[test]
    fn test_gather_degrades_failed_lookups() {
        let service = StubService {
            nts: None,
            utm: None,
            altitude: None,
            declination: None,
            calls: Mutex::new(Vec::new()),
        };
        let info = gather_with(&service, Transport::Http);

        assert_eq!(info.get_nts().get_nts250(), "");
        assert_eq!(info.get_utm().get_zone(), "Error");
        assert_eq!(info.get_elevation(), 0.0);
        assert!(info.get_declination().is_none());
        assert_eq!(service.calls().len(), 4);
    }

    #[test]
    fn test_default_urls() {
        let urls = ServiceUrls::default();
        assert!(urls.nts.starts_with("https://"));
        assert!(urls.utm.starts_with("https://"));
        assert!(urls.elevation.starts_with("https://"));
        // The declination service is only published over plain http.
        assert!(urls.declination.starts_with("http://"));
    }
}
