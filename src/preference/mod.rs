use std::{
    str::FromStr,
    sync::{Arc, LazyLock, RwLock},
};

use log::warn;
use preferences::{AppInfo, Preferences, PreferencesMap};

const PREFS_PATH: &str = "coord-info";
pub const APP_INFO: AppInfo = AppInfo {
    name: "coord-info",
    author: "shartrec.com",
};

// Preference constants
pub const NTS_URL: &str = "Service.ntsUrl";
pub const UTM_URL: &str = "Service.utmUrl";
pub const ELEVATION_URL: &str = "Service.elevationUrl";
pub const DECLINATION_URL: &str = "Service.declinationUrl";
pub const SERVICE_TIMEOUT: &str = "Service.timeoutSeconds";

static MANAGER: LazyLock<PreferenceManager> = LazyLock::new(|| PreferenceManager {
    preferences: {
        match PreferencesMap::<String>::load(&APP_INFO, PREFS_PATH) {
            Ok(map) => Arc::new(RwLock::new(map)),
            Err(e) => {
                warn!("Error opening preferences {}", e);
                Arc::new(RwLock::new(PreferencesMap::new()))
            }
        }
    },
    path: PREFS_PATH,
});

pub struct PreferenceManager {
    preferences: Arc<RwLock<PreferencesMap>>,
    path: &'static str,
}

impl PreferenceManager {
    pub fn get<T: FromStr>(&self, key: &str) -> Option<T> {
        match self.preferences.read().unwrap().get(key) {
            Some(s) => match s.parse::<T>() {
                Ok(i) => Some(i),
                Err(_e) => None,
            },
            None => None,
        }
    }

    pub fn put<T: ToString>(&self, key: &str, value: T) {
        {
            let mut prefs = self.preferences.write().unwrap();
            prefs.insert(key.to_string(), value.to_string());
        }
        self.store();
    }

    pub fn remove(&self, key: &str) {
        {
            let mut prefs = self.preferences.write().unwrap();
            let _e = prefs.remove(key);
        }
        self.store();
    }

    fn store(&self) {
        let prefs = self.preferences.read().unwrap();
        let _ = prefs.save(&APP_INFO, self.path);
    }
}

pub fn manager() -> &'static PreferenceManager {
    &MANAGER
}
