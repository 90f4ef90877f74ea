// crates/penamap-core/src/config.rs
use crate::common::Coordinate;
use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "GOOGLE_MAPS_API_KEY";
pub const LIBRARIES_ENV: &str = "GOOGLE_MAPS_LIBRARIES";

/// Initial view of the town square.
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(40.57296655064263, -4.1542498840674185);
pub const DEFAULT_ZOOM: u8 = 17;

/// Mapping widget settings supplied by the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center: Coordinate,
    pub zoom: u8,
    /// Widget credential. Without it the page stays on its loading placeholder.
    pub api_key: Option<String>,
    pub libraries: Vec<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: DEFAULT_CENTER,
            zoom: DEFAULT_ZOOM,
            api_key: None,
            libraries: vec!["places".to_string()],
        }
    }
}

impl MapConfig {
    /// Defaults overlaid with `GOOGLE_MAPS_API_KEY` and `GOOGLE_MAPS_LIBRARIES`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        cfg.api_key = lookup(API_KEY_ENV)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        if let Some(libs) = lookup(LIBRARIES_ENV) {
            let libs: Vec<String> = libs
                .split(',')
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .map(str::to_owned)
                .collect();
            if !libs.is_empty() {
                cfg.libraries = libs;
            }
        }
        cfg
    }

    pub fn has_credentials(&self) -> bool {
        self.api_key.is_some()
    }
}
