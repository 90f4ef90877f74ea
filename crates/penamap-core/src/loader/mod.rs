// crates/penamap-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (I/O, decompression) and delegates the
//! document shape to [`convert`].

use crate::error::{PlaceError, Result};
use crate::model::PlaceStore;
use crate::raw::KmlRoot;
use once_cell::sync::OnceCell;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub mod convert;

/// The dataset shipped with the crate.
pub const EMBEDDED_DATASET: &str = include_str!("../../data/places.json");

static PLACE_STORE_CACHE: OnceCell<PlaceStore> = OnceCell::new();

/// Policy knobs for turning a document into a [`PlaceStore`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Drop malformed placemarks with a warning instead of failing the load.
    pub skip_invalid: bool,
}

impl LoadOptions {
    pub fn strict() -> Self {
        Self { skip_invalid: false }
    }

    pub fn lenient() -> Self {
        Self { skip_invalid: true }
    }
}

impl PlaceStore {
    /// The bundled dataset, parsed once per process.
    ///
    /// Loading is strict: the bundled file is expected to be clean, and a
    /// bad entry is a data bug surfaced as an error.
    pub fn load() -> Result<&'static PlaceStore> {
        PLACE_STORE_CACHE.get_or_try_init(|| {
            Self::from_json_str(EMBEDDED_DATASET, LoadOptions::strict())
        })
    }

    pub fn from_json_str(json: &str, options: LoadOptions) -> Result<Self> {
        let root: KmlRoot = serde_json::from_str(json)?;
        convert::from_raw(&root, options)
    }

    pub fn from_reader<R: Read>(reader: R, options: LoadOptions) -> Result<Self> {
        let root: KmlRoot = serde_json::from_reader(reader)?;
        convert::from_raw(&root, options)
    }

    /// Loads a dataset file; `.gz` files are decompressed when the
    /// `compact` feature is enabled.
    pub fn load_from_path(path: impl AsRef<Path>, options: LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let store = Self::from_reader(reader, options)?;
        tracing::debug!(path = %path.display(), places = store.len(), "dataset loaded");
        Ok(store)
    }
}

/// Opens a file, buffers it, and wraps it in a Gzip decoder when the
/// extension asks for one.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        PlaceError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if is_gzip(path) {
            use flate2::read::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}

#[cfg_attr(not(feature = "compact"), allow(dead_code))]
fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
