// crates/penamap-core/src/lib.rs

//! penamap-core
//! ============
//!
//! The logic behind the peñas map: a read-only [`PlaceStore`] loaded from a
//! KML-shaped JSON document, a [`SearchController`] that owns the
//! autocomplete and marker selection state, and a name based
//! [`Category`] classifier that picks marker icons.
//!
//! The mapping widget itself is not part of this crate. [`MapScene`] is the
//! render model a widget binding consumes.
//!
//! ```rust
//! use penamap_core::prelude::*;
//!
//! let store = PlaceStore::load()?;
//! let mut controller = SearchController::new(store);
//!
//! controller.set_query("bar pepe");
//! controller.select_suggestion("Bar Pepe");
//!
//! assert_eq!(controller.display_mode(), DisplayMode::ShowingSelected);
//! # Ok::<(), penamap_core::PlaceError>(())
//! ```

pub mod category;
pub mod common;
pub mod config;
pub mod controller;
pub mod error;
pub mod loader;
pub mod model;
// Serde mirror of the source document (used by the loader only)
#[doc(hidden)]
pub mod raw;
pub mod text;
pub mod traits;
pub mod view;

// Re-exports
pub use crate::category::Category;
pub use crate::common::{Coordinate, StoreStats};
pub use crate::config::MapConfig;
pub use crate::controller::{DisplayMode, SearchController, SelectionState, Update};
pub use crate::error::{PlaceError, Result};
pub use crate::loader::LoadOptions;
pub use crate::model::{PlaceRecord, PlaceStore};
pub use crate::view::MapScene;

pub mod prelude {
    //! Everything a caller usually needs in one import.
    pub use crate::category::Category;
    pub use crate::common::{Coordinate, StoreStats};
    pub use crate::config::MapConfig;
    pub use crate::controller::{DisplayMode, SearchController, SelectionState, Update};
    pub use crate::error::{PlaceError, Result};
    pub use crate::loader::LoadOptions;
    pub use crate::model::{PlaceRecord, PlaceStore};
    pub use crate::traits::NameMatch;
    pub use crate::view::{InfoOverlay, MapMarker, MapScene};
}
