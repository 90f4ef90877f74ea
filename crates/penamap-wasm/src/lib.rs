//! penamap-wasm — WebAssembly bindings for penamap-core
//!
//! Exposes the search and marker controller to the browser page that hosts
//! the mapping widget. The places dataset is embedded in the binary through
//! `penamap-core`.
//!
//! Quick start (browser)
//! ---------------------
//! ```javascript
//! import init, { MapSession, place_count } from 'penamap-wasm';
//!
//! await init();
//! console.log('Places:', place_count());
//!
//! const session = new MapSession();
//! session.setQuery('bar');
//! console.log(session.suggestions());      // ["Bar Pepe", "Bar La Plaza"]
//! session.selectSuggestion('Bar Pepe');
//! const scene = session.scene();           // { center, zoom, markers, overlay, ... }
//! ```
//!
//! Notes
//! -----
//! - Mutating methods return the ordered list of updates they applied. An
//!   `active_cleared` followed by `active_set` means the info window must be
//!   closed and reopened, not patched in place.
//! - `scene()` is the only thing the widget needs to draw.
use penamap_core::{Category, DisplayMode, MapConfig, MapScene, PlaceStore, SearchController};
use penamap_core::view::{LOADING_LABEL, SEARCH_PLACEHOLDER};
use serde_json::json;
use serde_wasm_bindgen::to_value;
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    match PlaceStore::load() {
        Ok(store) => web_sys::console::log_1(&format!("✓ Loaded {} places", store.len()).into()),
        Err(e) => web_sys::console::error_1(&format!("Failed to load places: {e}").into()),
    }
}

fn store() -> Result<&'static PlaceStore, JsValue> {
    PlaceStore::load().map_err(|e| JsValue::from_str(&e.to_string()))
}

/* --------------------------------------------------------------------------
   Basic Queries
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub fn place_count() -> usize {
    PlaceStore::load().map(PlaceStore::len).unwrap_or(0)
}

/// Category tag of a name, e.g. `"bus-stop"`.
#[wasm_bindgen]
pub fn classify(name: &str) -> String {
    Category::classify(name).label().to_string()
}

#[wasm_bindgen]
pub fn icon_for(name: &str) -> Option<String> {
    Category::classify(name).icon_url()
}

#[wasm_bindgen]
pub fn search_placeholder() -> String {
    SEARCH_PLACEHOLDER.to_string()
}

#[wasm_bindgen]
pub fn loading_label() -> String {
    LOADING_LABEL.to_string()
}

#[wasm_bindgen]
pub fn get_stats() -> Result<JsValue, JsValue> {
    let stats = store()?.stats();
    let by_category: serde_json::Map<String, serde_json::Value> = stats
        .by_category
        .iter()
        .map(|(c, n)| (c.label().to_string(), json!(n)))
        .collect();
    let stats = json!({
        "places": stats.places,
        "by_category": by_category,
    });
    Ok(to_value(&stats)?)
}

/* --------------------------------------------------------------------------
   Map Session (one mounted map view)
-------------------------------------------------------------------------- */

#[wasm_bindgen]
pub struct MapSession {
    controller: SearchController<'static>,
    config: MapConfig,
}

#[wasm_bindgen]
impl MapSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<MapSession, JsValue> {
        Ok(Self {
            controller: SearchController::new(store()?),
            config: MapConfig::default(),
        })
    }

    /// Passes the page's widget credential; without it the page keeps
    /// showing the loading label.
    #[wasm_bindgen(js_name = setApiKey)]
    pub fn set_api_key(&mut self, key: Option<String>) {
        self.config.api_key = key.filter(|k| !k.trim().is_empty());
    }

    #[wasm_bindgen(js_name = hasCredentials)]
    pub fn has_credentials(&self) -> bool {
        self.config.has_credentials()
    }

    #[wasm_bindgen(js_name = setQuery)]
    pub fn set_query(&mut self, text: &str) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.controller.set_query(text))?)
    }

    #[wasm_bindgen(js_name = query)]
    pub fn query(&self) -> String {
        self.controller.state().query.clone()
    }

    /// Suggestion names in store order.
    #[wasm_bindgen(js_name = suggestions)]
    pub fn suggestions(&self) -> js_sys::Array {
        self.controller
            .state()
            .suggestions
            .iter()
            .map(|p| JsValue::from_str(&p.name))
            .collect()
    }

    #[wasm_bindgen(js_name = suggestionCount)]
    pub fn suggestion_count(&self) -> usize {
        self.controller.state().suggestions.len()
    }

    #[wasm_bindgen(js_name = selectSuggestion)]
    pub fn select_suggestion(&mut self, name: &str) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.controller.select_suggestion(name))?)
    }

    #[wasm_bindgen(js_name = toggleShowAll)]
    pub fn toggle_show_all(&mut self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.controller.toggle_show_all())?)
    }

    /// Marker click, by the `index` carried on each scene marker.
    #[wasm_bindgen(js_name = activateMarker)]
    pub fn activate_marker(&mut self, index: usize) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.controller.activate_marker_at(index))?)
    }

    #[wasm_bindgen(js_name = dismissActive)]
    pub fn dismiss_active(&mut self) -> Result<JsValue, JsValue> {
        Ok(to_value(&self.controller.dismiss_active())?)
    }

    #[wasm_bindgen(js_name = displayMode)]
    pub fn display_mode(&self) -> String {
        match self.controller.display_mode() {
            DisplayMode::Idle => "idle",
            DisplayMode::ShowingAll => "showing_all",
            DisplayMode::ShowingSelected => "showing_selected",
        }
        .to_string()
    }

    #[wasm_bindgen(js_name = activeName)]
    pub fn active_name(&self) -> Option<String> {
        self.controller.state().active.as_ref().map(|p| p.name.clone())
    }

    pub fn scene(&self) -> Result<JsValue, JsValue> {
        Ok(to_value(&MapScene::render(&self.controller, &self.config))?)
    }
}
