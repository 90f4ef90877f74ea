// crates/penamap-core/src/view.rs

//! Render model handed to the mapping widget.

use crate::category::Category;
use crate::common::Coordinate;
use crate::config::MapConfig;
use crate::controller::{DisplayMode, SearchController};
use crate::model::PlaceRecord;
use crate::traits::NameMatch;
use serde::Serialize;

pub const SEARCH_PLACEHOLDER: &str = "Busca una peña...";
pub const LOADING_LABEL: &str = "Cargando...";
pub const SHOW_ALL_LABEL: &str = "Mostrar todo";
pub const HIDE_ALL_LABEL: &str = "Ocultar todo";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// Store index for click routing; `None` when the place is not in the store.
    pub index: Option<usize>,
    pub title: String,
    pub position: Coordinate,
    pub category: Category,
    pub icon: Option<String>,
}

impl MapMarker {
    fn new(index: Option<usize>, place: &PlaceRecord) -> Self {
        let category = place.category();
        Self {
            index,
            title: place.name.clone(),
            position: place.coordinate,
            category,
            icon: category.icon_url(),
        }
    }
}

/// Content of the info window for the active place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InfoOverlay {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// Everything the widget needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub center: Coordinate,
    pub zoom: u8,
    pub mode: DisplayMode,
    pub markers: Vec<MapMarker>,
    pub overlay: Option<InfoOverlay>,
    pub toggle_label: &'static str,
}

impl MapScene {
    pub fn render(controller: &SearchController<'_>, config: &MapConfig) -> Self {
        let store = controller.store();
        let state = controller.state();
        let mode = controller.display_mode();

        let markers = match (mode, &state.selected) {
            (DisplayMode::ShowingAll, _) => store
                .iter()
                .enumerate()
                .map(|(i, p)| MapMarker::new(Some(i), p))
                .collect(),
            (DisplayMode::ShowingSelected, Some(selected)) => {
                let index = store.iter().position(|p| p == selected);
                vec![MapMarker::new(index, selected)]
            }
            _ => Vec::new(),
        };

        let center = match (mode, &state.selected) {
            (DisplayMode::ShowingSelected, Some(selected)) => selected.coordinate,
            _ => config.center,
        };

        let overlay = state.active.as_ref().map(|p| InfoOverlay {
            name: p.name.clone(),
            lat: p.lat(),
            lng: p.lng(),
        });

        Self {
            center,
            zoom: config.zoom,
            mode,
            markers,
            overlay,
            toggle_label: if state.show_all { HIDE_ALL_LABEL } else { SHOW_ALL_LABEL },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlaceStore;

    #[test]
    fn idle_scene_is_empty_and_centered_on_default() {
        let store = PlaceStore::load().unwrap();
        let c = SearchController::new(store);
        let scene = MapScene::render(&c, &MapConfig::default());
        assert!(scene.markers.is_empty());
        assert!(scene.overlay.is_none());
        assert_eq!(scene.center, MapConfig::default().center);
        assert_eq!(scene.toggle_label, SHOW_ALL_LABEL);
    }

    #[test]
    fn show_all_draws_every_place_with_icons() {
        let store = PlaceStore::load().unwrap();
        let mut c = SearchController::new(store);
        c.toggle_show_all();
        let scene = MapScene::render(&c, &MapConfig::default());
        assert_eq!(scene.markers.len(), store.len());
        assert_eq!(scene.toggle_label, HIDE_ALL_LABEL);
        let bus = scene
            .markers
            .iter()
            .find(|m| m.title == "Parada Bus Centro")
            .unwrap();
        assert_eq!(bus.category, Category::BusStop);
        assert!(bus.icon.as_deref().unwrap().ends_with("/bus.png"));
    }

    #[test]
    fn selection_centers_and_overlay_shows_coordinates() {
        let store = PlaceStore::load().unwrap();
        let mut c = SearchController::new(store);
        c.set_query("bar pepe");
        c.select_suggestion("Bar Pepe");
        let idx = store.iter().position(|p| p.name == "Bar Pepe");
        c.activate_marker_at(idx.unwrap());

        let scene = MapScene::render(&c, &MapConfig::default());
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].index, idx);
        assert_eq!(scene.center, Coordinate::new(40.5731, -4.1510));
        let overlay = scene.overlay.unwrap();
        assert_eq!((overlay.name.as_str(), overlay.lat, overlay.lng), ("Bar Pepe", 40.5731, -4.1510));
    }
}
