//! Marker interaction walkthrough for penamap-rs
//!
//! Prints the updates each user action produces and the final scene.

use penamap_core::prelude::*;

fn main() -> Result<()> {
    let store = PlaceStore::load()?;
    let config = MapConfig::from_env();
    if !config.has_credentials() {
        println!("(no GOOGLE_MAPS_API_KEY set; a browser page would show its loading label)");
    }

    let mut controller = SearchController::new(store);

    println!("toggle_show_all  -> {:?}", controller.toggle_show_all());
    println!("activate #0      -> {:?}", controller.activate_marker_at(0));
    println!("activate #1      -> {:?}", controller.activate_marker_at(1));
    println!("dismiss          -> {:?}", controller.dismiss_active());
    println!("set_query(bar)   -> {:?}", controller.set_query("bar"));
    println!("select(Bar Pepe) -> {:?}", controller.select_suggestion("Bar Pepe"));

    let scene = MapScene::render(&controller, &config);
    println!("\nmode: {:?}, center: {}, markers: {}", scene.mode, scene.center, scene.markers.len());
    for m in &scene.markers {
        println!("  {} [{}] icon={:?}", m.title, m.category, m.icon);
    }
    Ok(())
}
