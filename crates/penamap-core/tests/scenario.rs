use penamap_core::prelude::*;

const DOC: &str = r#"{
  "kml": { "Document": { "Placemark": [
    { "name": "Parada Bus Centro", "Point": { "coordinates": "-4.1500,40.5730" } },
    { "name": "Bar Pepe", "Point": { "coordinates": "-4.1510,40.5731" } }
  ] } }
}"#;

#[test]
fn search_select_and_classify() {
    let store = PlaceStore::from_json_str(DOC, LoadOptions::default()).unwrap();
    let mut controller = SearchController::new(&store);

    controller.set_query("bar");
    let names: Vec<&str> = controller
        .state()
        .suggestions
        .iter()
        .map(|p| p.name())
        .collect();
    assert_eq!(names, ["Bar Pepe"]);

    controller.select_suggestion("Bar Pepe");
    let state = controller.state();
    let selected = state.selected.as_ref().expect("selected");
    assert_eq!(selected.name, "Bar Pepe");
    assert_eq!(selected.coordinate, Coordinate::new(40.5731, -4.1510));
    assert!(!state.show_all);

    assert_eq!(Category::classify("Parada Bus Centro"), Category::BusStop);
    assert_eq!(Category::classify("Bar Pepe"), Category::Bar);
}

#[test]
fn full_session_against_bundled_dataset() {
    let store = PlaceStore::load().unwrap();
    let mut controller = SearchController::new(store);
    let config = MapConfig::default();

    controller.toggle_show_all();
    let scene = MapScene::render(&controller, &config);
    assert_eq!(scene.mode, DisplayMode::ShowingAll);
    assert_eq!(scene.markers.len(), store.len());

    // clicking a marker in show-all mode
    let index = scene.markers[3].index.unwrap();
    let updates = controller.activate_marker_at(index);
    assert_eq!(updates[0], Update::ActiveCleared);
    assert!(matches!(updates[1], Update::ActiveSet(_)));

    // typing leaves show-all but keeps the overlay open
    controller.set_query("peña");
    assert_eq!(controller.display_mode(), DisplayMode::Idle);
    assert!(controller.state().active.is_some());
    assert!(controller
        .state()
        .suggestions
        .iter()
        .all(|p| p.category() == Category::Pena));

    let first = controller.state().suggestions[0].name.clone();
    controller.select_suggestion(&first);
    let scene = MapScene::render(&controller, &config);
    assert_eq!(scene.mode, DisplayMode::ShowingSelected);
    assert!(scene.overlay.is_none());
    assert_eq!(scene.markers[0].title, first);
}

#[test]
fn nested_folders_flatten_in_document_order() {
    let doc = r#"{ "kml": { "Document": {
        "Placemark": { "name": "Top", "Point": { "coordinates": "1,1" } },
        "Folder": [
          { "Placemark": [ { "name": "A", "Point": { "coordinates": "2,2" } } ],
            "Folder": { "Placemark": { "name": "A.1", "Point": { "coordinates": "3,3" } } } },
          { "Placemark": { "name": "B", "Point": { "coordinates": "4,4" } } }
        ]
    } } }"#;
    let store = PlaceStore::from_json_str(doc, LoadOptions::strict()).unwrap();
    let names: Vec<&str> = store.iter().map(|p| p.name()).collect();
    assert_eq!(names, ["Top", "A", "A.1", "B"]);
}

#[test]
fn malformed_placemark_fails_strict_load() {
    let doc = r#"{ "kml": { "Document": { "Placemark": [
        { "name": "Ok", "Point": { "coordinates": "-4.15,40.57" } },
        { "name": "Broken", "Point": { "coordinates": "-4.15;40.57" } }
    ] } } }"#;
    match PlaceStore::from_json_str(doc, LoadOptions::strict()) {
        Err(PlaceError::InvalidPlacemark { index, name, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(name, "Broken");
        }
        other => panic!("expected InvalidPlacemark, got {other:?}"),
    }
}

#[test]
fn malformed_placemarks_are_skipped_when_lenient() {
    let doc = r#"{ "kml": { "Document": { "Placemark": [
        { "name": "No point" },
        { "name": "  ", "Point": { "coordinates": "1,1" } },
        { "name": "Ok", "Point": { "coordinates": "-4.15,40.57" } },
        { "name": "Off the globe", "Point": { "coordinates": "-4.15,140.57" } }
    ] } } }"#;
    let store = PlaceStore::from_json_str(doc, LoadOptions::lenient()).unwrap();
    assert_eq!(store.len(), 1);
    assert_eq!(store.places()[0].name, "Ok");
}

#[test]
fn names_are_kept_verbatim_as_search_keys() {
    let doc = r#"{ "kml": { "Document": { "Placemark": [
        { "name": " Bar Pepe ", "Point": { "coordinates": "-4.1510,40.5731" } }
    ] } } }"#;
    let store = PlaceStore::from_json_str(doc, LoadOptions::strict()).unwrap();
    assert_eq!(store.places()[0].name, " Bar Pepe ");

    let mut controller = SearchController::new(&store);
    controller.set_query("pepe");
    assert!(!controller.select_suggestion(" Bar Pepe ").is_empty());
    assert_eq!(
        controller.state().selected.as_ref().map(|p| p.name()),
        Some(" Bar Pepe ")
    );
}

#[test]
fn empty_and_non_kml_documents_are_rejected() {
    let empty = r#"{ "kml": { "Document": { "name": "nothing here" } } }"#;
    assert!(matches!(
        PlaceStore::from_json_str(empty, LoadOptions::lenient()),
        Err(PlaceError::EmptyDocument)
    ));
    assert!(matches!(
        PlaceStore::from_json_str(r#"{"places": []}"#, LoadOptions::default()),
        Err(PlaceError::Json(_))
    ));
}

#[test]
fn loads_plain_and_gzip_files() {
    let dir = tempfile::tempdir().unwrap();
    let plain = dir.path().join("places.json");
    std::fs::write(&plain, DOC).unwrap();
    let store = PlaceStore::load_from_path(&plain, LoadOptions::default()).unwrap();
    assert_eq!(store.len(), 2);

    #[cfg(feature = "compact")]
    {
        use std::io::Write;

        let gz = dir.path().join("places.json.gz");
        let mut enc = flate2::write::GzEncoder::new(
            std::fs::File::create(&gz).unwrap(),
            flate2::Compression::default(),
        );
        enc.write_all(DOC.as_bytes()).unwrap();
        enc.finish().unwrap();
        let store = PlaceStore::load_from_path(&gz, LoadOptions::default()).unwrap();
        assert_eq!(store.find_by_name("Bar Pepe").map(|p| p.lat()), Some(40.5731));
    }
}
