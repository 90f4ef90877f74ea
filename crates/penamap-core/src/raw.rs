// crates/penamap-core/src/raw.rs

//! Serde mirror of the KML-as-JSON dataset:
//!
//! ```json
//! { "kml": { "Document": {
//!     "Placemark": [ { "name": "...", "Point": { "coordinates": "lng,lat" } } ],
//!     "Folder": { "Placemark": [ ... ], "Folder": [ ... ] }
//! } } }
//! ```
//!
//! Converters emit a lone object where a list has one element, so every
//! repeated element is read through [`OneOrMany`]. These types never leave
//! the loader.
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct KmlRoot {
    pub kml: Kml,
}

#[derive(Debug, Deserialize)]
pub struct Kml {
    #[serde(rename = "Document")]
    pub document: Container,
}

/// A `Document` or a `Folder`: both hold placemarks and nested folders.
#[derive(Debug, Default, Deserialize)]
pub struct Container {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Placemark", default)]
    pub placemarks: OneOrMany<PlacemarkRaw>,
    #[serde(rename = "Folder", default)]
    pub folders: OneOrMany<Container>,
}

#[derive(Debug, Deserialize)]
pub struct PlacemarkRaw {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(rename = "Point", default)]
    pub point: Option<PointRaw>,
}

#[derive(Debug, Deserialize)]
pub struct PointRaw {
    pub coordinates: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    // boxed: `Container` nests itself through this variant
    One(Box<T>),
}

impl<T> Default for OneOrMany<T> {
    fn default() -> Self {
        OneOrMany::Many(Vec::new())
    }
}

impl<T> OneOrMany<T> {
    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(v) => v,
            OneOrMany::One(t) => std::slice::from_ref(t.as_ref()),
        }
    }
}

impl Container {
    /// Depth-first walk: own placemarks first, then each folder in order.
    pub fn flatten(&self) -> Vec<&PlacemarkRaw> {
        let mut out = Vec::new();
        self.collect_into(&mut out);
        out
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a PlacemarkRaw>) {
        out.extend(self.placemarks.as_slice());
        for folder in self.folders.as_slice() {
            folder.collect_into(out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lone_objects_nest_through_folders() {
        let root: KmlRoot = serde_json::from_str(
            r#"{ "kml": { "Document": {
                "name": "Fiestas",
                "Placemark": { "name": "Top", "Point": { "coordinates": "1,1" } },
                "Folder": {
                    "Folder": {
                        "Placemark": { "name": "Deep", "Point": { "coordinates": "2,2" } }
                    }
                }
            } } }"#,
        )
        .unwrap();

        let doc = &root.kml.document;
        assert_eq!(doc.name.as_deref(), Some("Fiestas"));
        let names: Vec<Option<&str>> = doc.flatten().iter().map(|p| p.name.as_deref()).collect();
        assert_eq!(names, [Some("Top"), Some("Deep")]);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let c: Container = serde_json::from_str("{}").unwrap();
        assert!(c.flatten().is_empty());
        assert!(c.folders.as_slice().is_empty());
    }
}
