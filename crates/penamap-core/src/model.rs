// crates/penamap-core/src/model.rs
use crate::category::Category;
use crate::common::{Coordinate, StoreStats};
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};

/// One point of interest.
///
/// `name` is both the display text and the search key; it is not unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub name: String,
    pub coordinate: Coordinate,
}

impl PlaceRecord {
    pub fn new(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lat(&self) -> f64 {
        self.coordinate.lat
    }

    pub fn lng(&self) -> f64 {
        self.coordinate.lng
    }
}

impl NameMatch for PlaceRecord {
    fn name_str(&self) -> &str {
        &self.name
    }
}

/// Ordered, read-only collection of places.
///
/// Built once by the [loader](crate::loader); there is no mutating API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaceStore {
    places: Vec<PlaceRecord>,
}

impl PlaceStore {
    pub(crate) fn from_records(places: Vec<PlaceRecord>) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlaceRecord> {
        self.places.iter()
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PlaceRecord> {
        self.places.get(index)
    }

    /// First place whose name equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&PlaceRecord> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Places whose name contains `query` ignoring case, in store order.
    /// A blank query matches nothing.
    pub fn find_by_substring(&self, query: &str) -> Vec<&PlaceRecord> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        self.places
            .iter()
            .filter(|p| p.name_contains(query))
            .collect()
    }

    pub fn stats(&self) -> StoreStats {
        let by_category = Category::ALL
            .iter()
            .map(|c| (*c, self.places.iter().filter(|p| p.category() == *c).count()))
            .filter(|(_, n)| *n > 0)
            .collect();
        StoreStats {
            places: self.places.len(),
            by_category,
        }
    }
}

impl<'a> IntoIterator for &'a PlaceStore {
    type Item = &'a PlaceRecord;
    type IntoIter = std::slice::Iter<'a, PlaceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.places.iter()
    }
}
