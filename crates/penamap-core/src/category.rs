// crates/penamap-core/src/category.rs

//! # Icon / Category Classifier
//!
//! Maps a place name to a marker category. Patterns are token sequences
//! tested against the folded tokens of the name, in [`Category::ALL`]
//! order; the first hit wins.

use crate::text::tokens;
use serde::{Deserialize, Serialize};
use std::fmt;

const ICON_BASE: &str = "http://maps.google.com/mapfiles/ms/icons";

/// Marker category of a place. Variant order is the matching priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    BusStop,
    Bar,
    Restaurant,
    Pena,
    Untagged,
}

// (category, consecutive folded tokens)
const PATTERNS: &[(Category, &[&str])] = &[
    (Category::BusStop, &["parada", "bus"]),
    (Category::Bar, &["bar"]),
    (Category::Restaurant, &["restaurante"]),
    (Category::Pena, &["pena"]),
];

impl Category {
    /// All categories in priority order, `Untagged` last.
    pub const ALL: [Category; 5] = [
        Category::BusStop,
        Category::Bar,
        Category::Restaurant,
        Category::Pena,
        Category::Untagged,
    ];

    /// Classifies a place name.
    ///
    /// Case and accents are ignored and matching is token aware, so
    /// `"BAR PEPE"` is a bar while `"Barbacoa"` is not.
    ///
    /// ```rust
    /// use penamap_core::Category;
    ///
    /// assert_eq!(Category::classify("Parada Bus Centro"), Category::BusStop);
    /// assert_eq!(Category::classify("Bar Pepe"), Category::Bar);
    /// assert_eq!(Category::classify("Barbacoa"), Category::Untagged);
    /// ```
    pub fn classify(name: &str) -> Category {
        let toks = tokens(name);
        PATTERNS
            .iter()
            .find(|(_, pattern)| contains_run(&toks, pattern))
            .map(|(category, _)| *category)
            .unwrap_or(Category::Untagged)
    }

    /// Icon URL for the mapping widget; `None` keeps the default pin.
    pub fn icon_url(self) -> Option<String> {
        let file = match self {
            Category::BusStop => "bus.png",
            Category::Bar => "bar.png",
            Category::Restaurant => "restaurant.png",
            Category::Pena | Category::Untagged => return None,
        };
        Some(format!("{ICON_BASE}/{file}"))
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::BusStop => "bus-stop",
            Category::Bar => "bar",
            Category::Restaurant => "restaurant",
            Category::Pena => "pena",
            Category::Untagged => "untagged",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn contains_run(toks: &[String], pattern: &[&str]) -> bool {
    toks.windows(pattern.len())
        .any(|w| w.iter().zip(pattern).all(|(t, p)| t == p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bus_stop_wins_over_bar() {
        assert_eq!(Category::classify("Parada Bus Bar Pepe"), Category::BusStop);
        assert_eq!(Category::classify("Bar junto a la parada bus"), Category::BusStop);
    }

    #[test]
    fn bar_is_case_insensitive_and_token_aware() {
        assert_eq!(Category::classify("BAR PEPE"), Category::Bar);
        assert_eq!(Category::classify("El bar de Juan"), Category::Bar);
        assert_eq!(Category::classify("Barrio Alto"), Category::Untagged);
        assert_eq!(Category::classify("Peña Barullo"), Category::Pena);
    }

    #[test]
    fn parada_bus_needs_both_tokens_in_sequence() {
        assert_eq!(Category::classify("Parada de Bus"), Category::Untagged);
        assert_eq!(Category::classify("Bus Parada"), Category::Untagged);
        assert_eq!(Category::classify("PARADA-BUS Norte"), Category::BusStop);
    }

    #[test]
    fn accents_fold_for_pena() {
        assert_eq!(Category::classify("PEÑA El Cencerro"), Category::Pena);
        assert_eq!(Category::classify("Restaurante El Mesón"), Category::Restaurant);
    }

    #[test]
    fn icons_only_for_tagged_kinds() {
        assert_eq!(
            Category::BusStop.icon_url().as_deref(),
            Some("http://maps.google.com/mapfiles/ms/icons/bus.png")
        );
        assert!(Category::Bar.icon_url().is_some());
        assert!(Category::Untagged.icon_url().is_none());
        assert!(Category::Pena.icon_url().is_none());
    }

    #[test]
    fn all_follows_priority_order() {
        let tagged: Vec<Category> = PATTERNS.iter().map(|(c, _)| *c).collect();
        assert_eq!(&Category::ALL[..tagged.len()], tagged.as_slice());
        assert_eq!(Category::ALL.last(), Some(&Category::Untagged));
    }
}
