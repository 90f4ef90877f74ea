// crates/penamap-core/src/traits.rs
use crate::category::Category;
use crate::text::lower_contains;

/// Name-based matching helpers for types that expose a display name.
///
/// Implementors provide a `&str` view of their name via
/// [`NameMatch::name_str`] and get:
/// - [`NameMatch::name_contains`]: the autocomplete predicate (case-insensitive)
/// - [`NameMatch::category`]: the marker category
///
/// # Examples
/// ```rust
/// use penamap_core::traits::NameMatch;
/// use penamap_core::Category;
///
/// struct Spot(&'static str);
/// impl NameMatch for Spot {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Spot("Bar Pepe").name_contains("PEPE"));
/// assert_eq!(Spot("Parada Bus Centro").category(), Category::BusStop);
/// ```
pub trait NameMatch {
    /// Returns the display name used for matching.
    fn name_str(&self) -> &str;

    /// Case-insensitive substring match.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        lower_contains(self.name_str(), q)
    }

    /// Category derived from the name, see [`Category::classify`].
    #[inline]
    fn category(&self) -> Category {
        Category::classify(self.name_str())
    }
}
