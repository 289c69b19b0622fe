//! City autocomplete for the checkout delivery field.
//!
//! Substring search over the same rate table the zone resolver uses. The
//! suggestion list is what the storefront shows under the city input while
//! the customer types (debounced on the caller side).

use crate::data::rate_table::RateTable;

/// Queries shorter than this (in characters) are rejected outright.
pub const MIN_QUERY_CHARS: usize = 2;

/// Upper bound on the suggestion list length.
pub const MAX_SUGGESTIONS: usize = 10;

pub struct CitySearch;

impl CitySearch {
    /// Collect up to [`MAX_SUGGESTIONS`] canonical city names containing the
    /// query, in table order, without duplicates. Pure and repeatable: the
    /// same query over the same table always yields the same list.
    pub fn suggest(table: &RateTable, query: &str) -> Vec<String> {
        if query.chars().count() < MIN_QUERY_CHARS {
            return Vec::new();
        }

        let needle = query.trim().to_lowercase();
        let mut suggestions: Vec<String> = Vec::new();

        for entry in table.entries() {
            if suggestions.len() == MAX_SUGGESTIONS {
                break;
            }
            if entry.city.to_lowercase().contains(&needle)
                && !suggestions.iter().any(|city| city == &entry.city)
            {
                suggestions.push(entry.city.clone());
            }
        }

        suggestions
    }
}
