//! Delivery zone resolution.
//!
//! Classifies a free-text city into one of three zones: free delivery
//! (curated fragment list), tabulated price (regional rate rows) or unknown
//! (a manager quotes it by hand). Pure lookup over the injected
//! [`RateTable`]; same table + same input always gives the same quote.

use regex::Regex;

use crate::data::rate_table::{RateTable, SAME_METRO_MARKER};
use crate::models::delivery::DeliveryQuote;

/// Turnaround shown for free-zone destinations.
pub const ETA_FREE_ZONE: &str = "1-3 дня";

/// Wide fallback window when a distance label carries no parseable figure.
pub const ETA_FALLBACK: &str = "3-7 дней";

/// Sentinel ETA for cities the table does not know. The UI renders this as
/// a call-to-action, not as a delivery estimate.
pub const ETA_NEEDS_CLARIFICATION: &str = "уточняется у менеджера";

pub struct DeliveryService;

impl DeliveryService {
    /// Resolve a destination into a delivery quote.
    ///
    /// The optional street address is accepted for parity with the checkout
    /// form but never affects classification; only the city does.
    pub fn resolve(table: &RateTable, city_input: &str, _address: Option<&str>) -> DeliveryQuote {
        let needle = city_input.trim().to_lowercase();
        if needle.is_empty() {
            return DeliveryQuote::no_input();
        }

        // Free zones win before any paid row is considered, even when the
        // same city is also listed in a regional table.
        if table.free_zones().iter().any(|zone| needle.contains(zone)) {
            return DeliveryQuote::free(city_input, ETA_FREE_ZONE);
        }

        // First match in table order wins. The substring check is
        // bidirectional so that partial input ("кам") finds the full row
        // and suffixed input ("г. Ревда, центр") still finds its city.
        for entry in table.entries() {
            let row_city = entry.city.to_lowercase();
            if row_city.contains(&needle) || needle.contains(&row_city) {
                return DeliveryQuote::tabulated(entry, Self::eta_for_distance(&entry.distance));
            }
        }

        DeliveryQuote::unknown(city_input, ETA_NEEDS_CLARIFICATION)
    }

    /// Map a rate-row distance label to a delivery window.
    ///
    /// Band thresholds are strict less-than: 49 км is still "1-2 дня",
    /// 50 км already "2-4 дня".
    pub fn eta_for_distance(distance: &str) -> &'static str {
        if distance == SAME_METRO_MARKER {
            return "1-2 дня";
        }

        let leading_int = Regex::new(r"^\s*(\d+)").unwrap();
        let km = leading_int
            .captures(distance)
            .and_then(|caps| caps[1].parse::<u32>().ok());

        match km {
            Some(km) if km < 50 => "1-2 дня",
            Some(km) if km < 150 => "2-4 дня",
            Some(km) if km < 300 => "3-5 дней",
            Some(_) => "5-10 дней",
            None => ETA_FALLBACK,
        }
    }
}
