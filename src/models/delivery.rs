use serde::{Deserialize, Serialize};

/// One row of the delivery rate table.
///
/// `distance` is either the same-metro marker (see
/// [`crate::data::rate_table::SAME_METRO_MARKER`]) or free text with a
/// leading kilometre figure, e.g. "320 км".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateEntry {
    pub city: String,
    pub price: u32,
    pub distance: String,
}

/// Result of resolving a destination city against the rate table.
///
/// Created fresh per call and never mutated. Two zero-price non-free shapes
/// exist and callers must tell them apart: the blank-input sentinel
/// (`city_label` empty) and the unknown-city result (`city_label` echoes the
/// customer's input and `eta` carries the clarification sentinel).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryQuote {
    pub city_label: String,
    pub price: u32,
    pub is_free: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
}

impl DeliveryQuote {
    /// Sentinel for a blank city field: nothing typed yet, nothing to show.
    pub fn no_input() -> Self {
        Self {
            city_label: String::new(),
            price: 0,
            is_free: false,
            distance: None,
            eta: None,
        }
    }

    /// Free-delivery result. Keeps the customer's own spelling as the label.
    pub fn free(city_label: &str, eta: &str) -> Self {
        Self {
            city_label: city_label.to_string(),
            price: 0,
            is_free: true,
            distance: None,
            eta: Some(eta.to_string()),
        }
    }

    /// Paid delivery priced from a rate row. The label is the table's
    /// canonical city name, not whatever the customer typed.
    pub fn tabulated(entry: &RateEntry, eta: &str) -> Self {
        Self {
            city_label: entry.city.clone(),
            price: entry.price,
            is_free: false,
            distance: Some(entry.distance.clone()),
            eta: Some(eta.to_string()),
        }
    }

    /// City not found anywhere: a valid terminal state, rendered by the UI
    /// as "manual quote needed". The customer's raw input is echoed back.
    pub fn unknown(city_input: &str, eta: &str) -> Self {
        Self {
            city_label: city_input.to_string(),
            price: 0,
            is_free: false,
            distance: None,
            eta: Some(eta.to_string()),
        }
    }

    /// True for the blank-input sentinel.
    pub fn is_no_input(&self) -> bool {
        self.city_label.is_empty()
    }

    /// True when the city matched nothing and a manager has to quote it.
    pub fn needs_manual_quote(&self) -> bool {
        !self.is_free && self.price == 0 && self.distance.is_none() && !self.city_label.is_empty()
    }
}
