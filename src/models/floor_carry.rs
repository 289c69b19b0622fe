use serde::{Deserialize, Serialize};

/// Furniture categories the carry crew prices differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureCategory {
    Soft,
    Wardrobe,
    Kitchen,
    Countertop,
}

impl FurnitureCategory {
    /// Customer-facing name used in quote explanations.
    pub fn title(&self) -> &'static str {
        match self {
            FurnitureCategory::Soft => "Мягкая мебель",
            FurnitureCategory::Wardrobe => "Шкаф",
            FurnitureCategory::Kitchen => "Кухня",
            FurnitureCategory::Countertop => "Столешница",
        }
    }
}

/// What the number in a [`FloorCarryQuote`] actually means.
///
/// `NeedsIndividualQuote` and `NotRequested` both come with a zero price but
/// are different states: one is deferred to a manager, the other is a
/// genuine "nothing to pay". Billing must branch on this tag, never on the
/// price alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloorCarryOutcome {
    Priced,
    NeedsIndividualQuote,
    NotRequested,
}

/// Priced (or deferred) floor-carry service for one order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorCarryQuote {
    pub total_price: u32,
    pub explanation: String,
    pub category: FurnitureCategory,
    pub outcome: FloorCarryOutcome,
}

/// Checkout form payload for the floor-carry step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloorCarryRequest {
    pub category: FurnitureCategory,
    /// Floor as entered by the customer; the handler clamps it to >= 1.
    pub floor: i32,
    pub has_elevator: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countertop_length_mm: Option<u32>,
    /// False when the customer unloads at the entrance themselves.
    pub carry_required: bool,
}
