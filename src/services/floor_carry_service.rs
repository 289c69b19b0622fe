//! Floor-carry surcharge pricing.
//!
//! Soft furniture, wardrobes and kitchens are priced per floor; countertops
//! are priced by length and ignore the floor entirely. Oversized countertops
//! are not priced here at all — the quote comes back tagged
//! [`FloorCarryOutcome::NeedsIndividualQuote`] and a manager takes over.

use crate::data::rate_table::{
    CARRY_BASE_PRICE, CARRY_PRICE_PER_FLOOR, COUNTERTOP_FLAT_LIMIT_MM, COUNTERTOP_FLAT_PRICE,
    COUNTERTOP_INDIVIDUAL_FROM_MM,
};
use crate::models::floor_carry::{
    FloorCarryOutcome, FloorCarryQuote, FloorCarryRequest, FurnitureCategory,
};

pub struct FloorCarryService;

impl FloorCarryService {
    /// Quote the carry service for a checkout request.
    ///
    /// This is the caller-side wrapper: when the customer opted out of the
    /// carry service the calculator is bypassed entirely and a zero-cost
    /// "not requested" quote is substituted. It also clamps the form's floor
    /// number to the calculator's contract.
    pub fn quote(request: &FloorCarryRequest) -> FloorCarryQuote {
        if !request.carry_required {
            return FloorCarryQuote {
                total_price: 0,
                explanation: "Занос не требуется: разгрузка у подъезда".to_string(),
                category: request.category,
                outcome: FloorCarryOutcome::NotRequested,
            };
        }

        let floor = request.floor.max(1) as u32;
        Self::calculate(
            request.category,
            floor,
            request.has_elevator,
            request.countertop_length_mm,
        )
    }

    /// Compute the surcharge for carrying one item up to `floor`.
    ///
    /// Contract: `floor >= 1` (the caller clamps form input first) and a
    /// countertop request carries its length. Violations are programmer
    /// errors, not customer input, and panic.
    pub fn calculate(
        category: FurnitureCategory,
        floor: u32,
        has_elevator: bool,
        countertop_length_mm: Option<u32>,
    ) -> FloorCarryQuote {
        assert!(floor >= 1, "floor must be clamped to >= 1 before calculation");

        if category == FurnitureCategory::Countertop {
            let length = countertop_length_mm
                .expect("countertop carry requires countertop_length_mm");
            return Self::countertop_quote(length);
        }

        // Ground floor and elevator both collapse to the flat base fee; the
        // per-floor increment only applies to stair carries.
        let (total_price, explanation) = if floor <= 1 || has_elevator {
            (
                CARRY_BASE_PRICE,
                format!(
                    "{}: занос {} ₽ (первый этаж или есть лифт)",
                    category.title(),
                    CARRY_BASE_PRICE
                ),
            )
        } else {
            let extra_floors = floor - 1;
            let total = CARRY_BASE_PRICE + extra_floors * CARRY_PRICE_PER_FLOOR;
            (
                total,
                format!(
                    "{}: занос без лифта на {} этаж — {} ₽ + {} × {} ₽ = {} ₽",
                    category.title(),
                    floor,
                    CARRY_BASE_PRICE,
                    extra_floors,
                    CARRY_PRICE_PER_FLOOR,
                    total
                ),
            )
        };

        FloorCarryQuote {
            total_price,
            explanation,
            category,
            outcome: FloorCarryOutcome::Priced,
        }
    }

    /// Countertops are length-banded. Up to the flat limit there is one
    /// price; from the individual threshold a manager always quotes; the
    /// lengths in between have no tabulated price either and also go to a
    /// manager, never to interpolation.
    fn countertop_quote(length_mm: u32) -> FloorCarryQuote {
        if length_mm <= COUNTERTOP_FLAT_LIMIT_MM {
            return FloorCarryQuote {
                total_price: COUNTERTOP_FLAT_PRICE,
                explanation: format!(
                    "Столешница до {} мм: занос {} ₽",
                    COUNTERTOP_FLAT_LIMIT_MM, COUNTERTOP_FLAT_PRICE
                ),
                category: FurnitureCategory::Countertop,
                outcome: FloorCarryOutcome::Priced,
            };
        }

        let explanation = if length_mm >= COUNTERTOP_INDIVIDUAL_FROM_MM {
            format!(
                "Столешница от {} мм: стоимость заноса рассчитывается индивидуально",
                COUNTERTOP_INDIVIDUAL_FROM_MM
            )
        } else {
            format!(
                "Столешница {} мм: тарифа для этой длины нет, стоимость заноса уточнит менеджер",
                length_mm
            )
        };

        FloorCarryQuote {
            total_price: 0,
            explanation,
            category: FurnitureCategory::Countertop,
            outcome: FloorCarryOutcome::NeedsIndividualQuote,
        }
    }
}
