//! Delivery rate reference data.
//!
//! The store ships from its Yekaterinburg warehouse. Every deliverable city
//! is listed in one of the regional tables below together with the agreed
//! price and the road distance from the warehouse. The tables are assembled
//! into a single [`RateTable`] at startup and treated as immutable from then
//! on; a reload swaps the whole `Arc`, never rows in place.

use crate::models::delivery::RateEntry;

/// Distance marker for destinations inside the Yekaterinburg metro area.
pub const SAME_METRO_MARKER: &str = "0";

/// Flat carry fee when the building has a freight elevator or the customer
/// lives on the ground floor.
pub const CARRY_BASE_PRICE: u32 = 1000;

/// Added per floor above the first when carrying by stairs.
pub const CARRY_PRICE_PER_FLOOR: u32 = 200;

/// Countertops up to this length carry for a single flat fee.
pub const COUNTERTOP_FLAT_LIMIT_MM: u32 = 3000;

/// Countertops at or above this length are always quoted by a manager.
pub const COUNTERTOP_INDIVIDUAL_FROM_MM: u32 = 3500;

/// Flat carry fee for countertops within the standard length limit.
pub const COUNTERTOP_FLAT_PRICE: u32 = 1500;

/// Lowercase name fragments that classify a destination as free delivery.
/// Checked before the paid tables, so a free-zone city wins even when a
/// paid row with the same name exists. Both е/ё spellings are carried for
/// Берёзовский since customers type either.
const FREE_ZONES: &[&str] = &[
    "екатеринбург",
    "екб",
    "верхняя пышма",
    "среднеуральск",
    "березовский",
    "берёзовский",
    "арамиль",
];

// Regional tables: (city, price ₽, distance from the warehouse).
// Order inside each table and the concatenation order below are fixed;
// zone resolution is first-match-wins over the combined list.

const SVERDLOVSK_RATES: &[(&str, u32, &str)] = &[
    ("Большой Исток", 800, SAME_METRO_MARKER),
    ("Верхняя Пышма", 700, SAME_METRO_MARKER),
    ("Первоуральск", 1400, "46 км"),
    ("Ревда", 1400, "47 км"),
    ("Сысерть", 1450, "48 км"),
    ("Заречный", 1600, "55 км"),
    ("Полевской", 1600, "57 км"),
    ("Невьянск", 1900, "75 км"),
    ("Асбест", 2100, "86 км"),
    ("Каменск-Уральский", 2400, "100 км"),
    ("Алапаевск", 3200, "146 км"),
    ("Ирбит", 4300, "204 км"),
    ("Красноуфимск", 4700, "224 км"),
    ("Качканар", 5300, "260 км"),
    ("Серов", 6500, "338 км"),
];

const CHELYABINSK_RATES: &[(&str, u32, &str)] = &[
    ("Снежинск", 2500, "104 км"),
    ("Озёрск", 2800, "122 км"),
    ("Кыштым", 3000, "136 км"),
    ("Челябинск", 4300, "200 км"),
    ("Миасс", 5200, "252 км"),
    ("Златоуст", 5700, "284 км"),
    ("Магнитогорск", 8000, "415 км"),
];

const TYUMEN_RATES: &[(&str, u32, &str)] = &[
    ("Тюмень", 6200, "320 км"),
    ("Тобольск", 10200, "560 км"),
    ("Ишим", 11200, "620 км"),
];

const KURGAN_RATES: &[(&str, u32, &str)] = &[
    ("Шадринск", 4500, "217 км"),
    ("Курган", 7000, "365 км"),
];

const PERM_RATES: &[(&str, u32, &str)] = &[
    ("Кунгур", 5600, "280 км"),
    ("Пермь", 6900, "360 км"),
    ("Чайковский", 8400, "440 км"),
];

const UGRA_RATES: &[(&str, u32, &str)] = &[
    ("Ханты-Мансийск", 17800, "1020 км"),
    ("Нефтеюганск", 17900, "1030 км"),
    ("Сургут", 18500, "1070 км"),
    ("Нижневартовск", 22000, "1290 км"),
];

/// The combined, read-only delivery rate dataset.
///
/// Holds the concatenated regional rate rows plus the free-zone fragment
/// list. Services receive a reference to it and never mutate it, so a
/// single instance can back any number of concurrent resolutions.
pub struct RateTable {
    entries: Vec<RateEntry>,
    free_zones: Vec<String>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>, free_zones: Vec<String>) -> Self {
        Self {
            entries,
            free_zones,
        }
    }

    /// Assemble the builtin dataset. Regions are concatenated in a fixed
    /// order: Свердловская, Челябинская, Тюменская, Курганская, Пермский
    /// край, ХМАО.
    pub fn builtin() -> Self {
        let entries = [
            SVERDLOVSK_RATES,
            CHELYABINSK_RATES,
            TYUMEN_RATES,
            KURGAN_RATES,
            PERM_RATES,
            UGRA_RATES,
        ]
        .into_iter()
        .flatten()
        .map(|&(city, price, distance)| RateEntry {
            city: city.to_string(),
            price,
            distance: distance.to_string(),
        })
        .collect();

        let free_zones = FREE_ZONES.iter().map(|zone| zone.to_string()).collect();

        Self::new(entries, free_zones)
    }

    /// All rate rows in resolution order.
    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    /// Lowercase free-delivery name fragments.
    pub fn free_zones(&self) -> &[String] {
        &self.free_zones
    }
}
