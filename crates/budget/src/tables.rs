//! Static lookup data: city aliases, price tiers, minimum needs, transport factors

use crate::report::{MinimumNeeds, PriceTier};

/// City → country aliases so travelers can name either.
const CITY_TO_COUNTRY: &[(&str, &str)] = &[
    ("tokyo", "japan"),
    ("osaka", "japan"),
    ("kyoto", "japan"),
    ("sapporo", "japan"),
    ("nagoya", "japan"),
    ("fukuoka", "japan"),
    ("kobe", "japan"),
    ("seoul", "korea"),
    ("busan", "korea"),
    ("daegu", "korea"),
    ("incheon", "korea"),
    ("bangkok", "thailand"),
    ("chiang mai", "thailand"),
    ("phuket", "thailand"),
    ("pattaya", "thailand"),
    ("london", "uk"),
    ("manchester", "uk"),
    ("edinburgh", "uk"),
    ("liverpool", "uk"),
    ("new york", "usa"),
    ("los angeles", "usa"),
    ("san francisco", "usa"),
    ("chicago", "usa"),
    ("las vegas", "usa"),
    ("boston", "usa"),
    ("singapore", "singapore"),
    ("taipei", "taiwan"),
    ("kaohsiung", "taiwan"),
    ("taichung", "taiwan"),
    ("tainan", "taiwan"),
    ("paris", "france"),
    ("lyon", "france"),
    ("nice", "france"),
    ("sydney", "australia"),
    ("melbourne", "australia"),
    ("brisbane", "australia"),
];

const VHIGH_COUNTRIES: &[&str] = &[
    "switzerland",
    "norway",
    "denmark",
    "iceland",
    "luxembourg",
    "singapore",
];

const HIGH_COUNTRIES: &[&str] = &[
    "japan",
    "uk",
    "united kingdom",
    "france",
    "germany",
    "australia",
    "new zealand",
    "usa",
    "united states",
    "hong kong",
    "ireland",
    "sweden",
];

const MID_COUNTRIES: &[&str] = &[
    "taiwan",
    "korea",
    "south korea",
    "spain",
    "italy",
    "portugal",
    "greece",
    "canada",
    "netherlands",
    "belgium",
    "israel",
    "chile",
];

const LOW_COUNTRIES: &[&str] = &[
    "thailand",
    "malaysia",
    "turkey",
    "mexico",
    "brazil",
    "argentina",
    "china",
    "poland",
    "czech republic",
    "hungary",
    "philippines",
];

const VLOW_COUNTRIES: &[&str] = &[
    "vietnam",
    "indonesia",
    "india",
    "cambodia",
    "laos",
    "nepal",
    "pakistan",
    "bangladesh",
    "kenya",
    "tanzania",
    "egypt",
    "morocco",
];

/// Countries whose local transport deviates from the baseline cost.
const TRANSPORT_FACTORS: &[(&str, f64)] = &[
    ("japan", 1.3),
    ("korea", 1.2),
    ("south korea", 1.2),
    ("singapore", 1.1),
    ("thailand", 0.9),
    ("vietnam", 0.7),
];

/// Lowercase/trim the raw destination and resolve known cities to their
/// country. Unrecognized strings pass through unchanged.
pub(crate) fn resolve_country(raw: &str) -> String {
    let normalized = raw.trim().to_lowercase();
    CITY_TO_COUNTRY
        .iter()
        .find(|(city, _)| *city == normalized)
        .map(|(_, country)| (*country).to_string())
        .unwrap_or(normalized)
}

/// Classify a normalized country name. Anything not in the tier sets is
/// treated as mid-priced.
pub(crate) fn classify_tier(country: &str) -> PriceTier {
    if VHIGH_COUNTRIES.contains(&country) {
        PriceTier::VHigh
    } else if HIGH_COUNTRIES.contains(&country) {
        PriceTier::High
    } else if MID_COUNTRIES.contains(&country) {
        PriceTier::Mid
    } else if LOW_COUNTRIES.contains(&country) {
        PriceTier::Low
    } else if VLOW_COUNTRIES.contains(&country) {
        PriceTier::VLow
    } else {
        PriceTier::Mid
    }
}

/// Minimum-needs row for a tier (currency units per person per day).
pub(crate) fn minimum_needs(tier: PriceTier) -> MinimumNeeds {
    match tier {
        PriceTier::VHigh => MinimumNeeds {
            food_soft: 2100.0,
            food_hard: 1400.0,
            transport_min: 450.0,
            accommodation_soft: 5500.0,
            accommodation_hard: 4000.0,
        },
        PriceTier::High => MinimumNeeds {
            food_soft: 1800.0,
            food_hard: 1100.0,
            transport_min: 350.0,
            accommodation_soft: 4200.0,
            accommodation_hard: 2800.0,
        },
        PriceTier::Mid | PriceTier::Unknown => MinimumNeeds {
            food_soft: 900.0,
            food_hard: 600.0,
            transport_min: 250.0,
            accommodation_soft: 3300.0,
            accommodation_hard: 2100.0,
        },
        PriceTier::Low => MinimumNeeds {
            food_soft: 650.0,
            food_hard: 400.0,
            transport_min: 180.0,
            accommodation_soft: 2200.0,
            accommodation_hard: 1300.0,
        },
        PriceTier::VLow => MinimumNeeds {
            food_soft: 450.0,
            food_hard: 250.0,
            transport_min: 120.0,
            accommodation_soft: 1300.0,
            accommodation_hard: 850.0,
        },
    }
}

/// Difficulty multiplier applied to need thresholds before level
/// classification. Pricier tiers make a given daily budget stretch less.
pub(crate) fn difficulty(tier: PriceTier) -> f64 {
    match tier {
        PriceTier::VHigh => 1.20,
        PriceTier::High => 1.10,
        PriceTier::Mid | PriceTier::Unknown => 1.00,
        PriceTier::Low => 0.90,
        PriceTier::VLow => 0.80,
    }
}

pub(crate) fn transport_factor(country: &str) -> f64 {
    TRANSPORT_FACTORS
        .iter()
        .find(|(name, _)| *name == country)
        .map(|(_, factor)| *factor)
        .unwrap_or(1.0)
}
