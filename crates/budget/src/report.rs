//! Report types for the budget allocator

use serde::{Deserialize, Serialize};

/// Allocator input: the four scalars the tool boundary marshals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BudgetRequest {
    pub total_budget: f64,
    pub days: i64,
    pub country: String,
    #[serde(default = "default_num_people")]
    pub num_people: i64,
}

fn default_num_people() -> i64 {
    1
}

impl BudgetRequest {
    pub fn new(total_budget: f64, days: i64, country: impl Into<String>, num_people: i64) -> Self {
        Self {
            total_budget,
            days,
            country: country.into(),
            num_people,
        }
    }
}

/// Destination price tier, classified from the normalized country name.
///
/// `Unknown` only appears in invalid reports; classification itself defaults
/// unrecognized countries to `Mid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceTier {
    Unknown,
    VLow,
    Low,
    Mid,
    High,
    VHigh,
}

impl PriceTier {
    pub fn as_str(self) -> &'static str {
        match self {
            PriceTier::Unknown => "unknown",
            PriceTier::VLow => "vlow",
            PriceTier::Low => "low",
            PriceTier::Mid => "mid",
            PriceTier::High => "high",
            PriceTier::VHigh => "vhigh",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PriceTier::Unknown => "unknown price level",
            PriceTier::VLow => "very low cost destination",
            PriceTier::Low => "low cost destination",
            PriceTier::Mid => "mid cost destination",
            PriceTier::High => "high cost destination",
            PriceTier::VHigh => "very high cost destination",
        }
    }
}

/// Traveler budget adequacy relative to the destination's price tier.
///
/// Ordered so that a larger budget never maps to a smaller variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetLevel {
    Invalid,
    ExtremeLow,
    Low,
    Mid,
    High,
    Luxury,
}

impl BudgetLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            BudgetLevel::Invalid => "invalid",
            BudgetLevel::ExtremeLow => "extreme_low",
            BudgetLevel::Low => "low",
            BudgetLevel::Mid => "mid",
            BudgetLevel::High => "high",
            BudgetLevel::Luxury => "luxury",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BudgetLevel::Invalid => "invalid input",
            BudgetLevel::ExtremeLow => "survival mode",
            BudgetLevel::Low => "tight but doable",
            BudgetLevel::Mid => "standard comfort",
            BudgetLevel::High => "comfortable travel",
            BudgetLevel::Luxury => "luxury travel",
        }
    }

    /// Base {food, transport, accommodation} ratio triple for this level.
    pub(crate) fn base_ratios(self) -> (f64, f64, f64) {
        match self {
            BudgetLevel::Luxury => (0.35, 0.10, 0.45),
            BudgetLevel::High => (0.32, 0.10, 0.40),
            BudgetLevel::Mid => (0.36, 0.14, 0.35),
            BudgetLevel::Low => (0.42, 0.20, 0.25),
            BudgetLevel::ExtremeLow | BudgetLevel::Invalid => (0.70, 0.30, 0.0),
        }
    }

    pub(crate) fn attractions_ratio(self) -> f64 {
        match self {
            BudgetLevel::Luxury => 0.20,
            BudgetLevel::High => 0.15,
            BudgetLevel::Mid => 0.10,
            BudgetLevel::Low => 0.05,
            BudgetLevel::ExtremeLow | BudgetLevel::Invalid => 0.0,
        }
    }

    pub(crate) fn attractions_floor(self) -> f64 {
        match self {
            BudgetLevel::Luxury => 500.0,
            BudgetLevel::High => 250.0,
            BudgetLevel::Mid => 120.0,
            BudgetLevel::Low | BudgetLevel::ExtremeLow | BudgetLevel::Invalid => 0.0,
        }
    }
}

/// Spending category. The fixed order drives every clamp/rescue pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Food,
    Transport,
    Accommodation,
    Attractions,
    Others,
}

/// Canonical category order, used for clamping and report assembly.
pub const CATEGORIES: [Category; 5] = [
    Category::Food,
    Category::Transport,
    Category::Accommodation,
    Category::Attractions,
    Category::Others,
];

/// Per-category currency amounts. Also reused for floor and cap tables.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    pub food: f64,
    pub transport: f64,
    pub accommodation: f64,
    pub attractions: f64,
    pub others: f64,
}

impl Allocation {
    pub fn get(&self, category: Category) -> f64 {
        match category {
            Category::Food => self.food,
            Category::Transport => self.transport,
            Category::Accommodation => self.accommodation,
            Category::Attractions => self.attractions,
            Category::Others => self.others,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut f64 {
        match category {
            Category::Food => &mut self.food,
            Category::Transport => &mut self.transport,
            Category::Accommodation => &mut self.accommodation,
            Category::Attractions => &mut self.attractions,
            Category::Others => &mut self.others,
        }
    }

    pub fn total(&self) -> f64 {
        self.food + self.transport + self.accommodation + self.attractions + self.others
    }

    pub(crate) fn scale(&mut self, factor: f64) {
        for category in CATEGORIES {
            *self.get_mut(category) *= factor;
        }
    }

    /// Copy with every amount rounded to 2 decimals. Applied only when the
    /// report is assembled, never inside the pipeline.
    pub(crate) fn rounded(&self) -> Allocation {
        Allocation {
            food: round2(self.food),
            transport: round2(self.transport),
            accommodation: round2(self.accommodation),
            attractions: round2(self.attractions),
            others: round2(self.others),
        }
    }
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minimum-needs constants for a price tier (per person, per day).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MinimumNeeds {
    pub food_soft: f64,
    pub food_hard: f64,
    pub transport_min: f64,
    pub accommodation_soft: f64,
    pub accommodation_hard: f64,
}

/// Derived need thresholds for the destination tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Needs {
    pub survival_per_day: f64,
    pub basic_per_day: f64,
}

/// Which corrective passes fired during allocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentFlags {
    pub used_floor: bool,
    pub used_rescue: bool,
    pub used_normalize_down: bool,
    pub used_normalize_up: bool,
}

/// Full allocator output: structured figures plus the rendered report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetReport {
    pub daily_budget: f64,
    pub budget_level: BudgetLevel,
    pub budget_level_label: String,
    pub price_level: PriceTier,
    pub price_level_label: String,
    pub needs: Needs,
    pub minimum_need: MinimumNeeds,
    pub allocation: Allocation,
    pub flags: AdjustmentFlags,
    pub warnings: Vec<String>,
    pub suggestion: String,
    pub formatted_result: String,
}
