//! Warning texts, suggestion templates, and the formatted report

use crate::report::{round2, Allocation, BudgetLevel, BudgetRequest, Needs, PriceTier};

pub(crate) const WARN_INVALID_INPUT: &str =
    "Days or traveler count is zero; the trip cannot be planned. Provide at least 1 day and 1 person.";

pub(crate) const WARN_ZERO_BUDGET: &str =
    "Total budget is zero or negative; treating this as an extreme-low budget.";

pub(crate) const WARN_LOW_BUDGET: &str =
    "Daily budget is extremely low and may not cover basic needs.";

pub(crate) const WARN_RESCUE: &str =
    "Accommodation allocation fell short; funds were shifted over from other categories.";

pub(crate) const SUGGESTION_INVALID: &str = "Provide a valid number of days and travelers.";

pub(crate) const FORMATTED_INVALID: &str = "Invalid input; nothing to calculate.";

const DISCLAIMER: &str = "Note: this is a budget guidance model. The split is a reference, not a \
guarantee of actual prices or required spending; adjust for your own habits, goals, and pace.";

pub(crate) fn transport_warning(factor: f64) -> String {
    format!("Local transport runs expensive at this destination; transport was scaled by x{factor}.")
}

/// Level-specific advice, one fixed template per budget level.
pub(crate) fn suggestion(level: BudgetLevel) -> &'static str {
    match level {
        BudgetLevel::ExtremeLow | BudgetLevel::Invalid => {
            "Your budget is at rock bottom and things will be tight:\n\
             - Food: aim for filling, not fancy\n\
             - Lodging: expect very basic or shared spaces\n\
             - Transport: walk and ride public transit\n\
             - Sights: build the trip around free attractions\n\
             Keep an emergency reserve and plan the itinerary realistically."
        }
        BudgetLevel::Low => {
            "This budget is lean but workable:\n\
             - Food: everyday meals, with the occasional small upgrade\n\
             - Lodging: budget hotels or hostels\n\
             - Transport: public transit plus walking\n\
             - Sights: favor free and low-cost attractions\n\
             Stay flexible and skip unnecessary extras."
        }
        BudgetLevel::Mid => {
            "Your budget sits at a normal travel level:\n\
             - Food: most restaurants are within reach\n\
             - Lodging: clean, comfortable stays\n\
             - Transport: public transit with the odd taxi\n\
             - Sights: paid attractions fit the plan\n\
             Overall: a steady, enjoyable trip."
        }
        BudgetLevel::High => {
            "Your budget leans toward comfortable travel:\n\
             - Food: higher-quality dining is on the table\n\
             - Lodging: comfortable, well-located hotels\n\
             - Transport: optimize for time, not cost\n\
             - Sights: mix in a wide range of experiences\n\
             Overall: a full and relaxed itinerary."
        }
        BudgetLevel::Luxury => {
            "Your budget is in luxury territory:\n\
             - Food: fine dining and specialty restaurants\n\
             - Lodging: high-end or boutique stays\n\
             - Transport: private cars or transfers\n\
             - Sights: private tours and premium experiences\n\
             Overall: plan well and enjoy a top-tier trip."
        }
    }
}

/// Assemble the multi-section human-readable report.
#[allow(clippy::too_many_arguments)]
pub(crate) fn format_report(
    request: &BudgetRequest,
    daily_budget: f64,
    level: BudgetLevel,
    tier: PriceTier,
    needs: &Needs,
    allocation: &Allocation,
    warnings: &[String],
    suggestion: &str,
) -> String {
    let mut lines = vec![
        format!("Destination: {}", request.country),
        format!(
            "Total budget: {} for {} day(s), {} traveler(s)",
            request.total_budget, request.days, request.num_people
        ),
        format!("Daily budget per person: {}", round2(daily_budget)),
        format!("Budget level: {} ({})", level.as_str(), level.label()),
        format!("Price level: {} ({})", tier.as_str(), tier.label()),
        String::new(),
        format!(
            "Survival needs: about {} per day (bare minimum)",
            needs.survival_per_day
        ),
        format!("Comfort needs: about {} per day", needs.basic_per_day),
        String::new(),
        "[Daily allocation]".to_string(),
        format!("- Food: {}", allocation.food),
        format!("- Transport: {}", allocation.transport),
        format!("- Accommodation: {}", allocation.accommodation),
        format!("- Attractions: {}", allocation.attractions),
        format!("- Others: {}", allocation.others),
    ];

    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("[Warnings]".to_string());
        for warning in warnings {
            lines.push(format!("- {warning}"));
        }
    }

    lines.push(String::new());
    lines.push("[Overall suggestion]".to_string());
    lines.push(suggestion.to_string());
    lines.push(String::new());
    lines.push(DISCLAIMER.to_string());

    lines.join("\n")
}
