//! End-to-end tests for the budget allocation pipeline

use wayfarer_budget::{compute, BudgetLevel, BudgetReport, BudgetRequest, PriceTier, CATEGORIES};

fn run(total_budget: f64, days: i64, country: &str, num_people: i64) -> BudgetReport {
    compute(&BudgetRequest::new(total_budget, days, country, num_people))
}

// ========== Structural validation ==========

#[test]
fn test_zero_days_is_invalid() {
    let report = run(100.0, 0, "USA", 1);

    assert_eq!(report.budget_level, BudgetLevel::Invalid);
    assert_eq!(report.price_level, PriceTier::Unknown);
    assert_eq!(report.daily_budget, 0.0);
    for category in CATEGORIES {
        assert_eq!(report.allocation.get(category), 0.0);
    }
    assert_eq!(report.warnings.len(), 1);
    assert!(report.formatted_result.contains("Invalid input"));
}

#[test]
fn test_negative_people_is_invalid_regardless_of_budget() {
    let report = run(1_000_000.0, 10, "Japan", -2);
    assert_eq!(report.budget_level, BudgetLevel::Invalid);
    assert_eq!(report.needs.survival_per_day, 0.0);
    assert_eq!(report.minimum_need.food_soft, 0.0);
}

// ========== Degenerate budgets ==========

#[test]
fn test_zero_budget_japan_two_people() {
    let report = run(0.0, 5, "Japan", 2);

    assert_eq!(report.daily_budget, 0.0);
    assert_eq!(report.budget_level, BudgetLevel::ExtremeLow);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("zero or negative")));
    assert_eq!(report.allocation.accommodation, 0.0);

    // Floors still apply against a zero budget: hard food minimum and the
    // transport minimum for the high tier are funded from nowhere.
    assert_eq!(report.allocation.food, 1100.0);
    assert_eq!(report.allocation.transport, 350.0);
    assert!(report.allocation.total() > 0.0);
    assert!(!report.flags.used_normalize_down && !report.flags.used_normalize_up);
}

#[test]
fn test_negative_budget_flows_as_extreme_low() {
    let report = run(-500.0, 3, "Vietnam", 1);
    assert_eq!(report.budget_level, BudgetLevel::ExtremeLow);
    assert_eq!(report.daily_budget, 0.0);
    assert!(report
        .warnings
        .iter()
        .any(|w| w.contains("zero or negative")));
}

#[test]
fn test_soft_low_budget_warns_but_proceeds() {
    // 600 / 3 days / 1 person = 200/day, right at the advisory threshold.
    let report = run(600.0, 3, "Taiwan", 1);
    assert_eq!(report.daily_budget, 200.0);
    assert!(report.warnings.iter().any(|w| w.contains("extremely low")));
    assert_ne!(report.budget_level, BudgetLevel::Invalid);
}

// ========== Tier classification ==========

#[test]
fn test_city_name_resolves_to_country_tier() {
    let tokyo = run(30000.0, 3, "Tokyo", 1);
    let japan = run(30000.0, 3, "Japan", 1);
    assert_eq!(tokyo.price_level, PriceTier::High);
    assert_eq!(tokyo.price_level, japan.price_level);
}

#[test]
fn test_tier_is_case_and_whitespace_insensitive() {
    let a = run(30000.0, 3, "Tokyo", 1);
    let b = run(30000.0, 3, " tokyo ", 1);
    assert_eq!(a.price_level, b.price_level);
    assert_eq!(a.budget_level, b.budget_level);
    assert_eq!(a.allocation, b.allocation);
}

#[test]
fn test_unknown_destination_defaults_to_mid() {
    let report = run(30000.0, 3, "Atlantis", 1);
    assert_eq!(report.price_level, PriceTier::Mid);
}

// ========== The Taiwan reference scenario ==========

#[test]
fn test_taiwan_3000_over_3_days() {
    let report = run(3000.0, 3, "Taiwan", 1);

    assert_eq!(report.daily_budget, 1000.0);
    assert_eq!(report.price_level, PriceTier::Mid);
    // 1000/day clears survival (850) but not basic (4450) at difficulty 1.0.
    assert_eq!(report.budget_level, BudgetLevel::Low);

    assert!(report.allocation.accommodation > 0.0);
    assert!(report.flags.used_floor);
    assert!(report.flags.used_rescue);
    assert!(report.flags.used_normalize_down);
    assert!(!report.flags.used_normalize_up);
    assert!(report.warnings.iter().any(|w| w.contains("Accommodation")));

    // The uniform rescale reconciles the total with the daily budget.
    assert!((report.allocation.total() - report.daily_budget).abs() <= 1.0);
}

// ========== Allocation invariants ==========

#[test]
fn test_total_matches_daily_budget_when_caps_do_not_bind() {
    // Mid tier, high level: 18000 / 3 days = 6000/day.
    let report = run(18000.0, 3, "Taiwan", 1);
    assert_eq!(report.budget_level, BudgetLevel::High);
    assert!((report.allocation.total() - report.daily_budget).abs() <= 1.0);
}

#[test]
fn test_floors_hold_without_uniform_rescale() {
    let report = run(18000.0, 3, "Taiwan", 1);
    // Normalize-down had enough reducible headroom here, so every category
    // sits at or above its floor (mid-tier soft minimums, high-level
    // attractions floor of 250).
    assert!(report.allocation.food >= 900.0);
    assert!(report.allocation.transport >= 250.0);
    assert!(report.allocation.accommodation >= 3300.0);
    assert!(report.allocation.attractions >= 250.0);
    assert!(report.allocation.others >= 0.0);
}

#[test]
fn test_luxury_caps_bind_exactly() {
    // 600000 for 5 days, 2 travelers: 60000/day in Japan is luxury money.
    let report = run(600_000.0, 5, "Japan", 2);

    assert_eq!(report.budget_level, BudgetLevel::Luxury);
    assert!(report.flags.used_floor);
    assert!(report.flags.used_normalize_up);

    // Caps pin every category: soft minimums x2.7 for food/transport/
    // accommodation, fixed caps for attractions and others.
    assert_eq!(report.allocation.food, 4860.0);
    assert_eq!(report.allocation.transport, 945.0);
    assert_eq!(report.allocation.accommodation, 11340.0);
    assert_eq!(report.allocation.attractions, 4000.0);
    assert_eq!(report.allocation.others, 3000.0);

    // With all caps binding, the total legitimately stays under the daily
    // budget; upward normalization is not allowed to blow through caps.
    assert!(report.allocation.total() < report.daily_budget);
}

#[test]
fn test_transport_factor_warning_only_when_expensive() {
    let japan = run(600_000.0, 5, "Japan", 2);
    assert!(japan.warnings.iter().any(|w| w.contains("transport")));

    // Thailand's factor is 0.9: transport gets cheaper, no warning.
    let thailand = run(600_000.0, 5, "Thailand", 2);
    assert!(!thailand.warnings.iter().any(|w| w.contains("transport")));
}

// ========== Monotonicity & determinism ==========

#[test]
fn test_budget_level_monotone_in_total_budget() {
    let budgets = [
        0.0, 100.0, 1000.0, 3000.0, 9000.0, 15000.0, 20000.0, 50000.0, 200_000.0,
    ];
    let mut previous = BudgetLevel::ExtremeLow;
    for total in budgets {
        let report = run(total, 3, "Taiwan", 1);
        assert!(
            report.budget_level >= previous,
            "level dropped from {:?} to {:?} at budget {}",
            previous,
            report.budget_level,
            total
        );
        previous = report.budget_level;
    }
}

#[test]
fn test_compute_is_deterministic() {
    let request = BudgetRequest::new(12345.67, 4, "Seoul", 3);
    let first = compute(&request);
    let second = compute(&request);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ========== Wire shape ==========

#[test]
fn test_report_json_key_set() {
    let report = run(3000.0, 3, "Taiwan", 1);
    let value = serde_json::to_value(&report).unwrap();
    let object = value.as_object().unwrap();

    for key in [
        "daily_budget",
        "budget_level",
        "budget_level_label",
        "price_level",
        "price_level_label",
        "needs",
        "minimum_need",
        "allocation",
        "flags",
        "warnings",
        "suggestion",
        "formatted_result",
    ] {
        assert!(object.contains_key(key), "missing key {key}");
    }

    assert_eq!(value["budget_level"], "low");
    assert_eq!(value["price_level"], "mid");
    assert_eq!(value["needs"]["survival_per_day"], 850.0);
    assert_eq!(value["needs"]["basic_per_day"], 4450.0);
    assert_eq!(value["allocation"].as_object().unwrap().len(), 5);
    assert_eq!(value["minimum_need"].as_object().unwrap().len(), 5);
    assert_eq!(value["flags"].as_object().unwrap().len(), 4);
}

#[test]
fn test_reported_allocation_is_rounded() {
    let report = run(10000.0, 7, "France", 3);
    for category in CATEGORIES {
        let amount = report.allocation.get(category);
        let cents = amount * 100.0;
        assert!(
            (cents - cents.round()).abs() < 1e-6,
            "{amount} is not rounded to 2 decimals"
        );
    }
}
