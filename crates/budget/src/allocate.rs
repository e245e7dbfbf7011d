//! The allocation pipeline: validate, classify, split, clamp, rescue, normalize

use crate::narrative;
use crate::report::{
    AdjustmentFlags, Allocation, BudgetLevel, BudgetReport, BudgetRequest, Category, MinimumNeeds,
    Needs, PriceTier, CATEGORIES,
};
use crate::tables;

/// Soft caps are this multiple of the tier's soft minimums.
const CAP_SCALE: f64 = 2.7;
const ATTRACTIONS_CAP: f64 = 4000.0;
const OTHERS_CAP: f64 = 3000.0;

/// No single category may exceed this share of the daily budget.
const DAILY_CAP_SHARE: f64 = 0.95;

/// Donor priority for the accommodation rescue pass.
const RESCUE_DONORS: [Category; 4] = [
    Category::Others,
    Category::Attractions,
    Category::Transport,
    Category::Food,
];

/// Categories that absorb a downward normalization before uniform rescale.
const REDUCIBLE: [Category; 3] = [Category::Attractions, Category::Others, Category::Transport];

/// Run the full allocation pipeline. Never fails: structurally invalid
/// requests come back as an `invalid` report, a non-positive budget flows
/// through the pipeline as an extreme-low case with a zero daily budget.
pub fn compute(request: &BudgetRequest) -> BudgetReport {
    let mut warnings: Vec<String> = Vec::new();
    let mut flags = AdjustmentFlags::default();

    // Structural validation short-circuits before any tier or level logic.
    if request.days <= 0 || request.num_people <= 0 {
        return invalid_report();
    }

    let daily_budget = if request.total_budget <= 0.0 {
        warnings.push(narrative::WARN_ZERO_BUDGET.to_string());
        0.0
    } else {
        request.total_budget / request.days as f64 / request.num_people as f64
    };

    if daily_budget > 0.0 && daily_budget <= 200.0 {
        warnings.push(narrative::WARN_LOW_BUDGET.to_string());
    }

    let country = tables::resolve_country(&request.country);
    let tier = tables::classify_tier(&country);
    let minimum = tables::minimum_needs(tier);

    let needs = Needs {
        survival_per_day: minimum.food_hard + minimum.transport_min,
        basic_per_day: minimum.food_soft + minimum.transport_min + minimum.accommodation_soft,
    };

    let difficulty = tables::difficulty(tier);
    let level = classify_level(daily_budget, &needs, difficulty);

    let mut allocation = initial_allocation(request.days, daily_budget, level);

    // Local transport cost correction, skipped in survival mode.
    if level != BudgetLevel::ExtremeLow {
        let factor = tables::transport_factor(&country);
        if factor > 1.0 {
            warnings.push(narrative::transport_warning(factor));
        }
        allocation.transport *= factor;
    }

    let floors = floor_table(level, &minimum);
    let caps = cap_table(daily_budget, &minimum);

    // Independent per-category clamp; conflicts are left to rescue/normalize.
    for category in CATEGORIES {
        let before = allocation.get(category);
        if before < floors.get(category) || before > caps.get(category) {
            flags.used_floor = true;
        }
        *allocation.get_mut(category) = before.max(floors.get(category)).min(caps.get(category));
    }

    rescue_accommodation(
        &mut allocation,
        &floors,
        &minimum,
        level,
        daily_budget,
        &mut flags,
        &mut warnings,
    );

    normalize_total(&mut allocation, &floors, &caps, level, daily_budget, &mut flags);

    let suggestion = narrative::suggestion(level);
    let rounded = allocation.rounded();
    let formatted_result = narrative::format_report(
        request,
        daily_budget,
        level,
        tier,
        &needs,
        &rounded,
        &warnings,
        suggestion,
    );

    BudgetReport {
        daily_budget,
        budget_level: level,
        budget_level_label: level.label().to_string(),
        price_level: tier,
        price_level_label: tier.label().to_string(),
        needs,
        minimum_need: minimum,
        allocation: rounded,
        flags,
        warnings,
        suggestion: suggestion.to_string(),
        formatted_result,
    }
}

fn invalid_report() -> BudgetReport {
    BudgetReport {
        daily_budget: 0.0,
        budget_level: BudgetLevel::Invalid,
        budget_level_label: BudgetLevel::Invalid.label().to_string(),
        price_level: PriceTier::Unknown,
        price_level_label: PriceTier::Unknown.label().to_string(),
        needs: Needs::default(),
        minimum_need: MinimumNeeds::default(),
        allocation: Allocation::default(),
        flags: AdjustmentFlags::default(),
        warnings: vec![narrative::WARN_INVALID_INPUT.to_string()],
        suggestion: narrative::SUGGESTION_INVALID.to_string(),
        formatted_result: narrative::FORMATTED_INVALID.to_string(),
    }
}

/// Compare the daily budget against difficulty-scaled need thresholds.
fn classify_level(daily_budget: f64, needs: &Needs, difficulty: f64) -> BudgetLevel {
    if daily_budget <= 0.0 {
        BudgetLevel::ExtremeLow
    } else if daily_budget < needs.survival_per_day * difficulty {
        BudgetLevel::ExtremeLow
    } else if daily_budget < needs.basic_per_day * difficulty {
        BudgetLevel::Low
    } else if daily_budget < needs.basic_per_day * 1.3 * difficulty {
        BudgetLevel::Mid
    } else if daily_budget < needs.basic_per_day * 2.0 * difficulty {
        BudgetLevel::High
    } else {
        BudgetLevel::Luxury
    }
}

/// Proportional split of the daily budget across categories. The
/// accommodation share gets a mild discount for longer stays (floor 0.90
/// from day 7 onward); `others` takes whatever ratio is left.
fn initial_allocation(days: i64, daily_budget: f64, level: BudgetLevel) -> Allocation {
    let (food_ratio, transport_ratio, accommodation_ratio) = level.base_ratios();
    let attractions_ratio = level.attractions_ratio();
    let others_ratio =
        (1.0 - (food_ratio + transport_ratio + accommodation_ratio + attractions_ratio)).max(0.0);

    let stay_discount = 1.05 - (days as f64 * 0.02).min(0.15);
    let accommodation_ratio = accommodation_ratio * stay_discount;

    Allocation {
        food: daily_budget * food_ratio,
        transport: daily_budget * transport_ratio,
        accommodation: daily_budget * accommodation_ratio,
        attractions: daily_budget * attractions_ratio,
        others: daily_budget * others_ratio,
    }
}

/// Per-category minimums. Survival mode uses hard minimums and drops the
/// accommodation floor entirely.
fn floor_table(level: BudgetLevel, minimum: &MinimumNeeds) -> Allocation {
    let use_hard = level == BudgetLevel::ExtremeLow;
    Allocation {
        food: if use_hard {
            minimum.food_hard
        } else {
            minimum.food_soft
        },
        transport: minimum.transport_min,
        accommodation: if use_hard {
            0.0
        } else {
            minimum.accommodation_soft
        },
        attractions: level.attractions_floor(),
        others: 0.0,
    }
}

/// Per-category maximums, clamped to 95% of the daily budget when one exists.
fn cap_table(daily_budget: f64, minimum: &MinimumNeeds) -> Allocation {
    let mut caps = Allocation {
        food: minimum.food_soft * CAP_SCALE,
        transport: minimum.transport_min * CAP_SCALE,
        accommodation: minimum.accommodation_soft * CAP_SCALE,
        attractions: ATTRACTIONS_CAP,
        others: OTHERS_CAP,
    };

    if daily_budget > 0.0 {
        let ceiling = daily_budget * DAILY_CAP_SHARE;
        for category in CATEGORIES {
            let cap = caps.get_mut(category);
            *cap = cap.min(ceiling);
        }
    }

    caps
}

/// Pull accommodation up to its hard minimum by draining donors in priority
/// order. A donor only gives up headroom above its own floor, and at most
/// `adj_ratio` of that headroom per pass.
fn rescue_accommodation(
    allocation: &mut Allocation,
    floors: &Allocation,
    minimum: &MinimumNeeds,
    level: BudgetLevel,
    daily_budget: f64,
    flags: &mut AdjustmentFlags,
    warnings: &mut Vec<String>,
) {
    if level == BudgetLevel::ExtremeLow || allocation.accommodation >= minimum.accommodation_hard {
        return;
    }

    flags.used_rescue = true;
    warnings.push(narrative::WARN_RESCUE.to_string());

    let mut shortfall = minimum.accommodation_hard - allocation.accommodation;
    let adj_ratio = if daily_budget > 0.0 {
        (daily_budget / 20000.0).clamp(0.1, 0.5)
    } else {
        0.1
    };

    for donor in RESCUE_DONORS {
        if shortfall <= 0.0 {
            break;
        }
        let room = (allocation.get(donor) - floors.get(donor)).max(0.0);
        if room <= 0.0 {
            continue;
        }
        let take = shortfall.min(room * adj_ratio);
        *allocation.get_mut(donor) -= take;
        allocation.accommodation += take;
        shortfall -= take;
    }
}

/// Reconcile the allocation total with the daily budget. Over-allocation
/// shrinks the reducible categories toward their floors and, if that is not
/// enough, rescales everything uniformly. Under-allocation routes the
/// remainder into attractions/others, re-capped afterwards.
fn normalize_total(
    allocation: &mut Allocation,
    floors: &Allocation,
    caps: &Allocation,
    level: BudgetLevel,
    daily_budget: f64,
    flags: &mut AdjustmentFlags,
) {
    let total = allocation.total();
    if daily_budget <= 0.0 || (total - daily_budget).abs() <= 1.0 {
        return;
    }

    if total > daily_budget {
        flags.used_normalize_down = true;
        let need_reduce = total - daily_budget;
        let max_reducible: f64 = REDUCIBLE
            .iter()
            .map(|&category| (allocation.get(category) - floors.get(category)).max(0.0))
            .sum();

        if max_reducible > 0.0 {
            let rate = (need_reduce / max_reducible).min(1.0);
            for category in REDUCIBLE {
                let room = (allocation.get(category) - floors.get(category)).max(0.0);
                *allocation.get_mut(category) -= room * rate;
            }
        }

        let total = allocation.total();
        if total > daily_budget {
            allocation.scale(daily_budget / total);
        }
    } else {
        flags.used_normalize_up = true;
        let remaining = daily_budget - total;
        if remaining > 0.0 {
            match level {
                BudgetLevel::Luxury | BudgetLevel::High => {
                    allocation.attractions += remaining * 0.6;
                    allocation.others += remaining * 0.4;
                }
                _ => allocation.others += remaining,
            }
        }
        allocation.attractions = allocation.attractions.min(caps.attractions);
        allocation.others = allocation.others.min(caps.others);
    }
}
