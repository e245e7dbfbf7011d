//! Travel budget allocator
//!
//! Pure, synchronous budget engine: given a total budget, trip length,
//! destination, and traveler count, it classifies the destination's price
//! tier and the traveler's budget level, then splits the daily per-person
//! budget across five spending categories with floor/cap enforcement, an
//! accommodation rescue pass, and a final normalization pass.
//!
//! The engine never fails: invalid or degenerate inputs come back as a
//! structured report with warnings instead of an error. Everything is
//! recomputed per call from static tables, so concurrent callers need no
//! coordination.

mod allocate;
mod narrative;
mod report;
mod tables;

pub use allocate::compute;
pub use report::{
    AdjustmentFlags, Allocation, BudgetLevel, BudgetReport, BudgetRequest, Category,
    MinimumNeeds, Needs, PriceTier, CATEGORIES,
};
