use crate::domain::model::{FlightOption, PriceLabel, RankedFare};

/// Highest price labeled budget-friendly when no budget is given.
pub const BUDGET_FRIENDLY_MAX: u32 = 250;
/// Fares up to this with no budget are mid-range; above is premium.
pub const MID_RANGE_MAX: u32 = 400;

// Ratios are compared as integer fractions so 0.8 × 400 is exactly 320.
fn at_most_ratio(price: u32, budget: u32, numerator: u64, denominator: u64) -> bool {
    u64::from(price) * denominator <= u64::from(budget) * numerator
}

/// Labels one price. With a budget the bands are relative to it
/// (≤ 80%, ≤ 120%, above), without one they are fixed dollar bands.
pub fn label(price: u32, budget: Option<u32>) -> PriceLabel {
    match budget {
        Some(budget) => {
            if at_most_ratio(price, budget, 4, 5) {
                PriceLabel::BudgetFriendly
            } else if at_most_ratio(price, budget, 6, 5) {
                PriceLabel::WithinBudget
            } else {
                PriceLabel::AboveBudget
            }
        }
        None => {
            if price <= BUDGET_FRIENDLY_MAX {
                PriceLabel::BudgetFriendly
            } else if price <= MID_RANGE_MAX {
                PriceLabel::MidRange
            } else {
                PriceLabel::Premium
            }
        }
    }
}

/// Drops fares above 150% of the budget, sorts by price (stable, so equal
/// prices keep catalog order) and labels what is left.
pub fn filter_and_rank(fares: Vec<FlightOption>, budget: Option<u32>) -> Vec<RankedFare> {
    let mut kept: Vec<FlightOption> = match budget {
        Some(b) => fares
            .into_iter()
            .filter(|f| at_most_ratio(f.price_usd, b, 3, 2))
            .collect(),
        None => fares,
    };

    kept.sort_by_key(|f| f.price_usd);

    tracing::debug!("{} fares left after budget filter {:?}", kept.len(), budget);

    kept.into_iter()
        .map(|f| RankedFare {
            label: label(f.price_usd, budget),
            destination: f.destination,
            price_usd: f.price_usd,
            notes: f.notes,
        })
        .collect()
}
