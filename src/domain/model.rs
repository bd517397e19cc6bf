use serde::{Deserialize, Serialize};
use std::fmt;

/// One catalog fare to a ski destination airport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOption {
    pub destination: String,
    pub price_usd: u32,
    pub notes: String,
}

impl FlightOption {
    pub fn new(destination: &str, price_usd: u32, notes: &str) -> Self {
        Self {
            destination: destination.to_string(),
            price_usd,
            notes: notes.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceLabel {
    #[serde(rename = "budget-friendly")]
    BudgetFriendly,
    #[serde(rename = "within budget")]
    WithinBudget,
    #[serde(rename = "above budget")]
    AboveBudget,
    #[serde(rename = "mid-range")]
    MidRange,
    #[serde(rename = "premium")]
    Premium,
}

impl PriceLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceLabel::BudgetFriendly => "budget-friendly",
            PriceLabel::WithinBudget => "within budget",
            PriceLabel::AboveBudget => "above budget",
            PriceLabel::MidRange => "mid-range",
            PriceLabel::Premium => "premium",
        }
    }
}

impl fmt::Display for PriceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fare after filtering, ready for display. Built per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFare {
    pub destination: String,
    pub price_usd: u32,
    pub label: PriceLabel,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionEntry {
    pub home_airport: Option<String>,
}
