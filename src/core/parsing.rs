//! Heuristic extraction of intent, airport code and budget from free text.
//!
//! These are deliberately simple pattern matches. They misfire on text that
//! merely looks like a match (any three-letter word is an airport code, any
//! 2-5 digit number is a budget); the tests below pin that behavior down.

use regex::Regex;
use std::sync::LazyLock;

pub const SET_HOME_AIRPORT_PHRASE: &str = "set my home airport to";

static AIRPORT_CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z]{3})\b").unwrap());

static BUDGET_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$?([0-9]{2,5})").unwrap());

/// Returns the uppercased text after "set my home airport to" when the
/// phrase occurs anywhere in the message (case-insensitive). The result can
/// be empty, e.g. for "set my home airport to".
pub fn parse_set_home_airport(message: &str) -> Option<String> {
    let lower = message.to_lowercase();
    if !lower.contains(SET_HOME_AIRPORT_PHRASE) {
        return None;
    }
    // Segment between the first occurrence and the next one, if repeated.
    let remainder = lower.split(SET_HOME_AIRPORT_PHRASE).nth(1).unwrap_or("");
    Some(remainder.trim().to_uppercase())
}

/// First standalone three-letter word of the uppercased message.
pub fn extract_airport_code(message: &str) -> Option<String> {
    let upper = message.to_uppercase();
    AIRPORT_CODE_RE
        .captures(&upper)
        .map(|caps| caps[1].to_string())
}

/// First run of 2-5 digits, optionally after a `$`. Longer runs are cut
/// at five digits.
pub fn extract_budget(message: &str) -> Option<u32> {
    let lower = message.to_lowercase();
    BUDGET_RE
        .captures(&lower)
        .and_then(|caps| caps[1].parse::<u32>().ok())
}
