//! Amount sanitizing and price-ratio conversion for the swap form.

use crate::models::token::{find_token, Token};

/// Default number of fractional digits kept by [`format_input_default`]
pub const DEFAULT_MAX_DECIMALS: usize = 18;

/// Compute how much of `to_token_id` the given amount of `from_token_id` buys.
///
/// Returns 0.0 when either id is empty or unknown, when either side is
/// unpriced, or when `amount` is not strictly positive. No rounding is
/// applied; that is left to the display layer.
pub fn compute_output(from_token_id: &str, to_token_id: &str, amount: f64, tokens: &[Token]) -> f64 {
    // `!(amount > 0.0)` also rejects NaN
    if from_token_id.is_empty() || to_token_id.is_empty() || !(amount > 0.0) {
        return 0.0;
    }

    let from_price = find_token(tokens, from_token_id).map_or(0.0, |t| t.price);
    let to_price = find_token(tokens, to_token_id).map_or(0.0, |t| t.price);

    if from_price > 0.0 && to_price > 0.0 {
        amount * from_price / to_price
    } else {
        0.0
    }
}

/// Normalize raw keystrokes into a decimal numeral, keeping at most
/// `max_decimals` fractional digits (truncated, never rounded).
///
/// The result is either empty or a numeral with one optional `.`, no
/// superfluous leading zeros and nothing but ASCII digits.
pub fn format_input(value: &str, max_decimals: usize) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    if cleaned.is_empty() {
        return String::new();
    }

    let (int_part, frac_part) = match cleaned.split_once('.') {
        Some((int_part, rest)) => {
            let frac: String = rest
                .chars()
                .filter(|c| *c != '.')
                .take(max_decimals)
                .collect();
            (int_part, Some(frac))
        }
        None => (cleaned.as_str(), None),
    };

    // Covers both "00.5" and ".5": an empty integer part becomes a single zero
    let int_part = match int_part.trim_start_matches('0') {
        "" => "0",
        trimmed => trimmed,
    };

    match frac_part {
        Some(frac) => format!("{}.{}", int_part, frac),
        None => int_part.to_string(),
    }
}

/// [`format_input`] with [`DEFAULT_MAX_DECIMALS`]
pub fn format_input_default(value: &str) -> String {
    format_input(value, DEFAULT_MAX_DECIMALS)
}
