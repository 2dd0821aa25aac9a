use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::utils::helper::format_usd;

/// A tradable token with its USD unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub currency: String,
    /// Price of one unit in USD; 0.0 means unpriced
    pub price: f64,
    pub logo: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Token {
    /// Create a new token
    pub fn new(id: impl Into<String>, currency: impl Into<String>, price: f64) -> Self {
        let currency = currency.into();
        let logo = format!("{}.svg", currency);

        Self {
            id: id.into(),
            currency,
            price: sanitize_price(price),
            logo,
            date: None,
        }
    }

    /// Attach the time the price was observed
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Check if the token has a usable price
    pub fn is_priced(&self) -> bool {
        self.price > 0.0
    }

    /// Format price for display
    pub fn formatted_price(&self) -> String {
        if self.is_priced() {
            format_usd(self.price)
        } else {
            "N/A".to_string()
        }
    }
}

/// Negative and non-finite prices are treated as unpriced
pub(crate) fn sanitize_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 {
        price
    } else {
        0.0
    }
}

/// Find a token by id in a price snapshot
pub fn find_token<'a>(tokens: &'a [Token], id: &str) -> Option<&'a Token> {
    tokens.iter().find(|t| t.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_token_defaults_logo() {
        let token = Token::new("1", "ETH", 1645.93);
        assert_eq!(token.logo, "ETH.svg");
        assert!(token.is_priced());
        assert_eq!(token.formatted_price(), "$1645.9300");
    }

    #[test]
    fn test_with_date() {
        let date = DateTime::parse_from_rfc3339("2023-08-29T07:10:52.000Z")
            .unwrap()
            .with_timezone(&Utc);
        let token = Token::new("ETH", "ETH", 1645.93).with_date(date);
        assert_eq!(token.date, Some(date));
        assert!(Token::new("ETH", "ETH", 1645.93).date.is_none());
    }

    #[test]
    fn test_invalid_price_is_unpriced() {
        assert_eq!(Token::new("x", "X", -3.0).price, 0.0);
        assert_eq!(Token::new("x", "X", f64::NAN).price, 0.0);
        assert_eq!(Token::new("x", "X", 0.0).formatted_price(), "N/A");
    }

    #[test]
    fn test_find_token() {
        let tokens = vec![Token::new("1", "A", 2.0), Token::new("2", "B", 4.0)];
        assert_eq!(find_token(&tokens, "2").map(|t| t.price), Some(4.0));
        assert!(find_token(&tokens, "3").is_none());
    }
}
