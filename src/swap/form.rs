use crate::models::swap::{FormErrors, SwapReceipt, SwapRequest};
use crate::models::token::{find_token, Token};
use crate::utils::helper::parse_amount;
use crate::utils::precision::{compute_output, format_input, DEFAULT_MAX_DECIMALS};

/// Largest amount the form accepts
pub const MAX_AMOUNT: f64 = 1e12;

pub const MSG_AMOUNT_REQUIRED: &str = "Amount is required";
pub const MSG_AMOUNT_TOO_LARGE: &str = "Amount was too large";
pub const MSG_AMOUNT_NOT_POSITIVE: &str = "Amount must be greater than zero";
pub const MSG_SELECT_CURRENCY: &str = "Select a currency";
pub const MSG_SAME_TOKEN: &str = "Cannot swap to same token";

/// State of the currency swap form
#[derive(Debug, Clone)]
pub struct SwapForm {
    from: String,
    to: String,
    amount: String,
    max_decimals: usize,
    errors: FormErrors,
}

impl SwapForm {
    /// Create an empty form
    pub fn new() -> Self {
        Self::with_max_decimals(DEFAULT_MAX_DECIMALS)
    }

    /// Create an empty form keeping at most `max_decimals` fractional digits
    pub fn with_max_decimals(max_decimals: usize) -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            amount: String::new(),
            max_decimals,
            errors: FormErrors::default(),
        }
    }

    /// Store the sanitized form of a raw amount keystroke
    pub fn set_amount(&mut self, raw: &str) {
        self.amount = format_input(raw, self.max_decimals);
        self.errors.amount = None;
    }

    /// Select the token to swap from
    pub fn set_from(&mut self, id: &str) {
        self.from = id.to_string();
        self.errors.from = None;
    }

    /// Select the token to swap to
    pub fn set_to(&mut self, id: &str) {
        self.to = id.to_string();
        self.errors.to = None;
    }

    /// Sanitized amount as typed
    pub fn amount(&self) -> &str {
        &self.amount
    }

    /// Amount as a number, NaN while the field is empty
    pub fn amount_value(&self) -> f64 {
        parse_amount(&self.amount)
    }

    /// Errors from the last submit
    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Selected source token, defaulting to the first token of the feed
    pub fn from_id(&self, tokens: &[Token]) -> String {
        selected_or_default(&self.from, tokens, 0)
    }

    /// Selected target token, defaulting to the third token of the feed
    pub fn to_id(&self, tokens: &[Token]) -> String {
        selected_or_default(&self.to, tokens, 2)
    }

    /// Converted amount for the current selection
    pub fn output(&self, tokens: &[Token]) -> f64 {
        compute_output(&self.from_id(tokens), &self.to_id(tokens), self.amount_value(), tokens)
    }

    /// Output rounded to four decimals, empty when there is nothing to show
    pub fn display_output(&self, tokens: &[Token]) -> String {
        let output = self.output(tokens);
        if output > 0.0 {
            format!("{:.4}", output)
        } else {
            String::new()
        }
    }

    /// USD value of the entered amount, if the source token is priced
    pub fn usd_value(&self, tokens: &[Token]) -> Option<f64> {
        let amount = self.amount_value();
        if !(amount >= 0.0) {
            return None;
        }
        let from_id = self.from_id(tokens);
        find_token(tokens, &from_id)
            .filter(|t| t.is_priced())
            .map(|t| t.price * amount)
    }

    /// USD value of the converted output, if the target token is priced
    pub fn output_usd_value(&self, tokens: &[Token]) -> Option<f64> {
        let to_id = self.to_id(tokens);
        find_token(tokens, &to_id)
            .filter(|t| t.is_priced())
            .map(|t| t.price * self.output(tokens))
    }

    /// Swap the direction of the trade. Both sides are resolved with their
    /// defaults first; nothing happens unless both are selected.
    pub fn flip(&mut self, tokens: &[Token]) {
        let from = self.from_id(tokens);
        let to = self.to_id(tokens);
        if from.is_empty() || to.is_empty() {
            return;
        }

        self.from = to;
        self.to = from;
        self.errors.from = None;
        self.errors.to = None;
    }

    /// Check the form and build the request to submit
    pub fn validate(&self, tokens: &[Token]) -> Result<SwapRequest, FormErrors> {
        let mut errors = FormErrors::new();
        let from = self.from_id(tokens);
        let to = self.to_id(tokens);

        if self.amount.is_empty() {
            errors.amount = Some(MSG_AMOUNT_REQUIRED.to_string());
        } else {
            let amount = self.amount_value();
            if amount > MAX_AMOUNT {
                errors.amount = Some(MSG_AMOUNT_TOO_LARGE.to_string());
            } else if !(amount > 0.0) {
                errors.amount = Some(MSG_AMOUNT_NOT_POSITIVE.to_string());
            }
        }

        if from.is_empty() {
            errors.from = Some(MSG_SELECT_CURRENCY.to_string());
        }
        if to.is_empty() {
            errors.to = Some(MSG_SELECT_CURRENCY.to_string());
        } else if from == to {
            errors.to = Some(MSG_SAME_TOKEN.to_string());
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(SwapRequest {
            from,
            to,
            amount: self.amount.clone(),
        })
    }

    /// Validate and produce a receipt; errors are kept on the form
    pub fn submit(&mut self, tokens: &[Token]) -> Result<SwapReceipt, FormErrors> {
        let request = match self.validate(tokens) {
            Ok(request) => request,
            Err(errors) => {
                self.errors = errors.clone();
                return Err(errors);
            }
        };
        self.errors = FormErrors::default();

        let currency_of = |id: &str| {
            find_token(tokens, id)
                .map(|t| t.currency.clone())
                .unwrap_or_else(|| id.to_string())
        };

        Ok(SwapReceipt {
            from_currency: currency_of(&request.from),
            to_currency: currency_of(&request.to),
            output: self.output(tokens),
            request,
        })
    }
}

impl Default for SwapForm {
    fn default() -> Self {
        Self::new()
    }
}

fn selected_or_default(selected: &str, tokens: &[Token], fallback: usize) -> String {
    if !selected.is_empty() {
        return selected.to_string();
    }
    tokens
        .get(fallback)
        .map(|t| t.id.clone())
        .unwrap_or_default()
}
