use serde::{Deserialize, Serialize};

/// Payload submitted by the swap form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapRequest {
    pub from: String,
    pub to: String,
    /// Sanitized amount as typed
    pub amount: String,
}

/// Per-field validation messages for the swap form
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormErrors {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Option<String>,
}

impl FormErrors {
    /// Create an empty error set
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are no errors
    pub fn is_empty(&self) -> bool {
        self.from.is_none() && self.to.is_none() && self.amount.is_none()
    }
}

/// Summary of a completed swap
#[derive(Debug, Clone, PartialEq)]
pub struct SwapReceipt {
    pub request: SwapRequest,
    pub from_currency: String,
    pub to_currency: String,
    pub output: f64,
}

impl SwapReceipt {
    /// Format the receipt for display
    pub fn summary(&self) -> String {
        format!(
            "Swapped {} {} → {:.4} {}",
            self.request.amount, self.from_currency, self.output, self.to_currency
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_summary() {
        let receipt = SwapReceipt {
            request: SwapRequest {
                from: "1".into(),
                to: "2".into(),
                amount: "10".into(),
            },
            from_currency: "tokenA".into(),
            to_currency: "tokenB".into(),
            output: 5.0,
        };
        assert_eq!(receipt.summary(), "Swapped 10 tokenA → 5.0000 tokenB");
    }

    #[test]
    fn test_form_errors_empty() {
        let mut errors = FormErrors::new();
        assert!(errors.is_empty());
        errors.to = Some("Select a currency".into());
        assert!(!errors.is_empty());
    }
}
