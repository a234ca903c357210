//! Currency conversion types and the provider abstraction

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Currency codes must have exactly 3 letters, got '{0}'")]
    InvalidCurrencyCode(String),
    #[error("Amount must be a number greater than 0")]
    InvalidAmount,
    #[error("Source and target currencies must be different")]
    SameCurrency,
    #[error("Conversion failed: {0}")]
    RemoteConversion(String),
    #[error("Unknown conversion error")]
    UnknownRemote,
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// A validated conversion request.
///
/// Codes are uppercase 3-letter codes that differ from each other and the
/// amount is finite and positive. The only way to build one is
/// [`ConversionRequest::new`], so every instance upholds these rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    from: String,
    to: String,
    amount: f64,
}

impl ConversionRequest {
    pub fn new(from: &str, to: &str, amount: f64) -> Result<Self, ConversionError> {
        let from = normalize_code(from)?;
        let to = normalize_code(to)?;

        if !amount.is_finite() || amount <= 0.0 {
            return Err(ConversionError::InvalidAmount);
        }

        if from == to {
            return Err(ConversionError::SameCurrency);
        }

        Ok(Self { from, to, amount })
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConversionResult {
    pub rate: f64,
    pub converted_value: f64,
}

#[async_trait]
pub trait ConversionProvider: Send + Sync {
    async fn convert(&self, request: &ConversionRequest)
    -> Result<ConversionResult, ConversionError>;
}

/// Parses user input into an amount. Unparseable input becomes NaN so that
/// validation reports it as an invalid amount.
pub fn parse_amount(input: &str) -> f64 {
    input.trim().parse::<f64>().unwrap_or(f64::NAN)
}

fn normalize_code(code: &str) -> Result<String, ConversionError> {
    let code = code.trim().to_uppercase();
    if code.chars().count() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ConversionError::InvalidCurrencyCode(code));
    }
    Ok(code)
}
