use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::{ConversionError, ConversionRequest, ConversionResult};

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Value,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold(),
        StyleType::Value => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Renders the rate line and the converted amount line.
pub fn format_conversion(request: &ConversionRequest, result: &ConversionResult) -> String {
    let from = request.from();
    let to = request.to();
    let rate = format!("{:.6}", result.rate);
    let converted = format!("{:.2}", result.converted_value);
    format!(
        "1 {from} = {rate} {to}\n{} {from} = {} {to}",
        request.amount(),
        style_text(&converted, StyleType::Value)
    )
}

pub fn format_error(error: &ConversionError) -> String {
    style_text(&format!("Erro: {error}"), StyleType::Error)
}

/// Creates a spinner shown while a request is in flight. It draws on stderr
/// and stays hidden when stderr is not a terminal.
pub fn new_spinner(message: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_conversion() {
        let request = ConversionRequest::new("USD", "EUR", 100.0).unwrap();
        let result = ConversionResult {
            rate: 0.9,
            converted_value: 90.0,
        };

        let output = console::strip_ansi_codes(&format_conversion(&request, &result)).to_string();
        assert_eq!(output, "1 USD = 0.900000 EUR\n100 USD = 90.00 EUR");
    }

    #[test]
    fn test_format_conversion_rounds() {
        let request = ConversionRequest::new("BRL", "JPY", 12.5).unwrap();
        let result = ConversionResult {
            rate: 27.1234567,
            converted_value: 339.04320875,
        };

        let output = console::strip_ansi_codes(&format_conversion(&request, &result)).to_string();
        assert_eq!(output, "1 BRL = 27.123457 JPY\n12.5 BRL = 339.04 JPY");
    }

    #[test]
    fn test_format_error() {
        let output = console::strip_ansi_codes(&format_error(&ConversionError::SameCurrency))
            .to_string();
        assert_eq!(output, "Erro: Source and target currencies must be different");
    }
}
