use std::sync::Arc;
use tracing::{debug, instrument};

use super::conversion::{ConversionError, ConversionProvider, ConversionRequest, ConversionResult};

/// Validates user input and performs conversions through a provider.
#[derive(Clone)]
pub struct ConversionService {
    provider: Arc<dyn ConversionProvider>,
}

impl ConversionService {
    pub fn new(provider: Arc<dyn ConversionProvider>) -> Self {
        ConversionService { provider }
    }

    pub fn validate(
        &self,
        from: &str,
        to: &str,
        amount: f64,
    ) -> Result<ConversionRequest, ConversionError> {
        ConversionRequest::new(from, to, amount)
    }

    #[instrument(
        name = "Convert",
        skip(self, request),
        fields(from = %request.from(), to = %request.to(), amount = request.amount())
    )]
    pub async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let result = self.provider.convert(request).await;
        match &result {
            Ok(r) => debug!(rate = r.rate, converted = r.converted_value, "Conversion succeeded"),
            Err(e) => debug!(error = %e, "Conversion failed"),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FixedRateProvider {
        rate: f64,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ConversionProvider for FixedRateProvider {
        async fn convert(
            &self,
            request: &ConversionRequest,
        ) -> Result<ConversionResult, ConversionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(ConversionResult {
                rate: self.rate,
                converted_value: request.amount() * self.rate,
            })
        }
    }

    #[tokio::test]
    async fn test_convert_delegates_to_provider() {
        let provider = Arc::new(FixedRateProvider {
            rate: 5.0,
            calls: AtomicUsize::new(0),
        });
        let service = ConversionService::new(provider.clone());

        let request = service.validate("usd", "brl", 10.0).unwrap();
        let result = service.convert(&request).await.unwrap();

        assert_eq!(result.rate, 5.0);
        assert_eq!(result.converted_value, 50.0);
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_validate_rejects_same_currency() {
        let provider = Arc::new(FixedRateProvider {
            rate: 1.0,
            calls: AtomicUsize::new(0),
        });
        let service = ConversionService::new(provider);

        let result = service.validate("EUR", "eur", 1.0);
        assert!(matches!(result, Err(ConversionError::SameCurrency)));
    }
}
