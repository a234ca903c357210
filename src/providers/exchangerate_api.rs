use anyhow::Result;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::core::{ConversionError, ConversionProvider, ConversionRequest, ConversionResult};

const RESULT_SUCCESS: &str = "success";
const RESULT_ERROR: &str = "error";

/// Converts amounts through the ExchangeRate-API "pair" endpoint.
pub struct ExchangeRateApiProvider {
    base_url: String,
    api_key: String,
    client: reqwest::Client,
}

impl ExchangeRateApiProvider {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("conversor/1.0")
            .build()?;
        Ok(ExchangeRateApiProvider {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            client,
        })
    }

    fn pair_url(&self, request: &ConversionRequest) -> String {
        format!(
            "{}/{}/pair/{}/{}/{}",
            self.base_url,
            self.api_key,
            request.from(),
            request.to(),
            request.amount()
        )
    }
}

// Every field is optional: the API reuses one body shape for success and
// error replies, and a missing field is reported as an unknown error.
#[derive(Debug, Deserialize)]
struct PairResponse {
    result: Option<String>,
    conversion_rate: Option<f64>,
    conversion_result: Option<f64>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

impl PairResponse {
    fn into_result(self) -> Result<ConversionResult, ConversionError> {
        match self.result.as_deref() {
            Some(RESULT_ERROR) => Err(ConversionError::RemoteConversion(
                self.error_type.unwrap_or_else(|| "unknown".to_string()),
            )),
            Some(RESULT_SUCCESS) => match (self.conversion_rate, self.conversion_result) {
                (Some(rate), Some(converted_value)) => Ok(ConversionResult {
                    rate,
                    converted_value,
                }),
                _ => Err(ConversionError::UnknownRemote),
            },
            _ => Err(ConversionError::UnknownRemote),
        }
    }
}

#[async_trait]
impl ConversionProvider for ExchangeRateApiProvider {
    #[instrument(
        name = "ExchangeRateApiConvert",
        skip(self, request),
        fields(from = %request.from(), to = %request.to())
    )]
    async fn convert(
        &self,
        request: &ConversionRequest,
    ) -> Result<ConversionResult, ConversionError> {
        let url = self.pair_url(request);
        debug!(
            "Requesting conversion from {}",
            url.replace(&self.api_key, "***")
        );

        // Business errors come back with non-2xx statuses and a JSON body,
        // so the body is parsed regardless of status.
        let response = self.client.get(&url).send().await?;
        debug!(status = %response.status(), "Received ExchangeRate-API response");

        let data = response.json::<PairResponse>().await?;
        debug!(?data, "Parsed ExchangeRate-API response");

        data.into_result()
    }
}
