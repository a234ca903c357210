//! Interactive prompt loop around [`ConversionService`].

use anyhow::Result;
use async_trait::async_trait;
use std::io::Write;
use tokio::io::{
    AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout,
};
use tracing::debug;

use super::ui;
use crate::core::conversion::parse_amount;
use crate::core::{ConversionError, ConversionRequest, ConversionResult, ConversionService};

pub const FROM_PROMPT: &str = "Source currency (empty to quit): ";
pub const TO_PROMPT: &str = "Target currency: ";
pub const AMOUNT_PROMPT: &str = "Amount to convert: ";

/// Source of user input lines.
#[async_trait]
pub trait LineReader: Send {
    /// Shows `prompt` and waits for the next line. `None` means end of input.
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Reads prompted lines from any async byte stream, writing prompts to `output`.
///
/// Lines are decoded lossily, so bytes that are not UTF-8 reach validation
/// as replacement characters instead of ending the session.
pub struct BufLineReader<R, W> {
    input: R,
    output: W,
}

pub type StdinLineReader = BufLineReader<BufReader<Stdin>, Stdout>;

impl<R, W> BufLineReader<R, W> {
    pub fn with_io(input: R, output: W) -> Self {
        BufLineReader { input, output }
    }
}

impl StdinLineReader {
    pub fn new() -> Self {
        Self::with_io(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl Default for StdinLineReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R, W> LineReader for BufLineReader<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.output.write_all(prompt.as_bytes()).await?;
        self.output.flush().await?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }
}

async fn validate_and_convert(
    service: &ConversionService,
    from: &str,
    to: &str,
    amount: &str,
) -> Result<(ConversionRequest, ConversionResult), ConversionError> {
    let request = service.validate(from, to, parse_amount(amount))?;

    let spinner = ui::new_spinner(&format!(
        "Converting {} {} to {}...",
        request.amount(),
        request.from(),
        request.to()
    ));
    let result = service.convert(&request).await;
    spinner.finish_and_clear();

    Ok((request, result?))
}

/// Runs the prompt loop until an empty source currency or end of input.
///
/// Conversion failures are printed and the loop moves on to the next
/// prompt; only I/O errors on `input` or `out` end it early.
pub async fn run_interactive<R, W>(
    service: &ConversionService,
    input: &mut R,
    out: &mut W,
) -> Result<()>
where
    R: LineReader + ?Sized,
    W: Write + Send,
{
    writeln!(out, "{}", ui::style_text("Currency converter", ui::StyleType::Title))?;

    loop {
        let Some(from) = input.read_line(FROM_PROMPT).await? else {
            break;
        };
        if from.trim().is_empty() {
            break;
        }
        let Some(to) = input.read_line(TO_PROMPT).await? else {
            break;
        };
        let Some(amount) = input.read_line(AMOUNT_PROMPT).await? else {
            break;
        };

        match validate_and_convert(service, &from, &to, &amount).await {
            Ok((request, result)) => {
                writeln!(out, "{}", ui::format_conversion(&request, &result))?;
            }
            Err(e) => {
                debug!(error = ?e, "Conversion failed");
                writeln!(out, "{}", ui::format_error(&e))?;
            }
        }
    }

    writeln!(out, "{}", ui::style_text("Goodbye.", ui::StyleType::Subtle))?;
    Ok(())
}

/// Converts a single amount and prints the result.
pub async fn run_single<W: Write + Send>(
    service: &ConversionService,
    from: &str,
    to: &str,
    amount: &str,
    out: &mut W,
) -> Result<()> {
    let (request, result) = validate_and_convert(service, from, to, amount).await?;
    writeln!(out, "{}", ui::format_conversion(&request, &result))?;
    Ok(())
}
