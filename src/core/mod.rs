//! Core business logic abstractions

pub mod config;
pub mod conversion;
pub mod log;
pub mod service;

// Re-export main types for cleaner imports
pub use conversion::{ConversionError, ConversionProvider, ConversionRequest, ConversionResult};
pub use service::ConversionService;
