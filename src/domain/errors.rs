use thiserror::Error;

/// Errors a fee model can surface while pricing an order fill
#[derive(Debug, Error)]
pub enum FeeError {
    #[error("No market price available for {symbol}: fee cannot be computed")]
    MissingPrice { symbol: String },

    #[error("Unsupported security {symbol}: {reason}")]
    UnsupportedSecurity { symbol: String, reason: String },
}
