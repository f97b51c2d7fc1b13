use std::fmt::Debug;

use crate::domain::errors::FeeError;

use super::context::{OrderFee, OrderFeeContext};

/// Strategy contract for pricing the brokerage cost of one order fill.
///
/// Implementations must be pure with respect to the context: no mutation of
/// the order or security, no retained references, and no internal mutable
/// state, so a shared instance can serve concurrent fills.
pub trait FeeModel: Debug + Send + Sync {
    /// Compute the fee for the fill described by `context`.
    ///
    /// Variants that depend on market data may fail when the context is
    /// incomplete (e.g. a security without a price); configuration-only
    /// variants never do.
    fn compute_fee(&self, context: &OrderFeeContext<'_>) -> Result<OrderFee, FeeError>;

    /// Get description of the fee model
    fn description(&self) -> String;
}
