use rust_decimal::Decimal;
use tracing::warn;

use crate::domain::errors::FeeError;

use super::context::{OrderFee, OrderFeeContext};
use super::model::FeeModel;

/// Fee model that charges the same flat fee for every fill, regardless of
/// quantity, price, security kind, or venue. That insensitivity is a design
/// simplification, not a bug: callers that need proportional or tiered fees
/// pick a different variant.
#[derive(Debug, Clone)]
pub struct ConstantFeeModel {
    fee: Decimal,
    fee_currency: String,
}

impl ConstantFeeModel {
    /// Build a model charging `fee` in `fee_currency`, both stored exactly as
    /// given. A negative fee is accepted (the caller owns the sign when it
    /// names the currency) but logged, since it credits the account on every
    /// fill.
    pub fn new(fee: Decimal, fee_currency: impl Into<String>) -> Self {
        let fee_currency = fee_currency.into();
        if fee < Decimal::ZERO {
            warn!(%fee, %fee_currency, "constant fee model configured with a negative fee");
        }
        Self { fee, fee_currency }
    }

    /// Build a model charging `|fee|` in the account currency. The currency
    /// is captured by value at the call site that assembles the strategy;
    /// later configuration changes do not affect this instance.
    pub fn in_account_currency(fee: Decimal, account_currency: impl Into<String>) -> Self {
        Self {
            fee: fee.abs(),
            fee_currency: account_currency.into(),
        }
    }

    pub fn fee(&self) -> Decimal {
        self.fee
    }

    pub fn fee_currency(&self) -> &str {
        &self.fee_currency
    }
}

impl FeeModel for ConstantFeeModel {
    fn compute_fee(&self, context: &OrderFeeContext<'_>) -> Result<OrderFee, FeeError> {
        Ok(context.create_fee(self.fee, &self.fee_currency))
    }

    fn description(&self) -> String {
        format!("Constant Fee Model ({} {})", self.fee, self.fee_currency)
    }
}
