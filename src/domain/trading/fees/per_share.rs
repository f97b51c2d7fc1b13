use rust_decimal::Decimal;

use crate::domain::errors::FeeError;

use super::context::{OrderFee, OrderFeeContext};
use super::model::FeeModel;

/// Fee model charging a fixed amount per share traded, with an optional
/// per-order minimum. Typical for US equity brokers.
#[derive(Debug, Clone)]
pub struct PerShareFeeModel {
    fee_per_share: Decimal,
    minimum: Option<Decimal>,
    currency: String,
}

impl PerShareFeeModel {
    pub fn new(fee_per_share: Decimal, currency: impl Into<String>) -> Self {
        Self {
            fee_per_share,
            minimum: None,
            currency: currency.into(),
        }
    }

    pub fn with_minimum(mut self, minimum: Decimal) -> Self {
        self.minimum = Some(minimum);
        self
    }
}

impl FeeModel for PerShareFeeModel {
    fn compute_fee(&self, context: &OrderFeeContext<'_>) -> Result<OrderFee, FeeError> {
        // Quantity is a magnitude by convention; abs() guards against
        // upstream data that encodes sells as negative quantities.
        let mut amount = context.order().quantity.abs() * self.fee_per_share;
        if let Some(minimum) = self.minimum {
            amount = amount.max(minimum);
        }
        Ok(context.create_fee(amount, &self.currency))
    }

    fn description(&self) -> String {
        format!(
            "Per Share Fee Model ({}/share, min {})",
            self.fee_per_share,
            self.minimum.unwrap_or(Decimal::ZERO)
        )
    }
}
