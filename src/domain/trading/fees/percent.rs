use rust_decimal::Decimal;

use crate::domain::errors::FeeError;

use super::context::{OrderFee, OrderFeeContext};
use super::model::FeeModel;

/// Fee model charging a fraction of the fill's notional value
/// (`rate * price * quantity`). Typical for crypto and FX venues.
///
/// Unlike the configuration-only variants this one reads market data, so it
/// fails when the security carries no usable price.
#[derive(Debug, Clone)]
pub struct PercentOfNotionalFeeModel {
    rate: Decimal,
    currency: String,
}

impl PercentOfNotionalFeeModel {
    /// `rate` is a fraction, e.g. 0.001 for 10 bps.
    pub fn new(rate: Decimal, currency: impl Into<String>) -> Self {
        Self {
            rate,
            currency: currency.into(),
        }
    }
}

impl FeeModel for PercentOfNotionalFeeModel {
    fn compute_fee(&self, context: &OrderFeeContext<'_>) -> Result<OrderFee, FeeError> {
        let security = context.security();
        if !security.has_price() {
            return Err(FeeError::MissingPrice {
                symbol: security.symbol.clone(),
            });
        }

        let notional = security.price * context.order().quantity.abs();
        Ok(context.create_fee(notional * self.rate, &self.currency))
    }

    fn description(&self) -> String {
        format!(
            "Percent Of Notional Fee Model ({:.4}%)",
            self.rate * Decimal::from(100)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trading::types::{Order, OrderSide, Security, SecurityKind};
    use rust_decimal_macros::dec;

    #[test]
    fn test_fee_is_rate_times_notional() {
        let order = Order::market("1", "BTC/USD", OrderSide::Buy, dec!(0.5), 0);
        let security = Security::new("BTC/USD", SecurityKind::Crypto, dec!(64000));
        let context = OrderFeeContext::new(&order, &security);

        let model = PercentOfNotionalFeeModel::new(dec!(0.001), "USD");
        let fee = model.compute_fee(&context).unwrap();
        assert_eq!(fee.amount, dec!(32.0000));
        assert_eq!(fee.currency, "USD");
    }

    #[test]
    fn test_missing_price_is_an_error() {
        let order = Order::market("1", "BTC/USD", OrderSide::Buy, dec!(0.5), 0);
        let security = Security::new("BTC/USD", SecurityKind::Crypto, Decimal::ZERO);
        let context = OrderFeeContext::new(&order, &security);

        let model = PercentOfNotionalFeeModel::new(dec!(0.001), "USD");
        let err = model.compute_fee(&context).unwrap_err();
        assert!(matches!(err, FeeError::MissingPrice { ref symbol } if symbol == "BTC/USD"));
    }
}
