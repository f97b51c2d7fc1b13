use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::trading::types::{Order, Security};

/// The cost of executing one order fill: an amount denominated in a currency
/// the caller knows how to convert (normally the account currency).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFee {
    pub amount: Decimal,
    pub currency: String,
}

impl fmt::Display for OrderFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Read-only view handed to a fee model for a single invocation.
///
/// Borrows the order and security from the pipeline for the duration of one
/// `compute_fee` call; models must not retain it. Result packaging lives on
/// the context rather than the models, so any future currency or unit
/// normalization happens in exactly one place.
#[derive(Debug, Clone, Copy)]
pub struct OrderFeeContext<'a> {
    order: &'a Order,
    security: &'a Security,
}

impl<'a> OrderFeeContext<'a> {
    pub fn new(order: &'a Order, security: &'a Security) -> Self {
        Self { order, security }
    }

    pub fn order(&self) -> &Order {
        self.order
    }

    pub fn security(&self) -> &Security {
        self.security
    }

    /// Package a computed amount into the result value.
    pub fn create_fee(&self, amount: Decimal, currency: &str) -> OrderFee {
        OrderFee {
            amount,
            currency: currency.to_string(),
        }
    }
}
