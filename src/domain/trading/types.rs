use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderSide {
    Buy,
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => write!(f, "BUY"),
            OrderSide::Sell => write!(f, "SELL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderType {
    Market,
    Limit,
    Stop,
    StopLimit,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::Stop => write!(f, "STOP"),
            OrderType::StopLimit => write!(f, "STOP_LIMIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    PartiallyFilled,
    Filled,
    Canceled,
    Rejected,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// An order as seen by the fee pipeline. Quantity is always a positive
/// magnitude; direction lives in `side`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub symbol: String,
    pub side: OrderSide,
    pub quantity: Decimal,
    pub price: Decimal,
    pub order_type: OrderType,
    pub status: OrderStatus,
    pub timestamp: i64,
}

impl Order {
    /// Build a market order, the common case in fee tests and simulations.
    pub fn market(
        id: impl Into<String>,
        symbol: impl Into<String>,
        side: OrderSide,
        quantity: Decimal,
        timestamp: i64,
    ) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
            side,
            quantity,
            price: Decimal::ZERO,
            order_type: OrderType::Market,
            status: OrderStatus::New,
            timestamp,
        }
    }

    /// Signed quantity: positive for buys, negative for sells.
    pub fn signed_quantity(&self) -> Decimal {
        match self.side {
            OrderSide::Buy => self.quantity,
            OrderSide::Sell => -self.quantity,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SecurityKind {
    Equity,
    Crypto,
    Forex,
    Future,
    Option,
}

impl fmt::Display for SecurityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// The slice of security reference data a fee model is allowed to see:
/// identity, asset kind, and the latest market price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Security {
    pub symbol: String,
    pub kind: SecurityKind,
    pub price: Decimal,
}

impl Security {
    pub fn new(symbol: impl Into<String>, kind: SecurityKind, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            kind,
            price,
        }
    }

    /// Whether a usable market price is present. Zero or negative prices are
    /// treated as missing data, not as tradeable levels.
    pub fn has_price(&self) -> bool {
        self.price > Decimal::ZERO
    }
}
