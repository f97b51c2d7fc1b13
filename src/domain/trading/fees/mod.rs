//! Pluggable fee calculation for order fills.
//!
//! The order-processing pipeline assembles one [`FeeModel`] per strategy at
//! configuration time and invokes it once per fill through an
//! [`OrderFeeContext`]. Variants are interchangeable behind the trait; the
//! context owns the result representation via [`OrderFeeContext::create_fee`].

mod constant;
mod context;
mod model;
mod per_share;
mod percent;

pub use constant::ConstantFeeModel;
pub use context::{OrderFee, OrderFeeContext};
pub use model::FeeModel;
pub use per_share::PerShareFeeModel;
pub use percent::PercentOfNotionalFeeModel;
