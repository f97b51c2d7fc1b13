//! Configuration for the fee subsystem.
//!
//! Loads fee-model selection and parameters from environment variables and
//! assembles the configured [`FeeModel`] variant. The account currency is an
//! explicit configuration value captured here and passed by value into model
//! constructors; nothing reads it after construction.

use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::env;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

use crate::domain::trading::fees::{
    ConstantFeeModel, FeeModel, PerShareFeeModel, PercentOfNotionalFeeModel,
};

/// Which fee model variant to assemble
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeModelKind {
    Constant,
    PerShare,
    Percent,
}

impl FromStr for FeeModelKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "constant" => Ok(FeeModelKind::Constant),
            "per_share" => Ok(FeeModelKind::PerShare),
            "percent" => Ok(FeeModelKind::Percent),
            _ => anyhow::bail!(
                "Invalid FEE_MODEL: {}. Must be 'constant', 'per_share', or 'percent'",
                s
            ),
        }
    }
}

/// Fee environment configuration
#[derive(Debug, Clone)]
pub struct FeeEnvConfig {
    /// Base currency for portfolio valuation and default fee denomination
    pub account_currency: String,
    pub model: FeeModelKind,

    // Constant model
    pub fee_amount: Decimal,
    /// When set, the constant fee is taken as-is in this currency; when
    /// unset, |FEE_AMOUNT| in the account currency.
    pub fee_currency: Option<String>,

    // Per-share model
    pub fee_per_share: Decimal,
    pub fee_minimum: Option<Decimal>,

    // Percent-of-notional model
    pub fee_rate: Decimal,
}

impl FeeEnvConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let account_currency = env::var("ACCOUNT_CURRENCY").unwrap_or_else(|_| "USD".to_string());

        let model = env::var("FEE_MODEL")
            .unwrap_or_else(|_| "constant".to_string())
            .parse::<FeeModelKind>()?;

        let fee_minimum = match env::var("FEE_MINIMUM") {
            Ok(raw) => Some(
                raw.parse::<Decimal>()
                    .context("Failed to parse FEE_MINIMUM")?,
            ),
            Err(_) => None,
        };

        Ok(Self {
            account_currency,
            model,
            fee_amount: Self::parse_decimal("FEE_AMOUNT", Decimal::ZERO)?,
            fee_currency: env::var("FEE_CURRENCY").ok(),
            fee_per_share: Self::parse_decimal("FEE_PER_SHARE", Decimal::ZERO)?,
            fee_minimum,
            fee_rate: Self::parse_decimal("FEE_RATE", Decimal::ZERO)?,
        })
    }

    /// Assemble the configured fee model as a shared trait object.
    pub fn build_model(&self) -> Arc<dyn FeeModel> {
        let model: Arc<dyn FeeModel> = match self.model {
            FeeModelKind::Constant => match &self.fee_currency {
                Some(currency) => Arc::new(ConstantFeeModel::new(self.fee_amount, currency.clone())),
                None => Arc::new(ConstantFeeModel::in_account_currency(
                    self.fee_amount,
                    self.account_currency.clone(),
                )),
            },
            FeeModelKind::PerShare => {
                let model = PerShareFeeModel::new(
                    self.fee_per_share,
                    self.fee_currency
                        .clone()
                        .unwrap_or_else(|| self.account_currency.clone()),
                );
                match self.fee_minimum {
                    Some(minimum) => Arc::new(model.with_minimum(minimum)),
                    None => Arc::new(model),
                }
            }
            FeeModelKind::Percent => Arc::new(PercentOfNotionalFeeModel::new(
                self.fee_rate,
                self.fee_currency
                    .clone()
                    .unwrap_or_else(|| self.account_currency.clone()),
            )),
        };

        info!(model = %model.description(), "fee model configured");
        model
    }

    fn parse_decimal(key: &str, default: Decimal) -> Result<Decimal> {
        env::var(key)
            .unwrap_or_else(|_| default.to_string())
            .parse::<Decimal>()
            .context(format!("Failed to parse {}", key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::sync::{Mutex, OnceLock};

    // Global lock to prevent race conditions when modifying environment
    // variables in tests
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    fn get_env_lock() -> &'static Mutex<()> {
        ENV_LOCK.get_or_init(|| Mutex::new(()))
    }

    fn clear_fee_env() {
        for key in [
            "ACCOUNT_CURRENCY",
            "FEE_MODEL",
            "FEE_AMOUNT",
            "FEE_CURRENCY",
            "FEE_PER_SHARE",
            "FEE_MINIMUM",
            "FEE_RATE",
        ] {
            unsafe { env::remove_var(key) };
        }
    }

    #[test]
    fn test_fee_model_kind_parsing() {
        assert_eq!(
            "constant".parse::<FeeModelKind>().unwrap(),
            FeeModelKind::Constant
        );
        assert_eq!(
            "PER_SHARE".parse::<FeeModelKind>().unwrap(),
            FeeModelKind::PerShare
        );
        assert!("tiered".parse::<FeeModelKind>().is_err());
    }

    #[test]
    fn test_defaults_when_env_is_empty() {
        let _guard = get_env_lock().lock().unwrap();
        clear_fee_env();

        let config = FeeEnvConfig::from_env().unwrap();
        assert_eq!(config.account_currency, "USD");
        assert_eq!(config.model, FeeModelKind::Constant);
        assert_eq!(config.fee_amount, Decimal::ZERO);
        assert!(config.fee_currency.is_none());
    }

    #[test]
    fn test_constant_model_from_env_uses_account_currency() {
        let _guard = get_env_lock().lock().unwrap();
        clear_fee_env();
        unsafe {
            env::set_var("ACCOUNT_CURRENCY", "EUR");
            env::set_var("FEE_AMOUNT", "-2.50");
        }

        let config = FeeEnvConfig::from_env().unwrap();
        let model = config.build_model();
        assert!(model.description().contains("2.50"));
        assert!(model.description().contains("EUR"));

        clear_fee_env();
    }

    #[test]
    fn test_invalid_fee_amount_is_rejected() {
        let _guard = get_env_lock().lock().unwrap();
        clear_fee_env();
        unsafe { env::set_var("FEE_AMOUNT", "lots") };

        let err = FeeEnvConfig::from_env().unwrap_err();
        assert!(err.to_string().contains("FEE_AMOUNT"));

        clear_fee_env();
    }

    #[test]
    fn test_per_share_model_with_minimum() {
        let _guard = get_env_lock().lock().unwrap();
        clear_fee_env();
        unsafe {
            env::set_var("FEE_MODEL", "per_share");
            env::set_var("FEE_PER_SHARE", "0.005");
            env::set_var("FEE_MINIMUM", "1.00");
        }

        let config = FeeEnvConfig::from_env().unwrap();
        assert_eq!(config.fee_per_share, dec!(0.005));
        assert_eq!(config.fee_minimum, Some(dec!(1.00)));
        let model = config.build_model();
        assert!(model.description().contains("Per Share"));

        clear_fee_env();
    }
}
