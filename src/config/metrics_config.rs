use crate::debt::{PayoffConfig, PayoffStrategy};
use crate::metrics::ratios::{
    DEFAULT_EMERGENCY_MONTHS, DEFAULT_EXPECTED_RETURN, DEFAULT_WITHDRAWAL_RATE,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("withdrawal rate must be in (0, 1], got {0}")]
    WithdrawalRate(f64),
    #[error("expected return must be finite and above -100%, got {0}")]
    ExpectedReturn(f64),
    #[error("emergency fund months must be positive, got {0}")]
    EmergencyMonths(f64),
    #[error("extra payment must not be negative, got {0}")]
    ExtraPayment(f64),
    #[error("payoff horizon must be at least one month")]
    MaxMonths,
}

//assumptions used when deriving metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricsConfig {
    //display currency code
    pub currency: String,

    //annual, as fractions
    pub withdrawal_rate: f64,
    pub expected_return: f64,

    pub emergency_months: f64,

    //debt payoff simulation
    pub payoff: PayoffConfig,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        MetricsConfig {
            currency: "USD".to_string(),
            withdrawal_rate: DEFAULT_WITHDRAWAL_RATE,
            expected_return: DEFAULT_EXPECTED_RETURN,
            emergency_months: DEFAULT_EMERGENCY_MONTHS,
            payoff: PayoffConfig::default(),
        }
    }
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.withdrawal_rate > 0.0 && self.withdrawal_rate <= 1.0) {
            return Err(ConfigError::WithdrawalRate(self.withdrawal_rate));
        }
        if !self.expected_return.is_finite() || self.expected_return <= -1.0 {
            return Err(ConfigError::ExpectedReturn(self.expected_return));
        }
        if !(self.emergency_months > 0.0 && self.emergency_months.is_finite()) {
            return Err(ConfigError::EmergencyMonths(self.emergency_months));
        }
        if !(self.payoff.extra_payment >= 0.0 && self.payoff.extra_payment.is_finite()) {
            return Err(ConfigError::ExtraPayment(self.payoff.extra_payment));
        }
        if self.payoff.max_months == 0 {
            return Err(ConfigError::MaxMonths);
        }
        Ok(())
    }

    //command line overrides of the FIRE assumptions, checked like a loaded file
    pub fn with_rates(
        &self,
        withdrawal_rate: Option<f64>,
        expected_return: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        if let Some(rate) = withdrawal_rate {
            config.withdrawal_rate = rate;
        }
        if let Some(rate) = expected_return {
            config.expected_return = rate;
        }
        config.validate()?;
        Ok(config)
    }

    //command line overrides of the payoff settings, checked like a loaded file
    pub fn with_payoff(
        &self,
        strategy: Option<PayoffStrategy>,
        extra_payment: Option<f64>,
    ) -> Result<Self, ConfigError> {
        let mut config = self.clone();
        if let Some(strategy) = strategy {
            config.payoff.strategy = strategy;
        }
        if let Some(extra) = extra_payment {
            config.payoff.extra_payment = extra;
        }
        config.validate()?;
        Ok(config)
    }

    //load configuration from a JSON file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {:?}", path))?;
        let config: MetricsConfig = serde_json::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", path))?;
        config.validate()?;
        debug!(?path, "loaded metrics config");
        Ok(config)
    }

    //save configuration to a JSON file
    pub fn to_json_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path.as_ref(), json)
            .context(format!("Failed to write config file: {:?}", path.as_ref()))?;
        Ok(())
    }
}
