use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DebtError {
    #[error("Debt id must not be empty")]
    EmptyId,
    #[error("Debt {id}: negative balance {balance}")]
    NegativeBalance { id: String, balance: f64 },
    #[error("Debt {id}: negative interest rate {rate}")]
    NegativeRate { id: String, rate: f64 },
    #[error("Debt {id}: negative minimum payment {payment}")]
    NegativePayment { id: String, payment: f64 },
    #[error("Debt {id}: non-finite amount")]
    NonFinite { id: String },
}

//a single outstanding debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub balance: f64,
    //annual interest rate
    pub interest_rate: f64,
    pub minimum_payment: f64,
}

impl Debt {
    //creates a new Debt with validation
    pub fn new(
        id: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Result<Self, DebtError> {
        let debt = Debt::new_unchecked(id, balance, interest_rate, minimum_payment);
        debt.validate()?;
        Ok(debt)
    }

    //creates a Debt without validation
    pub fn new_unchecked(
        id: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Debt {
            id: id.into(),
            name: None,
            balance,
            interest_rate,
            minimum_payment,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    //name for display, falls back to the id
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    pub fn validate(&self) -> Result<(), DebtError> {
        if self.id.trim().is_empty() {
            return Err(DebtError::EmptyId);
        }

        if !(self.balance.is_finite()
            && self.interest_rate.is_finite()
            && self.minimum_payment.is_finite())
        {
            return Err(DebtError::NonFinite {
                id: self.id.clone(),
            });
        }

        if self.balance < 0.0 {
            return Err(DebtError::NegativeBalance {
                id: self.id.clone(),
                balance: self.balance,
            });
        }

        if self.interest_rate < 0.0 {
            return Err(DebtError::NegativeRate {
                id: self.id.clone(),
                rate: self.interest_rate,
            });
        }

        if self.minimum_payment < 0.0 {
            return Err(DebtError::NegativePayment {
                id: self.id.clone(),
                payment: self.minimum_payment,
            });
        }

        Ok(())
    }
}

//sum of outstanding balances
pub fn total_balance(debts: &[Debt]) -> f64 {
    debts.iter().map(|d| d.balance).sum()
}

//sum of required monthly payments
pub fn total_minimum_payment(debts: &[Debt]) -> f64 {
    debts.iter().map(|d| d.minimum_payment).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_bad_amounts() {
        assert!(Debt::new("card", 5000.0, 18.5, 100.0).is_ok());
        assert_eq!(Debt::new(" ", 1.0, 1.0, 1.0), Err(DebtError::EmptyId));
        assert!(matches!(
            Debt::new("card", -1.0, 1.0, 1.0),
            Err(DebtError::NegativeBalance { .. })
        ));
        assert!(matches!(
            Debt::new("card", 1.0, -0.5, 1.0),
            Err(DebtError::NegativeRate { .. })
        ));
        assert!(matches!(
            Debt::new("card", 1.0, 1.0, -3.0),
            Err(DebtError::NegativePayment { .. })
        ));
        assert!(matches!(
            Debt::new("card", f64::NAN, 1.0, 1.0),
            Err(DebtError::NonFinite { .. })
        ));
    }

    #[test]
    fn label_falls_back_to_id() {
        let debt = Debt::new_unchecked("d1", 1.0, 1.0, 1.0);
        assert_eq!(debt.label(), "d1");
        assert_eq!(debt.with_name("Car Loan").label(), "Car Loan");
    }

    #[test]
    fn totals() {
        let debts = vec![
            Debt::new_unchecked("a", 5000.0, 18.5, 100.0),
            Debt::new_unchecked("b", 25000.0, 6.5, 250.0),
        ];
        assert_eq!(total_balance(&debts), 30000.0);
        assert_eq!(total_minimum_payment(&debts), 350.0);
    }
}
