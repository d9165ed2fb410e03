use crate::debt::model::{total_balance, Debt};
use crate::debt::ordering::{PayoffStrategy, PrioritizedDebt};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

//balances below half a cent count as paid
const PAID_EPSILON: f64 = 0.005;

//configuration for a payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PayoffConfig {
    pub strategy: PayoffStrategy,
    //paid on top of the minimums, always to the first open debt
    pub extra_payment: f64,
    pub max_months: u32,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        PayoffConfig {
            strategy: PayoffStrategy::Avalanche,
            extra_payment: 0.0,
            max_months: 360,
        }
    }
}

//one simulated month
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffMonth {
    pub month: u32,
    pub total_balance: f64,
    pub total_paid: f64,
    pub interest: f64,
}

//when each debt reached zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoff {
    pub id: String,
    pub priority: usize,
    pub paid_off_month: Option<u32>,
}

//result of a payoff simulation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffPlan {
    pub strategy: PayoffStrategy,
    pub months: u32,
    pub total_paid: f64,
    pub total_interest: f64,
    pub paid_off: bool,
    pub schedule: Vec<PayoffMonth>,
    pub debts: Vec<DebtPayoff>,
}

struct OpenDebt {
    ordered: PrioritizedDebt,
    balance: f64,
    paid_off_month: Option<u32>,
}

//month-by-month payoff simulator
pub struct PayoffSimulator {
    config: PayoffConfig,
    debts: Vec<OpenDebt>,
    starting_balance: f64,
}

impl PayoffSimulator {
    pub fn new(config: PayoffConfig, debts: &[Debt]) -> Self {
        let starting_balance = total_balance(debts);
        let debts = config
            .strategy
            .order(debts)
            .into_iter()
            .map(|ordered| OpenDebt {
                balance: ordered.debt.balance,
                paid_off_month: if ordered.debt.balance <= PAID_EPSILON {
                    Some(0)
                } else {
                    None
                },
                ordered,
            })
            .collect();

        PayoffSimulator {
            config,
            debts,
            starting_balance,
        }
    }

    //runs the simulation to completion or the month cap
    pub fn run(mut self) -> PayoffPlan {
        let mut months = 0;
        let mut total_paid = 0.0;
        let mut schedule = Vec::new();

        while self.has_open_debt() && months < self.config.max_months {
            months += 1;

            //minimum payments
            for debt in self.debts.iter_mut().filter(|d| d.balance > 0.0) {
                let payment = debt.ordered.debt.minimum_payment.min(debt.balance);
                debt.balance -= payment;
                total_paid += payment;
            }

            //extra payment goes to the first open debt in priority order
            if self.config.extra_payment > 0.0 {
                if let Some(target) = self.debts.iter_mut().find(|d| d.balance > PAID_EPSILON) {
                    let payment = self.config.extra_payment.min(target.balance);
                    target.balance -= payment;
                    total_paid += payment;
                }
            }

            //settle and accrue monthly interest on what is left
            let mut interest = 0.0;
            for debt in self.debts.iter_mut() {
                if debt.balance <= PAID_EPSILON {
                    debt.balance = 0.0;
                    if debt.paid_off_month.is_none() {
                        debug!(id = %debt.ordered.debt.id, month = months, "debt paid off");
                        debt.paid_off_month = Some(months);
                    }
                    continue;
                }

                let accrued = debt.balance * debt.ordered.debt.interest_rate / 100.0 / 12.0;
                debt.balance += accrued;
                interest += accrued;
            }

            schedule.push(PayoffMonth {
                month: months,
                total_balance: self.debts.iter().map(|d| d.balance).sum(),
                total_paid,
                interest,
            });
        }

        let paid_off = !self.has_open_debt();
        if !paid_off {
            warn!(
                max_months = self.config.max_months,
                "debts not paid off within the simulation horizon"
            );
        }

        //interest is whatever was paid beyond the original principal
        let remaining: f64 = self.debts.iter().map(|d| d.balance).sum();
        let total_interest = total_paid + remaining - self.starting_balance;

        PayoffPlan {
            strategy: self.config.strategy,
            months,
            total_paid,
            total_interest,
            paid_off,
            schedule,
            debts: self
                .debts
                .into_iter()
                .map(|d| DebtPayoff {
                    id: d.ordered.debt.id,
                    priority: d.ordered.priority,
                    paid_off_month: d.paid_off_month,
                })
                .collect(),
        }
    }

    fn has_open_debt(&self) -> bool {
        self.debts.iter().any(|d| d.balance > PAID_EPSILON)
    }
}

//convenience wrapper around PayoffSimulator
pub fn simulate_payoff(debts: &[Debt], config: PayoffConfig) -> PayoffPlan {
    PayoffSimulator::new(config, debts).run()
}
