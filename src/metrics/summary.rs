use crate::categories::SpendingBreakdown;
use crate::config::MetricsConfig;
use crate::data::FinancialSnapshot;
use crate::debt::{total_balance, total_minimum_payment};
use crate::goals::GoalStats;
use crate::metrics::budget::BudgetReport;
use crate::metrics::health::HealthBreakdown;
use crate::metrics::ratios::{
    debt_to_income_ratio, emergency_fund_target, fire_number, savings_rate, years_to_fire,
};
use crate::util::{format_currency, format_percentage};
use prettytable::{Cell, Row, Table};
use serde::{Deserialize, Serialize};

//every derived figure for one snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    pub currency: String,
    pub net_worth: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub monthly_savings: f64,
    pub savings_rate: f64,
    pub total_debt: f64,
    pub total_minimum_payment: f64,
    pub debt_to_income: f64,
    pub emergency_fund: f64,
    pub emergency_fund_target: f64,
    pub fire_number: f64,
    pub years_to_fire: f64,
    pub health: HealthBreakdown,
    pub goals: GoalStats,
    pub budgets: Vec<BudgetReport>,
}

impl FinancialSummary {
    pub fn from_snapshot(snapshot: &FinancialSnapshot, config: &MetricsConfig) -> Self {
        let profile = &snapshot.profile;

        //itemized debts take precedence over the profile total
        let total_debt = if snapshot.debts.is_empty() {
            profile.total_debt
        } else {
            total_balance(&snapshot.debts)
        };

        let monthly_savings = profile.monthly_income - profile.monthly_expenses;
        let spending = SpendingBreakdown::from_transactions(&snapshot.transactions);
        let target = fire_number(profile.monthly_expenses * 12.0, config.withdrawal_rate);

        FinancialSummary {
            currency: config.currency.clone(),
            net_worth: profile.net_worth,
            monthly_income: profile.monthly_income,
            monthly_expenses: profile.monthly_expenses,
            monthly_savings,
            savings_rate: savings_rate(profile.monthly_income, profile.monthly_expenses),
            total_debt,
            total_minimum_payment: total_minimum_payment(&snapshot.debts),
            debt_to_income: debt_to_income_ratio(total_debt, profile.monthly_income),
            emergency_fund: profile.emergency_fund,
            emergency_fund_target: emergency_fund_target(
                profile.monthly_expenses,
                config.emergency_months,
            ),
            fire_number: target,
            //only positive net worth counts toward the portfolio
            years_to_fire: years_to_fire(
                profile.net_worth.max(0.0),
                target,
                monthly_savings,
                config.expected_return,
            ),
            health: HealthBreakdown::from_profile(profile),
            goals: GoalStats::from_goals(&snapshot.goals),
            budgets: snapshot
                .budgets
                .iter()
                .map(|budget| budget.report(&spending))
                .collect(),
        }
    }

    fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency)
    }

    //prints the summary in a formatted table
    pub fn pretty_print_table(&self) {
        let years = if self.years_to_fire.is_finite() {
            format!("{:.1}", self.years_to_fire)
        } else {
            "never at current savings".to_string()
        };

        let mut rows = vec![
            ("Net Worth", self.money(self.net_worth)),
            ("Monthly Income", self.money(self.monthly_income)),
            ("Monthly Expenses", self.money(self.monthly_expenses)),
            ("Monthly Savings", self.money(self.monthly_savings)),
            ("Savings Rate", format_percentage(self.savings_rate, 1)),
            ("Total Debt", self.money(self.total_debt)),
            ("Minimum Payments", self.money(self.total_minimum_payment)),
            ("Debt-to-Income", format_percentage(self.debt_to_income, 1)),
            ("Emergency Fund", self.money(self.emergency_fund)),
            ("Emergency Target", self.money(self.emergency_fund_target)),
            ("FIRE Number", self.money(self.fire_number)),
            ("Years to FIRE", years),
            ("Health Score", format!("{} / 100", self.health.score)),
            (
                "Goals Completed",
                format!("{} of {}", self.goals.completed_goals, self.goals.total_goals),
            ),
            (
                "Average Goal Progress",
                format_percentage(self.goals.average_progress, 1),
            ),
        ];

        for budget in &self.budgets {
            rows.push((
                budget.category.display_name(),
                format!(
                    "{} of {} ({})",
                    self.money(budget.spent),
                    self.money(budget.limit),
                    budget.status
                ),
            ));
        }

        let mut table = Table::new();
        table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
        for (label, value) in rows {
            table.add_row(Row::new(vec![Cell::new(label), Cell::new(&value)]));
        }
        table.printstd();
    }
}
