use crate::metrics::ratios::fire_number;
use serde::{Deserialize, Serialize};

//inputs for projecting savings forward to a retirement horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireInputs {
    pub current_savings: f64,
    pub monthly_contribution: f64,
    //annual, as a fraction
    pub expected_return: f64,
    pub years: f64,
    pub annual_expenses: f64,
    //annual, as a fraction
    pub withdrawal_rate: f64,
}

//projected outcome at the end of the horizon
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FireProjection {
    pub fire_number: f64,
    pub projected_savings: f64,
    //percent of the fire number reached, capped at 100
    pub progress: f64,
    //income the projected savings sustain at the withdrawal rate
    pub monthly_income: f64,
}

//future value of a lump sum plus level monthly contributions
pub fn future_value(present: f64, monthly_contribution: f64, annual_return: f64, years: f64) -> f64 {
    let months = (years * 12.0).max(0.0);
    let monthly_return = annual_return / 12.0;

    if monthly_return == 0.0 {
        return present + monthly_contribution * months;
    }

    let growth = (1.0 + monthly_return).powf(months);
    present * growth + monthly_contribution * ((growth - 1.0) / monthly_return)
}

impl FireProjection {
    pub fn project(inputs: &FireInputs) -> Self {
        let target = fire_number(inputs.annual_expenses, inputs.withdrawal_rate);
        let projected_savings = future_value(
            inputs.current_savings,
            inputs.monthly_contribution,
            inputs.expected_return,
            inputs.years,
        );

        let progress = if target.is_finite() && target > 0.0 {
            ((projected_savings / target) * 100.0).clamp(0.0, 100.0)
        } else if target == 0.0 {
            //nothing to fund
            100.0
        } else {
            0.0
        };

        FireProjection {
            fire_number: target,
            projected_savings,
            progress,
            monthly_income: projected_savings * inputs.withdrawal_rate / 12.0,
        }
    }
}
