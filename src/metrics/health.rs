use crate::metrics::ratios::{debt_to_income_ratio, savings_rate};
use serde::{Deserialize, Serialize};

//points available to each of the four health components
pub const COMPONENT_MAX: f64 = 25.0;

//6 months of expenses is worth the full 25 points
const EMERGENCY_POINTS_PER_MONTH: f64 = 4.17;

//snapshot of a user's finances used for the health score
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialProfile {
    pub net_worth: f64,
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    pub total_debt: f64,
    pub emergency_fund: f64,
}

//the four weighted components behind a health score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthBreakdown {
    pub net_worth: f64,
    pub emergency_fund: f64,
    pub debt: f64,
    pub savings: f64,
    pub score: u8,
}

impl HealthBreakdown {
    pub fn from_profile(profile: &FinancialProfile) -> Self {
        let net_worth = net_worth_component(profile);
        let emergency_fund = emergency_fund_component(profile);
        let debt = debt_component(profile);
        let savings = savings_component(profile);

        let total = net_worth + emergency_fund + debt + savings;
        //NaN only reaches here from non-finite inputs
        let score = if total.is_nan() {
            0
        } else {
            total.clamp(0.0, 100.0).round() as u8
        };

        HealthBreakdown {
            net_worth,
            emergency_fund,
            debt,
            savings,
            score,
        }
    }
}

//composite 0-100 score of net worth, emergency fund, debt burden and savings rate
pub fn health_score(profile: &FinancialProfile) -> u8 {
    HealthBreakdown::from_profile(profile).score
}

fn net_worth_component(profile: &FinancialProfile) -> f64 {
    if profile.net_worth <= 0.0 {
        return 0.0;
    }

    let annual_income = profile.monthly_income * 12.0;
    if annual_income == 0.0 {
        return COMPONENT_MAX;
    }

    COMPONENT_MAX.min((profile.net_worth / annual_income) * 5.0)
}

fn emergency_fund_component(profile: &FinancialProfile) -> f64 {
    if profile.monthly_expenses == 0.0 {
        //no expenses to cover: any fund covers them indefinitely
        return if profile.emergency_fund > 0.0 {
            COMPONENT_MAX
        } else {
            0.0
        };
    }

    let months_covered = profile.emergency_fund / profile.monthly_expenses;
    COMPONENT_MAX.min(months_covered * EMERGENCY_POINTS_PER_MONTH)
}

fn debt_component(profile: &FinancialProfile) -> f64 {
    let dti = debt_to_income_ratio(profile.total_debt, profile.monthly_income);
    (COMPONENT_MAX - dti / 2.0).max(0.0)
}

//negative savings rates pull the total down, the final clamp keeps it at 0
fn savings_component(profile: &FinancialProfile) -> f64 {
    COMPONENT_MAX.min(savings_rate(profile.monthly_income, profile.monthly_expenses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn profile() -> FinancialProfile {
        FinancialProfile {
            net_worth: 60_000.0,
            monthly_income: 5000.0,
            monthly_expenses: 3500.0,
            total_debt: 24_000.0,
            emergency_fund: 10_500.0,
        }
    }

    #[test]
    fn components_for_typical_profile() {
        let breakdown = HealthBreakdown::from_profile(&profile());

        //60k / 60k * 5
        assert_relative_eq!(breakdown.net_worth, 5.0, epsilon = 1e-9);
        //3 months * 4.17
        assert_relative_eq!(breakdown.emergency_fund, 12.51, epsilon = 1e-9);
        //40% dti
        assert_relative_eq!(breakdown.debt, 5.0, epsilon = 1e-9);
        //30% savings rate caps at 25
        assert_relative_eq!(breakdown.savings, 25.0, epsilon = 1e-9);
        assert_eq!(breakdown.score, 48);
    }

    #[test]
    fn perfect_profile_scores_100() {
        let p = FinancialProfile {
            net_worth: 1_000_000.0,
            monthly_income: 10_000.0,
            monthly_expenses: 5000.0,
            total_debt: 0.0,
            emergency_fund: 60_000.0,
        };
        assert_eq!(health_score(&p), 100);
    }

    #[test]
    fn negative_net_worth_adds_nothing() {
        let mut p = profile();
        p.net_worth = -5000.0;
        assert_eq!(HealthBreakdown::from_profile(&p).net_worth, 0.0);
    }

    #[test]
    fn overspending_clamps_to_zero() {
        let p = FinancialProfile {
            net_worth: -10_000.0,
            monthly_income: 1000.0,
            monthly_expenses: 9000.0,
            total_debt: 50_000.0,
            emergency_fund: 0.0,
        };
        let breakdown = HealthBreakdown::from_profile(&p);
        assert!(breakdown.savings < 0.0);
        assert_eq!(breakdown.score, 0);
    }

    #[test]
    fn zero_income_and_expenses_stay_finite() {
        let p = FinancialProfile {
            net_worth: 1000.0,
            monthly_income: 0.0,
            monthly_expenses: 0.0,
            total_debt: 0.0,
            emergency_fund: 0.0,
        };
        let breakdown = HealthBreakdown::from_profile(&p);
        assert_eq!(breakdown.net_worth, COMPONENT_MAX);
        assert_eq!(breakdown.emergency_fund, 0.0);
        assert_eq!(breakdown.debt, COMPONENT_MAX);
        assert_eq!(breakdown.savings, 0.0);
        assert_eq!(breakdown.score, 50);
    }

    #[test]
    fn profile_reads_camel_case_json() {
        let json = r#"{"netWorth":1,"monthlyIncome":2,"monthlyExpenses":3,"totalDebt":4,"emergencyFund":5}"#;
        let p: FinancialProfile = serde_json::from_str(json).unwrap();
        assert_eq!(p.monthly_expenses, 3.0);
        assert_eq!(p.emergency_fund, 5.0);
    }

    #[test]
    fn breakdown_writes_camel_case_json() {
        let json = serde_json::to_value(HealthBreakdown::from_profile(&profile())).unwrap();
        assert!(json.get("netWorth").is_some());
        assert!(json.get("emergencyFund").is_some());
        assert!(json.get("net_worth").is_none());
    }
}
