use finsight::prelude::*;
use proptest::prelude::*;

fn debt_strategy() -> impl Strategy<Value = Vec<Debt>> {
    prop::collection::vec((0u32..100_000, 0u32..3000, 0u32..1000), 0..12).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (balance, rate_bp, payment))| {
                Debt::new_unchecked(
                    format!("d{}", i),
                    balance as f64,
                    rate_bp as f64 / 100.0,
                    payment as f64,
                )
            })
            .collect()
    })
}

fn assert_priorities(ordered: &[PrioritizedDebt], input: &[Debt]) -> Result<(), TestCaseError> {
    prop_assert_eq!(ordered.len(), input.len());

    let priorities: Vec<usize> = ordered.iter().map(|p| p.priority).collect();
    let expected: Vec<usize> = (1..=input.len()).collect();
    prop_assert_eq!(priorities, expected);

    let mut in_ids: Vec<&str> = input.iter().map(|d| d.id.as_str()).collect();
    let mut out_ids: Vec<&str> = ordered.iter().map(|p| p.debt.id.as_str()).collect();
    in_ids.sort();
    out_ids.sort();
    prop_assert_eq!(in_ids, out_ids);
    Ok(())
}

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(256))]

    #[test]
    fn prop_net_worth_is_difference(a in -1e9f64..1e9, d in -1e9f64..1e9) {
        prop_assert_eq!(net_worth(a, d), a - d);
    }

    #[test]
    fn prop_zero_income_guards(x in -1e9f64..1e9) {
        prop_assert_eq!(debt_to_income_ratio(x, 0.0), 0.0);
        prop_assert_eq!(savings_rate(0.0, x), 0.0);
    }

    #[test]
    fn prop_health_score_in_range(
        net_worth in -1e7f64..1e7,
        income in 0f64..1e6,
        expenses in 0f64..1e6,
        debt in 0f64..1e7,
        fund in 0f64..1e7,
    ) {
        let profile = FinancialProfile {
            net_worth,
            monthly_income: income,
            monthly_expenses: expenses,
            total_debt: debt,
            emergency_fund: fund,
        };
        let score = health_score(&profile);
        prop_assert!(score <= 100);
        //pure: same input, same output
        prop_assert_eq!(score, health_score(&profile));
    }

    #[test]
    fn prop_avalanche_sorted_by_rate(debts in debt_strategy()) {
        let ordered = debt_avalanche(&debts);
        assert_priorities(&ordered, &debts)?;
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].debt.interest_rate >= pair[1].debt.interest_rate);
        }
        prop_assert_eq!(ordered, debt_avalanche(&debts));
    }

    #[test]
    fn prop_snowball_sorted_by_balance(debts in debt_strategy()) {
        let ordered = debt_snowball(&debts);
        assert_priorities(&ordered, &debts)?;
        for pair in ordered.windows(2) {
            prop_assert!(pair[0].debt.balance <= pair[1].debt.balance);
        }
    }

    #[test]
    fn prop_goal_progress_clamped(current in 0f64..1e7, target in 0f64..1e7) {
        let progress = goal_progress(current, target);
        prop_assert!((0.0..=100.0).contains(&progress));
    }

    #[test]
    fn prop_years_to_fire_never_nan(
        savings in 0f64..2e6,
        target in 1f64..2e6,
        monthly in -5e3f64..5e4,
        ret in -0.5f64..0.2,
    ) {
        let years = years_to_fire(savings, target, monthly, ret);
        prop_assert!(!years.is_nan());
        prop_assert!(years >= 0.0);
        prop_assert_eq!(years.to_bits(), years_to_fire(savings, target, monthly, ret).to_bits());
    }

    #[test]
    fn prop_payoff_terminates_within_horizon(debts in debt_strategy(), extra in 0f64..2000.0) {
        let plan = simulate_payoff(&debts, PayoffConfig {
            strategy: PayoffStrategy::Avalanche,
            extra_payment: extra,
            max_months: 120,
        });
        prop_assert!(plan.months <= 120);
        prop_assert_eq!(plan.schedule.len() as u32, plan.months);
        prop_assert!(plan.total_paid.is_finite());
    }
}
