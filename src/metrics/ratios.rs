//closed-form personal finance ratios
//every function is pure; degenerate inputs return 0 or infinity instead of failing

pub const DEFAULT_WITHDRAWAL_RATE: f64 = 0.04;
pub const DEFAULT_EXPECTED_RETURN: f64 = 0.07;
pub const DEFAULT_EMERGENCY_MONTHS: f64 = 6.0;

//assets minus debts
pub fn net_worth(assets: f64, debts: f64) -> f64 {
    assets - debts
}

//portfolio size that sustains annual_expenses at the given withdrawal rate
//a zero withdrawal rate yields infinity, callers must guard
pub fn fire_number(annual_expenses: f64, withdrawal_rate: f64) -> f64 {
    if withdrawal_rate == 0.0 {
        return f64::INFINITY;
    }
    annual_expenses / withdrawal_rate
}

pub fn emergency_fund_target(monthly_expenses: f64, months: f64) -> f64 {
    monthly_expenses * months
}

//total debt as a percentage of annualized income
pub fn debt_to_income_ratio(total_debt: f64, monthly_income: f64) -> f64 {
    if monthly_income == 0.0 {
        return 0.0;
    }
    (total_debt / (monthly_income * 12.0)) * 100.0
}

//share of income left after expenses, in percent
//negative when spending exceeds income
pub fn savings_rate(monthly_income: f64, monthly_expenses: f64) -> f64 {
    if monthly_income == 0.0 {
        return 0.0;
    }
    ((monthly_income - monthly_expenses) / monthly_income) * 100.0
}

//years until current_savings plus monthly contributions reach fire_number
//inverts the future value of an annuity compounded monthly
pub fn years_to_fire(
    current_savings: f64,
    fire_number: f64,
    monthly_savings: f64,
    expected_return: f64,
) -> f64 {
    //checked before the savings guard: a funded target is 0 years away even
    //when nothing more is being saved
    if current_savings >= fire_number {
        return 0.0;
    }

    if monthly_savings <= 0.0 {
        return f64::INFINITY;
    }

    let remaining = fire_number - current_savings;
    let monthly_return = expected_return / 12.0;

    if monthly_return == 0.0 {
        return remaining / (monthly_savings * 12.0);
    }

    let log_arg = (remaining * monthly_return) / monthly_savings + 1.0;
    let growth = 1.0 + monthly_return;

    //outside the log domain the goal is unreachable
    if log_arg <= 0.0 || growth <= 0.0 || growth == 1.0 {
        return f64::INFINITY;
    }

    let months = log_arg.ln() / growth.ln();
    if months.is_nan() || months < 0.0 {
        return f64::INFINITY;
    }

    months / 12.0
}

//fixed monthly payment that amortizes principal over term_years
pub fn loan_payment(principal: f64, annual_rate: f64, term_years: f64) -> f64 {
    let num_payments = term_years * 12.0;
    if num_payments <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return principal / num_payments;
    }

    let compound = (1.0 + monthly_rate).powf(num_payments);
    principal * monthly_rate * compound / (compound - 1.0)
}
