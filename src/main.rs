use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use finsight::prelude::*;
use prettytable::{Cell, Row, Table};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "finsight")]
#[command(about = "Personal finance metrics: health score, FIRE, debt payoff", long_about = None)]
struct Cli {
    //metrics config file (json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    //debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    //print every metric for a snapshot file
    Summary {
        //path to snapshot json
        #[arg(long)]
        snapshot: PathBuf,

        //print json instead of a table
        #[arg(long)]
        json: bool,
    },

    //compute the 0-100 health score
    Health {
        #[arg(long, allow_hyphen_values = true)]
        net_worth: f64,

        #[arg(long)]
        income: f64,

        #[arg(long)]
        expenses: f64,

        #[arg(long, default_value = "0")]
        debt: f64,

        #[arg(long, default_value = "0")]
        emergency_fund: f64,
    },

    //fire number, years to fire and an optional projection
    Fire {
        #[arg(long)]
        annual_expenses: f64,

        #[arg(long, default_value = "0")]
        current_savings: f64,

        #[arg(long)]
        monthly_savings: f64,

        //annual withdrawal rate (defaults to config)
        #[arg(long)]
        withdrawal_rate: Option<f64>,

        //annual expected return (defaults to config)
        #[arg(long, allow_hyphen_values = true)]
        expected_return: Option<f64>,

        //project savings over this many years
        #[arg(long)]
        years: Option<f64>,
    },

    //order debts and simulate payoff
    Debts {
        //path to debts csv (id,name,balance,interest_rate,minimum_payment)
        #[arg(long)]
        data: PathBuf,

        //payoff strategy (avalanche, snowball)
        #[arg(long)]
        strategy: Option<String>,

        //extra monthly payment on top of minimums
        #[arg(long)]
        extra: Option<f64>,

        //output path for the monthly schedule csv
        #[arg(long)]
        output_schedule_csv: Option<PathBuf>,
    },

    //monthly payment for an amortized loan
    Loan {
        #[arg(long)]
        principal: f64,

        //annual rate as a fraction (eg 0.06)
        #[arg(long)]
        rate: f64,

        #[arg(long)]
        years: f64,
    },

    //categorize transactions and summarize spending
    Categorize {
        //path to transactions csv (date,merchant,description,amount,category)
        #[arg(long)]
        data: PathBuf,

        //output path for categorized transactions csv
        #[arg(long)]
        output_csv: Option<PathBuf>,
    },

    //goal progress for a snapshot file
    Goals {
        #[arg(long)]
        snapshot: PathBuf,
    },

    //write the default config to a file
    InitConfig {
        #[arg(long, default_value = "finsight.json")]
        output: PathBuf,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<MetricsConfig> {
    match path {
        Some(path) => MetricsConfig::from_json_file(path),
        None => Ok(MetricsConfig::default()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Summary { snapshot, json } => run_summary(&snapshot, json, &config)?,
        Commands::Health {
            net_worth,
            income,
            expenses,
            debt,
            emergency_fund,
        } => {
            let profile = FinancialProfile {
                net_worth,
                monthly_income: income,
                monthly_expenses: expenses,
                total_debt: debt,
                emergency_fund,
            };
            validate_profile(&profile).context("Invalid health inputs")?;
            run_health(&profile)
        }
        Commands::Fire {
            annual_expenses,
            current_savings,
            monthly_savings,
            withdrawal_rate,
            expected_return,
            years,
        } => {
            let config = config.with_rates(withdrawal_rate, expected_return)?;
            run_fire(annual_expenses, current_savings, monthly_savings, years, &config)?
        }
        Commands::Debts {
            data,
            strategy,
            extra,
            output_schedule_csv,
        } => run_debts(&data, strategy, extra, output_schedule_csv, &config)?,
        Commands::Loan {
            principal,
            rate,
            years,
        } => run_loan(principal, rate, years, &config)?,
        Commands::Categorize { data, output_csv } => run_categorize(&data, output_csv, &config)?,
        Commands::Goals { snapshot } => run_goals(&snapshot, &config)?,
        Commands::InitConfig { output } => {
            MetricsConfig::default().to_json_file(&output)?;
            println!("Default config written to {:?}", output);
        }
    }

    Ok(())
}

fn run_summary(path: &Path, json: bool, config: &MetricsConfig) -> Result<()> {
    let snapshot = load_snapshot(path)?;
    let summary = FinancialSummary::from_snapshot(&snapshot, config);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Financial Summary");
        println!("=================\n");
        summary.pretty_print_table();
    }

    Ok(())
}

fn run_health(profile: &FinancialProfile) {
    let breakdown = HealthBreakdown::from_profile(profile);

    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Component"), Cell::new("Points")]));
    for (label, points) in [
        ("Net Worth", breakdown.net_worth),
        ("Emergency Fund", breakdown.emergency_fund),
        ("Debt", breakdown.debt),
        ("Savings Rate", breakdown.savings),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(label),
            Cell::new(&format!("{:.2}", points)),
        ]));
    }
    table.add_row(Row::new(vec![
        Cell::new("Health Score"),
        Cell::new(&format!("{} / 100", breakdown.score)),
    ]));
    table.printstd();
}

fn run_fire(
    annual_expenses: f64,
    current_savings: f64,
    monthly_savings: f64,
    years: Option<f64>,
    config: &MetricsConfig,
) -> Result<()> {
    check_amount("annual expenses", annual_expenses)?;
    check_amount("current savings", current_savings)?;
    check_amount("monthly savings", monthly_savings)?;
    if let Some(years) = years {
        check_amount("years", years)?;
    }

    let withdrawal_rate = config.withdrawal_rate;
    let expected_return = config.expected_return;
    let target = fire_number(annual_expenses, withdrawal_rate);
    let years_needed = years_to_fire(current_savings, target, monthly_savings, expected_return);

    println!("FIRE number:   {}", format_currency(target, &config.currency));
    if years_needed.is_finite() {
        println!("Years to FIRE: {:.1}", years_needed);
    } else {
        println!("Years to FIRE: not reachable at current savings");
    }

    if let Some(years) = years {
        let projection = FireProjection::project(&FireInputs {
            current_savings,
            monthly_contribution: monthly_savings,
            expected_return,
            years,
            annual_expenses,
            withdrawal_rate,
        });

        println!(
            "\nIn {} years: {} saved ({} of target), {} per month sustainable",
            years,
            format_currency(projection.projected_savings, &config.currency),
            format_percentage(projection.progress, 1),
            format_currency(projection.monthly_income, &config.currency)
        );
    }

    Ok(())
}

fn run_loan(principal: f64, rate: f64, years: f64, config: &MetricsConfig) -> Result<()> {
    check_amount("principal", principal)?;
    check_amount("rate", rate)?;
    check_amount("years", years)?;
    if years == 0.0 {
        anyhow::bail!("loan term must be positive");
    }

    let payment = loan_payment(principal, rate, years);
    println!(
        "Monthly payment: {}",
        format_currency(payment, &config.currency)
    );
    println!(
        "Total paid:      {}",
        format_currency(payment * years * 12.0, &config.currency)
    );

    Ok(())
}

fn run_debts(
    data: &Path,
    strategy: Option<String>,
    extra: Option<f64>,
    output_schedule_csv: Option<PathBuf>,
    config: &MetricsConfig,
) -> Result<()> {
    let debts = load_debts_csv(data).context(format!("Failed to load debts from {:?}", data))?;

    if debts.is_empty() {
        anyhow::bail!("No debts found in {:?}", data);
    }

    let strategy = match strategy {
        Some(name) => Some(
            PayoffStrategy::parse(&name)
                .ok_or_else(|| anyhow::anyhow!("Unknown strategy: {}", name))?,
        ),
        None => None,
    };
    let config = config.with_payoff(strategy, extra)?;
    let payoff = config.payoff.clone();

    let ordered = payoff.strategy.order(&debts);

    println!("Strategy: {}", payoff.strategy);
    println!(
        "Extra payment: {}\n",
        format_currency(payoff.extra_payment, &config.currency)
    );

    let plan = simulate_payoff(&debts, payoff);

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Priority"),
        Cell::new("Debt"),
        Cell::new("Balance"),
        Cell::new("Rate"),
        Cell::new("Minimum"),
        Cell::new("Paid Off"),
    ]));
    for (item, payoff) in ordered.iter().zip(plan.debts.iter()) {
        let paid_off = match payoff.paid_off_month {
            Some(month) => format!("month {}", month),
            None => "not within horizon".to_string(),
        };
        table.add_row(Row::new(vec![
            Cell::new(&item.priority.to_string()),
            Cell::new(item.debt.label()),
            Cell::new(&format_currency(item.debt.balance, &config.currency)),
            Cell::new(&format_percentage(item.debt.interest_rate, 2)),
            Cell::new(&format_currency(item.debt.minimum_payment, &config.currency)),
            Cell::new(&paid_off),
        ]));
    }
    table.printstd();

    println!(
        "\nMonths: {}  Total paid: {}  Interest: {}",
        plan.months,
        format_currency(plan.total_paid, &config.currency),
        format_currency(plan.total_interest, &config.currency)
    );
    if !plan.paid_off {
        println!("Debts are not paid off within {} months", plan.months);
    }

    if let Some(path) = output_schedule_csv {
        save_schedule_csv(&plan, &path)?;
        println!("\nSchedule saved to {:?}", path);
    }

    Ok(())
}

fn save_schedule_csv(plan: &PayoffPlan, path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .context(format!("Failed to create schedule file: {:?}", path))?;

    for month in &plan.schedule {
        writer.serialize(month)?;
    }
    writer.flush()?;

    Ok(())
}

fn run_categorize(data: &Path, output_csv: Option<PathBuf>, config: &MetricsConfig) -> Result<()> {
    let transactions = load_transactions_csv(data)
        .context(format!("Failed to load transactions from {:?}", data))?;
    let categorized = categorize_all(&transactions);
    let breakdown = SpendingBreakdown::from_transactions(&categorized);

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Category"),
        Cell::new("Transactions"),
        Cell::new("Spent"),
        Cell::new("Share"),
    ]));
    for (category, spend) in breakdown.top(breakdown.categories.len()) {
        table.add_row(Row::new(vec![
            Cell::new(category.display_name()),
            Cell::new(&spend.count.to_string()),
            Cell::new(&format_currency(spend.total, &config.currency)),
            Cell::new(&format_percentage(spend.share, 1)),
        ]));
    }
    table.printstd();

    println!(
        "\nIncome: {}  Spent: {}",
        format_currency(breakdown.total_income, &config.currency),
        format_currency(breakdown.total_spent, &config.currency)
    );

    if let Some(path) = output_csv {
        let mut writer = csv::Writer::from_path(&path)
            .context(format!("Failed to create output file: {:?}", path))?;
        writer.write_record(["date", "merchant", "description", "amount", "category"])?;
        for t in &categorized {
            writer.write_record([
                format_date(t.date),
                t.merchant.clone(),
                t.description.clone(),
                t.amount.to_string(),
                t.resolved_category().display_name().to_string(),
            ])?;
        }
        writer.flush()?;
        println!("Categorized transactions saved to {:?}", path);
    }

    Ok(())
}

fn run_goals(path: &Path, config: &MetricsConfig) -> Result<()> {
    let snapshot = load_snapshot(path)?;

    if snapshot.goals.is_empty() {
        println!("No goals in {:?}", path);
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("Goal"),
        Cell::new("Current"),
        Cell::new("Target"),
        Cell::new("Progress"),
    ]));
    for goal in &snapshot.goals {
        let name = if goal.name.is_empty() { &goal.id } else { &goal.name };
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&format_currency(goal.current_amount, &config.currency)),
            Cell::new(&format_currency(goal.target_amount, &config.currency)),
            Cell::new(&format_percentage(goal.progress(), 1)),
        ]));
    }
    table.printstd();

    let stats = GoalStats::from_goals(&snapshot.goals);
    println!(
        "\n{} of {} goals completed, average progress {}",
        stats.completed_goals,
        stats.total_goals,
        format_percentage(stats.average_progress, 1)
    );

    Ok(())
}
