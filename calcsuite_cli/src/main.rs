//! # CalcSuite CLI
//!
//! Terminal front end for the five calculators. This is the thin "UI
//! collaborator" over calcsuite_core: it collects raw text, hands it to
//! the per-tool forms, and renders the results and history the core
//! returns. All state lives in the core.
//!
//! History is persisted under `CALCSUITE_HISTORY_DIR` (default
//! `.calcsuite_history` in the working directory).

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use calcsuite_core::calculations::calorie::{ActivityLevel, Gender};
use calcsuite_core::calculations::currency::Currency;
use calcsuite_core::calculations::UnitSystem;
use calcsuite_core::format;
use calcsuite_core::forms::{BmiForm, CalorieForm, CompoundForm, CurrencyForm, LoanForm};
use calcsuite_core::history::{CalculatorKind, FileStorage, HistoryStore, Storage};

/// Prompt for a line of input, falling back to `default` on blank or EOF.
fn prompt(label: &str, default: &str) -> String {
    if default.is_empty() {
        print!("{}: ", label);
    } else {
        print!("{} [{}]: ", label, default);
    }
    if io::stdout().flush().is_err() {
        return default.to_string();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default.to_string();
    }

    let trimmed = input.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Yes/no confirmation, defaulting to no.
fn confirm(label: &str) -> bool {
    let answer = prompt(&format!("{} (y/N)", label), "n");
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

fn prompt_unit() -> UnitSystem {
    match prompt("Units (metric/imperial)", "metric").to_lowercase().as_str() {
        "imperial" | "i" => UnitSystem::Imperial,
        _ => UnitSystem::Metric,
    }
}

fn print_banner(title: &str) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  {}", title);
    println!("═══════════════════════════════════════");
}

fn print_no_result() {
    println!();
    println!("Invalid input - no result. Nothing was added to history.");
}

fn run_bmi<S: Storage>(store: &mut HistoryStore<S>) {
    let mut form = BmiForm {
        unit: prompt_unit(),
        ..Default::default()
    };

    match form.unit {
        UnitSystem::Metric => {
            form.weight = prompt("Weight (kg)", "");
            form.height = prompt("Height (cm)", "");
        }
        UnitSystem::Imperial => {
            form.weight = prompt("Weight (lbs)", "");
            form.feet = prompt("Height (ft)", "");
            form.inches = prompt("Height (in)", "0");
        }
    }

    match form.calculate(store) {
        Some(result) => {
            print_banner("BMI RESULT");
            println!();
            println!("  BMI:      {:.2}", result.bmi);
            println!("  Category: {}", result.category.label());
        }
        None => print_no_result(),
    }
}

fn run_loan<S: Storage>(store: &mut HistoryStore<S>) {
    let defaults = LoanForm::default();
    let form = LoanForm {
        amount: prompt("Loan amount ($)", &defaults.amount),
        interest: prompt("Annual interest rate (%)", &defaults.interest),
        term: prompt("Loan term (years)", &defaults.term),
    };

    match form.calculate(store) {
        Some(result) => {
            print_banner("LOAN RESULT");
            println!();
            println!("  Monthly payment: {}", format::usd(result.monthly_payment));
            println!("  Total payment:   {}", format::usd(result.total_payment));
            println!("  Total interest:  {}", format::usd(result.total_interest));
        }
        None => print_no_result(),
    }
}

fn run_compound<S: Storage>(store: &mut HistoryStore<S>) {
    let defaults = CompoundForm::default();
    let form = CompoundForm {
        principal: prompt("Principal amount ($)", &defaults.principal),
        rate: prompt("Annual interest rate (%)", &defaults.rate),
        years: prompt("Years", &defaults.years),
        compounds: prompt("Compounds per year", &defaults.compounds),
    };

    match form.calculate(store) {
        Some(result) => {
            print_banner("COMPOUND INTEREST RESULT");
            println!();
            println!("  Future value:   {}", format::usd(result.future_value));
            println!("  Total interest: {}", format::usd(result.total_interest));
        }
        None => print_no_result(),
    }
}

fn run_calorie<S: Storage>(store: &mut HistoryStore<S>) {
    let defaults = CalorieForm::default();
    let mut form = CalorieForm {
        unit: prompt_unit(),
        age: prompt("Age", &defaults.age),
        gender: match prompt("Gender (male/female)", "male").to_lowercase().as_str() {
            "female" | "f" => Gender::Female,
            _ => Gender::Male,
        },
        ..Default::default()
    };

    match form.unit {
        UnitSystem::Metric => {
            form.weight = prompt("Weight (kg)", &defaults.weight);
            form.height = prompt("Height (cm)", &defaults.height);
        }
        UnitSystem::Imperial => {
            form.weight = prompt("Weight (lbs)", "154");
            form.feet = prompt("Height (ft)", &defaults.feet);
            form.inches = prompt("Height (in)", &defaults.inches);
        }
    }

    println!();
    println!("Activity levels:");
    for level in ActivityLevel::ALL {
        println!("  {:<6} {}", level.multiplier(), level.label());
    }
    form.activity_level = prompt("Activity multiplier", &defaults.activity_level);

    match form.calculate(store) {
        Some(result) => {
            print_banner("CALORIE RESULT");
            println!();
            println!("  BMR:            {:.0} kcal/day", result.bmr);
            println!("  Daily calories: {:.0} kcal/day", result.calories);
        }
        None => print_no_result(),
    }
}

fn run_currency<S: Storage>(store: &mut HistoryStore<S>) {
    println!();
    println!("Currencies:");
    for currency in Currency::ALL {
        println!("  {} - {}", currency.code(), currency.name());
    }
    println!();

    let defaults = CurrencyForm::default();
    let from = Currency::from_str(&prompt("From currency", defaults.from.code()));
    let to = Currency::from_str(&prompt("To currency", defaults.to.code()));

    let (from, to) = match (from, to) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => {
            println!();
            println!("{}", e);
            return;
        }
    };

    let form = CurrencyForm {
        amount: prompt("Amount", &defaults.amount),
        from,
        to,
    };

    match form.calculate(store) {
        Some(result) => {
            print_banner("CONVERSION RESULT");
            println!();
            println!(
                "  {} = {}",
                format::currency_display(form.amount.trim().parse().unwrap_or(0.0), from),
                format::currency_display(result.converted, to)
            );
            println!(
                "  Rate: 1 {} = {:.4} {}",
                from.code(),
                result.unit_rate,
                to.code()
            );
        }
        None => print_no_result(),
    }
}

fn show_history<S: Storage>(store: &mut HistoryStore<S>) {
    let all = store.load_all();

    print_banner("CALCULATION HISTORY");
    println!();
    if all.is_empty() {
        println!("  No calculations yet.");
        return;
    }

    for entry in &all.bmi {
        println!(
            "  [BMI] {}  BMI {} ({}, {})",
            entry.timestamp, entry.record.bmi, entry.record.weight, entry.record.height
        );
    }
    for entry in &all.loan {
        println!(
            "  [Loan] {}  {}/mo, {} at {} for {}",
            entry.timestamp,
            entry.record.monthly_payment,
            entry.record.amount,
            entry.record.interest,
            entry.record.term
        );
    }
    for entry in &all.compound_interest {
        println!(
            "  [Interest] {}  {} from {} at {} over {}",
            entry.timestamp,
            entry.record.future_value,
            entry.record.principal,
            entry.record.rate,
            entry.record.years
        );
    }
    for entry in &all.calorie {
        println!(
            "  [Calorie] {}  {} kcal/day (BMR {})",
            entry.timestamp, entry.record.calories, entry.record.bmr
        );
    }
    for entry in &all.currency {
        println!(
            "  [Currency] {}  {} {} -> {} {}",
            entry.timestamp,
            entry.record.from_amount,
            entry.record.from_currency,
            entry.record.to_amount,
            entry.record.to_currency
        );
    }

    println!();
    println!("  {} entries total", all.total_entries());
    println!();
    println!("  c) clear one tool's history   C) clear ALL history   anything else: back");

    match prompt("History action", "").as_str() {
        "c" => {
            for (i, kind) in CalculatorKind::ALL.iter().enumerate() {
                println!("  {}) {}", i + 1, kind.label());
            }
            let choice = prompt("Which history", "");
            if let Ok(n) = choice.parse::<usize>() {
                if let Some(kind) = CalculatorKind::ALL.get(n.wrapping_sub(1)) {
                    store.clear(*kind);
                    println!("{} history cleared.", kind.label());
                }
            }
        }
        "C" => {
            // Destructive and global, so gate behind explicit confirmation
            if confirm("Clear ALL calculation history? This cannot be undone") {
                store.clear_all();
                println!("All history cleared.");
            }
        }
        _ => {}
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let history_dir = std::env::var("CALCSUITE_HISTORY_DIR")
        .unwrap_or_else(|_| ".calcsuite_history".to_string());
    let mut store = HistoryStore::new(FileStorage::new(history_dir));

    println!("CalcSuite - Multi-Tool Calculator");
    println!("=================================");

    loop {
        println!();
        println!("  1) BMI");
        println!("  2) Loan");
        println!("  3) Compound Interest");
        println!("  4) Calorie / BMR");
        println!("  5) Currency");
        println!("  6) History");
        println!("  q) Quit");

        match prompt("Choose a tool", "q").as_str() {
            "1" => run_bmi(&mut store),
            "2" => run_loan(&mut store),
            "3" => run_compound(&mut store),
            "4" => run_calorie(&mut store),
            "5" => run_currency(&mut store),
            "6" => show_history(&mut store),
            "q" | "Q" => break,
            other => println!("Unknown option: {}", other),
        }
    }
}
