//! Budget and routine CLI commands

use crate::config::settings::Settings;
use crate::error::FinfitResult;
use crate::models::{Amount, BudgetLine};
use crate::services::BudgetService;
use crate::storage::Storage;

use super::print_json;

fn print_section(title: &str, lines: &[BudgetLine], currency: &str) {
    println!("\n{}", title);
    println!("{}", "-".repeat(50));
    if lines.is_empty() {
        println!("  (none)");
    }
    for line in lines {
        println!(
            "  {:30} {:>16}",
            line.label,
            line.amount.format_with_currency(currency)
        );
    }
}

/// Show the budget summary
pub fn handle_budget_command(storage: &Storage, settings: &Settings, json: bool) -> FinfitResult<()> {
    let summary = BudgetService::new(storage, settings).summary()?;
    if json {
        return print_json(&summary);
    }

    let currency = settings.default_currency.as_str();
    let money = |amount: Amount| amount.format_with_currency(currency);

    println!("Budget Summary");
    println!("{}", "=".repeat(50));

    print_section("Income", &summary.sheet.income, currency);
    print_section("Fixed expenses", &summary.sheet.fixed_expenses, currency);
    print_section("Active debts", &summary.sheet.active_debts, currency);

    println!("\n{}", "=".repeat(50));
    println!("{:30} {:>18}", "Total income:", money(summary.total_income));
    println!("{:30} {:>18}", "Total expenses:", money(summary.total_expenses));
    println!("{:30} {:>18}", "Active debts:", money(summary.active_debts));
    println!("{:30} {:>18}", "Net savings:", money(summary.net_savings));
    println!();
    println!("{:30} {:>18}", "Latest payroll net:", money(summary.monthly_cfdi_net));
    println!("{:30} {:>18}", "Effective balance:", money(summary.effective_balance));

    if summary.net_savings.is_negative() {
        println!("\n⚠️  Expenses and debts exceed income by {}", money(summary.net_savings.abs()));
    }

    Ok(())
}

/// Print a routine day, or every day for `all`
pub fn handle_routine_command(settings: &Settings, day: &str) -> FinfitResult<()> {
    let markdown = settings.catalog.routine_markdown(day);
    if markdown.is_empty() {
        println!("No routine days are configured.");
    } else {
        print!("{}", markdown);
    }
    Ok(())
}
