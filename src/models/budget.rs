//! Budget sheet model
//!
//! A lightweight markdown budget: headed bullet lists of `- Label: $1,234 MXN`
//! under `## Income`, `## Fixed expenses` and `## Active debts`.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::amount::Amount;

/// Budget used when no budget file has been written yet
pub const DEFAULT_BUDGET_MD: &str = "## Income
- Salary: $8,994.54 MXN

## Fixed expenses
- Rent: $3,000 MXN
- Food & Transport: $1,500 MXN
- Motorcycle: $1,132 MXN
- Bike parts: $110 MXN
- Credit card: $310 MXN
- Bank loan: $2,182 MXN
- Gym: $200 MXN
- Electricity: $240 MXN

## Active debts
- Personal loan: $200 MXN
";

/// One labelled amount in a budget section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetLine {
    pub label: String,
    pub amount: Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Income,
    FixedExpenses,
    ActiveDebts,
}

impl Section {
    fn from_heading(line: &str) -> Option<Self> {
        let lower = line.to_lowercase();
        if lower.starts_with("## income") {
            Some(Self::Income)
        } else if lower.starts_with("## fixed") {
            Some(Self::FixedExpenses)
        } else if lower.starts_with("## active") {
            Some(Self::ActiveDebts)
        } else {
            None
        }
    }
}

/// Parsed budget markdown
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BudgetSheet {
    pub income: Vec<BudgetLine>,
    pub fixed_expenses: Vec<BudgetLine>,
    pub active_debts: Vec<BudgetLine>,
}

impl BudgetSheet {
    /// Parse budget markdown
    ///
    /// Bullets before the first recognized heading are ignored. A bullet
    /// without a `:` or without a number counts as zero.
    pub fn parse(markdown: &str) -> Self {
        let mut sheet = Self::default();
        let mut current: Option<Section> = None;

        for line in markdown.lines().map(str::trim) {
            if let Some(section) = Section::from_heading(line) {
                current = Some(section);
                continue;
            }
            let (Some(section), Some(body)) = (current, line.strip_prefix('-')) else {
                continue;
            };

            let (label, amount_text) = body.split_once(':').unwrap_or((body, "0"));
            let line = BudgetLine {
                label: label.trim().to_string(),
                amount: extract_amount(amount_text),
            };
            match section {
                Section::Income => sheet.income.push(line),
                Section::FixedExpenses => sheet.fixed_expenses.push(line),
                Section::ActiveDebts => sheet.active_debts.push(line),
            }
        }

        sheet
    }

    pub fn total_income(&self) -> Amount {
        self.income.iter().map(|l| l.amount).sum()
    }

    pub fn total_expenses(&self) -> Amount {
        self.fixed_expenses.iter().map(|l| l.amount).sum()
    }

    pub fn total_debts(&self) -> Amount {
        self.active_debts.iter().map(|l| l.amount).sum()
    }
}

static AMOUNT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[-+]?\d+[\d.,]*").expect("valid amount regex"));

/// First signed number in `text`, ignoring thousands separators
fn extract_amount(text: &str) -> Amount {
    AMOUNT_RE
        .find(text)
        .map(|m| m.as_str().replace(',', ""))
        .map(|number| Amount::parse_or_zero(Some(number.trim_end_matches('.'))))
        .unwrap_or_else(Amount::zero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_amount() {
        assert_eq!(extract_amount(" $8,994.54 MXN").value(), 8994.54);
        assert_eq!(extract_amount(" $1,132 MXN").value(), 1132.0);
        assert_eq!(extract_amount(" -250 pesos").value(), -250.0);
        assert_eq!(extract_amount(" paid off").value(), 0.0);
        assert_eq!(extract_amount(" 12.").value(), 12.0);
        assert_eq!(extract_amount(" 2 payments of +1,000.50").value(), 2.0);
        assert_eq!(extract_amount(" owed +1,000.50").value(), 1000.5);
    }

    #[test]
    fn test_parse_sections() {
        let sheet = BudgetSheet::parse(
            "# Budget\n- stray: $5\n\n## Income\n- Salary: $10,000 MXN\n- Side gig: $500\n\n\
             ## Fixed Expenses\n- Rent: $3,000 MXN\n- Mystery\n\n## Active Debts\n- Friend: $200 MXN\n",
        );

        assert_eq!(sheet.income.len(), 2);
        assert_eq!(sheet.total_income().value(), 10500.0);
        assert_eq!(sheet.fixed_expenses[1].label, "Mystery");
        assert_eq!(sheet.fixed_expenses[1].amount.value(), 0.0);
        assert_eq!(sheet.total_expenses().value(), 3000.0);
        assert_eq!(sheet.total_debts().value(), 200.0);
    }

    #[test]
    fn test_default_budget_parses() {
        let sheet = BudgetSheet::parse(DEFAULT_BUDGET_MD);
        assert_eq!(sheet.total_income().rounded(), 8994.54);
        assert_eq!(sheet.total_expenses().rounded(), 8674.0);
        assert_eq!(sheet.total_debts().rounded(), 200.0);
    }
}
