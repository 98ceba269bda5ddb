use super::entities::Expense;

/// Derived view of the budget screen's numbers. Never stored as
/// authoritative state; recomputed from the expense collection on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetSummary {
    pub spent_total: f64,
    /// `limit - spent_total`, only when a limit is set.
    pub remaining: Option<f64>,
    /// Only meaningful when a limit is set.
    pub status: Option<BudgetStatus>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BudgetStatus {
    WithinBudget,
    OverBudget,
}

/// Sum of all expense amounts over the full collection.
pub fn spent_total(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

pub fn remaining(limit: Option<f64>, spent: f64) -> Option<f64> {
    limit.map(|limit| limit - spent)
}

/// Spending exactly equal to the limit still counts as within budget.
pub fn classify(limit: f64, spent: f64) -> BudgetStatus {
    if spent > limit {
        BudgetStatus::OverBudget
    } else {
        BudgetStatus::WithinBudget
    }
}

pub fn summarize(expenses: &[Expense], limit: Option<f64>) -> BudgetSummary {
    let spent = spent_total(expenses);
    BudgetSummary {
        spent_total: spent,
        remaining: remaining(limit, spent),
        status: limit.map(|limit| classify(limit, spent)),
    }
}
