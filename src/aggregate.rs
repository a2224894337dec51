//! Pure budget/transaction aggregation. Everything here is recomputed in
//! full from the current in-memory lists on every fetch; nothing is cached
//! across renders and no derived figure is trusted from the backend.

use crate::models::{Budget, Transaction, TransactionType};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Category keys match case-insensitively with surrounding whitespace
/// ignored, so "Food" spends count against a "food " budget.
pub fn normalize_category(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Band {
    Normal,
    Warning,
    OverBudget,
}

pub fn band_for(percent: i64) -> Band {
    if percent >= 100 {
        Band::OverBudget
    } else if percent >= 75 {
        Band::Warning
    } else {
        Band::Normal
    }
}

fn percent_of(spent: f64, limit: f64) -> i64 {
    if limit > 0.0 {
        (spent / limit * 100.0).round() as i64
    } else {
        0
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct BudgetStatus {
    pub budget: Budget,
    pub spent: f64,
    pub percent: i64,
    pub band: Band,
}

#[derive(Clone, PartialEq, Debug)]
pub struct BudgetOverview {
    pub total_budget: f64,
    pub total_spent: f64,
    pub remaining: f64,
    pub percent: i64,
    pub band: Band,
    pub categories: Vec<BudgetStatus>,
}

/// Computes per-budget spent and the aggregate totals. Only Expense
/// transactions contribute, matched on normalized category.
pub fn budget_overview(budgets: &[Budget], transactions: &[Transaction]) -> BudgetOverview {
    let mut spent_by_category: HashMap<String, f64> = HashMap::new();
    for tx in transactions {
        if tx.kind == TransactionType::Expense {
            *spent_by_category
                .entry(normalize_category(&tx.category))
                .or_insert(0.0) += tx.amount;
        }
    }

    let categories: Vec<BudgetStatus> = budgets
        .iter()
        .map(|budget| {
            let spent = spent_by_category
                .get(&normalize_category(&budget.category))
                .copied()
                .unwrap_or(0.0);
            let percent = percent_of(spent, budget.limit);
            BudgetStatus {
                budget: budget.clone(),
                spent,
                percent,
                band: band_for(percent),
            }
        })
        .collect();

    let total_budget: f64 = budgets.iter().map(|b| b.limit).sum();
    let total_spent: f64 = categories.iter().map(|c| c.spent).sum();
    let percent = percent_of(total_spent, total_budget);

    BudgetOverview {
        total_budget,
        total_spent,
        remaining: total_budget - total_spent,
        percent,
        band: band_for(percent),
        categories,
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct CategorySlice {
    pub category: String,
    pub total: f64,
}

/// Ranks expense categories by total spend, largest first, keeping at most
/// `top` entries. Ties keep the order the categories first appeared in the
/// transaction list. Categories are taken verbatim here, not normalized.
pub fn expense_breakdown(transactions: &[Transaction], top: usize) -> Vec<CategorySlice> {
    let mut slices: Vec<CategorySlice> = Vec::new();
    for tx in transactions {
        if tx.kind != TransactionType::Expense {
            continue;
        }
        match slices.iter_mut().find(|s| s.category == tx.category) {
            Some(slice) => slice.total += tx.amount,
            None => slices.push(CategorySlice {
                category: tx.category.clone(),
                total: tx.amount,
            }),
        }
    }
    // Stable sort preserves first-seen order among equal totals.
    slices.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
    slices.truncate(top);
    slices
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64) -> Transaction {
        Transaction {
            id: format!("tx-{category}-{amount}"),
            kind: TransactionType::Expense,
            category: category.to_string(),
            amount,
            date: "2025-03-01".to_string(),
            description: None,
        }
    }

    fn income(category: &str, amount: f64) -> Transaction {
        Transaction {
            kind: TransactionType::Income,
            ..expense(category, amount)
        }
    }

    fn budget(category: &str, limit: f64) -> Budget {
        Budget {
            id: format!("b-{category}"),
            category: category.to_string(),
            limit,
        }
    }

    #[test]
    fn spent_matches_case_insensitively_and_trimmed() {
        let transactions = vec![expense("Food", 500.0)];
        let budgets = vec![budget("food", 1000.0)];
        let overview = budget_overview(&budgets, &transactions);

        assert_eq!(overview.categories[0].spent, 500.0);
        assert_eq!(overview.categories[0].percent, 50);
        assert_eq!(overview.categories[0].band, Band::Normal);

        let padded = vec![budget("  FOOD ", 1000.0)];
        let overview = budget_overview(&padded, &transactions);
        assert_eq!(overview.categories[0].spent, 500.0);
    }

    #[test]
    fn income_never_contributes_to_spent() {
        let transactions = vec![income("Food", 900.0), expense("Food", 100.0)];
        let overview = budget_overview(&[budget("Food", 1000.0)], &transactions);
        assert_eq!(overview.categories[0].spent, 100.0);
    }

    #[test]
    fn banding_thresholds() {
        let budgets = vec![budget("food", 1000.0)];

        let overview = budget_overview(&budgets, &[expense("Food", 800.0)]);
        assert_eq!(overview.categories[0].percent, 80);
        assert_eq!(overview.categories[0].band, Band::Warning);

        let overview = budget_overview(&budgets, &[expense("Food", 1000.0)]);
        assert_eq!(overview.categories[0].percent, 100);
        assert_eq!(overview.categories[0].band, Band::OverBudget);

        let overview = budget_overview(&budgets, &[expense("Food", 1300.0)]);
        assert_eq!(overview.categories[0].percent, 130);
        assert_eq!(overview.categories[0].band, Band::OverBudget);
    }

    #[test]
    fn aggregate_totals_and_remaining() {
        let budgets = vec![budget("Food", 1000.0), budget("Rent", 3000.0)];
        let transactions = vec![expense("food", 500.0), expense("Rent", 3000.0)];
        let overview = budget_overview(&budgets, &transactions);

        assert_eq!(overview.total_budget, 4000.0);
        assert_eq!(overview.total_spent, 3500.0);
        assert_eq!(overview.remaining, 500.0);
        assert_eq!(overview.percent, 88);
        assert_eq!(overview.band, Band::Warning);
    }

    #[test]
    fn zero_total_budget_reports_zero_percent() {
        let overview = budget_overview(&[], &[expense("Food", 500.0)]);
        assert_eq!(overview.percent, 0);
        assert_eq!(overview.band, Band::Normal);
        assert!(overview.categories.is_empty());
    }

    #[test]
    fn spending_outside_any_budget_counts_nowhere() {
        let overview = budget_overview(&[budget("Food", 1000.0)], &[expense("Travel", 400.0)]);
        assert_eq!(overview.categories[0].spent, 0.0);
        assert_eq!(overview.total_spent, 0.0);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let budgets = vec![budget("Food", 1000.0), budget("Rent", 2000.0)];
        let transactions = vec![
            expense("food ", 250.0),
            expense("Rent", 1800.0),
            income("Salary", 5000.0),
        ];
        let first = budget_overview(&budgets, &transactions);
        let second = budget_overview(&budgets, &transactions);
        assert_eq!(first, second);
    }

    #[test]
    fn breakdown_ranks_top_categories() {
        let transactions = vec![
            expense("Food", 100.0),
            expense("Rent", 900.0),
            expense("Travel", 300.0),
            expense("Food", 250.0),
            expense("Fun", 50.0),
            expense("Books", 10.0),
            income("Salary", 9000.0),
        ];
        let slices = expense_breakdown(&transactions, 4);
        let names: Vec<&str> = slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Rent", "Food", "Travel", "Fun"]);
        assert_eq!(slices[1].total, 350.0);
    }

    #[test]
    fn breakdown_ties_keep_first_seen_order() {
        let transactions = vec![
            expense("Alpha", 100.0),
            expense("Beta", 100.0),
            expense("Gamma", 100.0),
        ];
        let slices = expense_breakdown(&transactions, 4);
        let names: Vec<&str> = slices.iter().map(|s| s.category.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Beta", "Gamma"]);
    }

    #[test]
    fn normalize_category_lowercases_and_trims() {
        assert_eq!(normalize_category("  Groceries "), "groceries");
        assert_eq!(normalize_category("FOOD"), "food");
    }
}
