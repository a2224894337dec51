//! Client-side transaction filtering. A pure function of the fetched list
//! and the three filter inputs, recomputed against the complete list on
//! every change.

use crate::models::{Transaction, TransactionType};

/// Search matches case-insensitive substrings of category or description;
/// type and category filters are exact, with `None` meaning "all".
pub fn filter_transactions<'a>(
    transactions: &'a [Transaction],
    search: &str,
    kind: Option<TransactionType>,
    category: Option<&str>,
) -> Vec<&'a Transaction> {
    let needle = search.to_lowercase();
    transactions
        .iter()
        .filter(|tx| {
            let matches_search = needle.is_empty()
                || tx.category.to_lowercase().contains(&needle)
                || tx
                    .description
                    .as_deref()
                    .unwrap_or("")
                    .to_lowercase()
                    .contains(&needle);
            let matches_kind = kind.map_or(true, |k| tx.kind == k);
            let matches_category = category.map_or(true, |c| tx.category == c);
            matches_search && matches_kind && matches_category
        })
        .collect()
}

/// Distinct categories in first-seen order, for the filter dropdown.
pub fn distinct_categories(transactions: &[Transaction]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for tx in transactions {
        if !categories.contains(&tx.category) {
            categories.push(tx.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(kind: TransactionType, category: &str, description: Option<&str>) -> Transaction {
        Transaction {
            id: format!("{category}-{kind}"),
            kind,
            category: category.to_string(),
            amount: 10.0,
            date: "2025-03-01".to_string(),
            description: description.map(str::to_string),
        }
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(TransactionType::Expense, "Groceries", Some("weekly shop")),
            tx(TransactionType::Expense, "Travel", Some("train ticket")),
            tx(TransactionType::Income, "Salary", None),
            tx(TransactionType::Expense, "Rent", Some("march groceries refund")),
        ]
    }

    #[test]
    fn search_matches_category_substring_case_insensitively() {
        let transactions = sample();
        let found = filter_transactions(&transactions, "gro", None, None);
        let categories: Vec<&str> = found.iter().map(|t| t.category.as_str()).collect();
        // "Groceries" by category, "Rent" by its description text.
        assert_eq!(categories, vec!["Groceries", "Rent"]);
        assert!(!categories.contains(&"Travel"));
    }

    #[test]
    fn search_matches_description() {
        let transactions = sample();
        let found = filter_transactions(&transactions, "TICKET", None, None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Travel");
    }

    #[test]
    fn type_filter_is_exact() {
        let transactions = sample();
        let found = filter_transactions(&transactions, "", Some(TransactionType::Income), None);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Salary");
    }

    #[test]
    fn category_filter_is_exact_not_substring() {
        let transactions = sample();
        let found = filter_transactions(&transactions, "", None, Some("Groceries"));
        assert_eq!(found.len(), 1);
        assert!(filter_transactions(&transactions, "", None, Some("Grocer")).is_empty());
    }

    #[test]
    fn filters_combine() {
        let transactions = sample();
        let found = filter_transactions(
            &transactions,
            "gro",
            Some(TransactionType::Expense),
            Some("Groceries"),
        );
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].category, "Groceries");
    }

    #[test]
    fn empty_inputs_pass_everything() {
        let transactions = sample();
        assert_eq!(
            filter_transactions(&transactions, "", None, None).len(),
            transactions.len()
        );
    }

    #[test]
    fn filtering_twice_yields_the_same_result() {
        let transactions = sample();
        let first = filter_transactions(&transactions, "r", Some(TransactionType::Expense), None);
        let second = filter_transactions(&transactions, "r", Some(TransactionType::Expense), None);
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_categories_keep_first_seen_order() {
        let mut transactions = sample();
        transactions.push(tx(TransactionType::Expense, "Groceries", None));
        assert_eq!(
            distinct_categories(&transactions),
            vec!["Groceries", "Travel", "Salary", "Rent"]
        );
    }
}
