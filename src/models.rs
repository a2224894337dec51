use serde::{Deserialize, Serialize};
use std::fmt;

/// Income or expense. Serialized exactly as the backend spells it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionType::Income => write!(f, "Income"),
            TransactionType::Expense => write!(f, "Expense"),
        }
    }
}

/// A transaction as returned by `GET /transactions`. The backend assigns
/// the id; amounts are non-negative and the type carries the sign meaning.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Payload for creating or updating a transaction.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct TransactionInput {
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}

/// A per-category monthly limit. `spent` is never part of the wire shape;
/// it is recomputed client-side from the transaction list on every fetch.
#[derive(Clone, PartialEq, Debug, Deserialize)]
pub struct Budget {
    #[serde(rename = "_id")]
    pub id: String,
    pub category: String,
    pub limit: f64,
}

#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct BudgetInput {
    pub category: String,
    pub limit: f64,
}

/// Cached display copy of the signed-in user, persisted alongside the token.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

/// Backend-computed summary figures, displayed verbatim.
#[derive(Clone, PartialEq, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_income: f64,
    pub total_expense: f64,
    pub balance: f64,
    pub top_category: String,
    pub top_category_spent: f64,
}

impl Default for DashboardStats {
    fn default() -> Self {
        DashboardStats {
            total_income: 0.0,
            total_expense: 0.0,
            balance: 0.0,
            top_category: "N/A".to_string(),
            top_category_spent: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_transaction_from_backend_shape() {
        let raw = r#"{
            "_id": "65f1c0ffee",
            "type": "Expense",
            "category": "Food",
            "amount": 500,
            "date": "2025-03-01T00:00:00.000Z",
            "description": "groceries"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.id, "65f1c0ffee");
        assert_eq!(tx.kind, TransactionType::Expense);
        assert_eq!(tx.amount, 500.0);
        assert_eq!(tx.description.as_deref(), Some("groceries"));
    }

    #[test]
    fn transaction_description_is_optional() {
        let raw = r#"{"_id":"a","type":"Income","category":"Salary","amount":1,"date":"2025-03-01"}"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.description, None);
    }

    #[test]
    fn unknown_transaction_type_fails_fast() {
        let raw = r#"{"_id":"a","type":"Transfer","category":"x","amount":1,"date":"2025-03-01"}"#;
        assert!(serde_json::from_str::<Transaction>(raw).is_err());
    }

    #[test]
    fn decodes_dashboard_stats_camel_case() {
        let raw = r#"{
            "totalIncome": 12000,
            "totalExpense": 4500.5,
            "balance": 7499.5,
            "topCategory": "Rent",
            "topCategorySpent": 3000
        }"#;
        let stats: DashboardStats = serde_json::from_str(raw).unwrap();
        assert_eq!(stats.total_income, 12000.0);
        assert_eq!(stats.total_expense, 4500.5);
        assert_eq!(stats.top_category, "Rent");
        assert_eq!(stats.top_category_spent, 3000.0);
    }

    #[test]
    fn transaction_input_serializes_type_field() {
        let input = TransactionInput {
            kind: TransactionType::Expense,
            category: "Food".into(),
            amount: 42.5,
            date: "2025-03-01".into(),
            description: String::new(),
        };
        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value["type"], "Expense");
        assert_eq!(value["amount"], 42.5);
    }

    #[test]
    fn profile_round_trips_through_storage_json() {
        let profile = UserProfile {
            id: "u1".into(),
            name: "Asha".into(),
            email: "asha@example.com".into(),
        };
        let raw = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&raw).unwrap();
        assert_eq!(back, profile);
    }
}
