//! The transaction record consumed by the dashboard.
//!
//! Transactions are created and owned by whatever system feeds the dashboard.
//! This crate only ever reads them.

use serde::{Deserialize, Serialize};
use time::Date;

/// Opaque identifier of a transaction, unique within a source.
pub type TransactionId = String;

/// Opaque identifier of the user that owns a transaction.
pub type UserId = String;

time::serde::format_description!(calendar_date, Date, "[year]-[month]-[day]");

/// Whether money entered or left the account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money entering the account, e.g. a salary payment.
    Credit,
    /// Money leaving the account.
    Expense,
}

/// A single dated income or expense.
///
/// To create a new `Transaction` in code, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// The ID of the transaction.
    #[serde(alias = "_id")]
    pub id: TransactionId,
    /// A short label describing the transaction, e.g. "Weekly Groceries".
    pub title: String,
    /// The amount of money spent or earned.
    ///
    /// This is always a non-negative magnitude, the sign is implied by
    /// [Transaction::transaction_type].
    pub amount: f64,
    /// A free-form category label, e.g. "Food".
    pub category: String,
    /// When the transaction happened.
    #[serde(with = "calendar_date")]
    pub date: Date,
    /// Whether this is income or an expense.
    pub transaction_type: TransactionType,
    /// An optional longer description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// The user that owns the transaction.
    #[serde(default)]
    pub user_id: UserId,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(
        transaction_type: TransactionType,
        amount: f64,
        date: Date,
        category: &str,
    ) -> TransactionBuilder {
        TransactionBuilder {
            id: None,
            title: category.to_owned(),
            amount,
            category: category.to_owned(),
            date,
            transaction_type,
            description: None,
            user_id: String::new(),
        }
    }

    /// Whether this transaction is an expense.
    #[inline]
    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Whether this transaction is income.
    #[inline]
    pub fn is_credit(&self) -> bool {
        self.transaction_type == TransactionType::Credit
    }
}

/// A builder for creating [Transaction] instances.
///
/// The title defaults to the category and the ID defaults to a value derived
/// from the date and category unless set explicitly.
///
/// # Examples
///
/// ```
/// use expense_dashboard::{Transaction, TransactionType};
/// use time::macros::date;
///
/// let transaction = Transaction::build(TransactionType::Expense, 45.99, date!(2025-01-15), "Food")
///     .title("Coffee")
///     .id("coffee-1")
///     .finalise();
///
/// assert_eq!(transaction.title, "Coffee");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    id: Option<TransactionId>,
    title: String,
    amount: f64,
    category: String,
    date: Date,
    transaction_type: TransactionType,
    description: Option<String>,
    user_id: UserId,
}

impl TransactionBuilder {
    /// Set the transaction ID.
    pub fn id(mut self, id: &str) -> Self {
        self.id = Some(id.to_owned());
        self
    }

    /// Set the display title.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_owned();
        self
    }

    /// Set the optional description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_owned());
        self
    }

    /// Set the owning user.
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = user_id.to_owned();
        self
    }

    /// Build the final [Transaction].
    pub fn finalise(self) -> Transaction {
        let id = self
            .id
            .unwrap_or_else(|| format!("{}-{}", self.date, self.category.to_lowercase()));

        Transaction {
            id,
            title: self.title,
            amount: self.amount,
            category: self.category,
            date: self.date,
            transaction_type: self.transaction_type,
            description: self.description,
            user_id: self.user_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{Transaction, TransactionType};

    #[test]
    fn deserializes_upstream_record() {
        let json = r#"{
            "_id": "sample_0",
            "title": "Weekly Groceries",
            "amount": 1250,
            "description": "Sample expense transaction",
            "category": "Groceries",
            "date": "2024-03-05",
            "transactionType": "expense",
            "userId": "user-1"
        }"#;

        let transaction: Transaction = serde_json::from_str(json).unwrap();

        assert_eq!(transaction.id, "sample_0");
        assert_eq!(transaction.amount, 1250.0);
        assert_eq!(transaction.date, date!(2024 - 03 - 05));
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.user_id, "user-1");
        assert!(transaction.is_expense());
        assert!(!transaction.is_credit());
    }

    #[test]
    fn serializes_date_as_calendar_date() {
        let transaction =
            Transaction::build(TransactionType::Credit, 5000.0, date!(2024 - 03 - 01), "Salary")
                .id("t1")
                .finalise();

        let json = serde_json::to_value(&transaction).unwrap();

        assert_eq!(json["date"], "2024-03-01");
        assert_eq!(json["transactionType"], "credit");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn rejects_unknown_transaction_type() {
        let json = r#"{
            "id": "1",
            "title": "Refund",
            "amount": 10,
            "category": "Other",
            "date": "2024-03-05",
            "transactionType": "refund"
        }"#;

        assert!(serde_json::from_str::<Transaction>(json).is_err());
    }

    #[test]
    fn builder_defaults_title_and_id() {
        let transaction =
            Transaction::build(TransactionType::Expense, 12.5, date!(2024 - 01 - 02), "Food")
                .finalise();

        assert_eq!(transaction.title, "Food");
        assert_eq!(transaction.id, "2024-01-02-food");
        assert_eq!(transaction.description, None);
    }
}
