use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Fixed set of expense categories the backend accepts.
///
/// The wire format uses the exact display strings ("Food", "EMI", ...), so
/// the serde names must stay in sync with [`ExpenseCategory::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Travel,
    Rent,
    #[serde(rename = "EMI")]
    Emi,
    Shopping,
    Entertainment,
    Healthcare,
    Education,
    Others,
}

impl ExpenseCategory {
    /// All categories, in the order the expense form lists them.
    pub const ALL: [ExpenseCategory; 9] = [
        ExpenseCategory::Food,
        ExpenseCategory::Travel,
        ExpenseCategory::Rent,
        ExpenseCategory::Emi,
        ExpenseCategory::Shopping,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Healthcare,
        ExpenseCategory::Education,
        ExpenseCategory::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Travel => "Travel",
            ExpenseCategory::Rent => "Rent",
            ExpenseCategory::Emi => "EMI",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Healthcare => "Healthcare",
            ExpenseCategory::Education => "Education",
            ExpenseCategory::Others => "Others",
        }
    }

    /// Parse a category from its display string (as produced by the
    /// category select). Returns `None` for the empty placeholder option
    /// or anything unrecognized.
    pub fn from_name(name: &str) -> Option<ExpenseCategory> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An income record as returned by the backend. Income is immutable in this
/// client: there is no edit or delete UI for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Income {
    pub id: i64,
    pub amount: f64,
    pub source: String,
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// An expense record as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub amount: f64,
    pub category: ExpenseCategory,
    /// Calendar date in YYYY-MM-DD format
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Server-computed balance summary. The client displays these numbers
/// verbatim and never derives the remaining amount itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_income: f64,
    pub total_expense: f64,
    pub remaining_amount: f64,
}

/// Response from GET /check-session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub logged_in: bool,
    #[serde(default)]
    pub username: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from POST /login.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub username: String,
}

/// Generic `{"message": ...}` body the backend uses for errors and
/// mutation acknowledgements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Body for POST /income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateIncomeRequest {
    pub amount: f64,
    pub source: String,
    pub date: String,
    pub description: Option<String>,
}

/// Body for POST /expense and PUT /expense/{id}.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseRequest {
    pub amount: f64,
    pub category: ExpenseCategory,
    pub date: String,
    pub description: Option<String>,
}

/// Origin of a combined-history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "INCOME")]
    Income,
    #[serde(rename = "EXPENSE")]
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Income => f.write_str("INCOME"),
            TransactionKind::Expense => f.write_str("EXPENSE"),
        }
    }
}

/// Read-only projection of an income or expense record for the combined
/// transaction history. Recomputed from the current lists on every render,
/// never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Record id prefixed with its origin ("income-3", "expense-7")
    pub id: String,
    pub date: String,
    pub kind: TransactionKind,
    /// Income source or expense category name
    pub label: String,
    pub amount: f64,
    pub description: Option<String>,
    /// Back-reference to the originating expense for edit/delete actions
    pub expense_id: Option<i64>,
}

impl Transaction {
    pub fn from_income(income: &Income) -> Transaction {
        Transaction {
            id: format!("income-{}", income.id),
            date: income.date.clone(),
            kind: TransactionKind::Income,
            label: income.source.clone(),
            amount: income.amount,
            description: income.description.clone(),
            expense_id: None,
        }
    }

    pub fn from_expense(expense: &Expense) -> Transaction {
        Transaction {
            id: format!("expense-{}", expense.id),
            date: expense.date.clone(),
            kind: TransactionKind::Expense,
            label: expense.category.to_string(),
            amount: expense.amount,
            description: expense.description.clone(),
            expense_id: Some(expense.id),
        }
    }
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// Merge the income and expense lists into one history, newest first.
///
/// The sort is stable over the income-then-expense concatenation, so entries
/// sharing a date keep income before expense, each in input order.
/// Unparseable dates sort to the end.
pub fn combine_transactions(income: &[Income], expenses: &[Expense]) -> Vec<Transaction> {
    let mut combined: Vec<Transaction> = income
        .iter()
        .map(Transaction::from_income)
        .chain(expenses.iter().map(Transaction::from_expense))
        .collect();

    combined.sort_by(|a, b| parse_date(&b.date).cmp(&parse_date(&a.date)));
    combined
}

/// Validation failure for a submit attempt. Surfaced as an error
/// notification; no request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in all required fields")]
    MissingFields,
    #[error("Amount must be a number")]
    InvalidAmount,
}

/// Raw field values of the income form, one string per input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IncomeFormFields {
    pub amount: String,
    pub source: String,
    pub date: String,
    pub description: String,
}

impl IncomeFormFields {
    /// Check required fields (amount, source, date) and build the create
    /// request. The optional description maps empty to `None`.
    pub fn validate(&self) -> Result<CreateIncomeRequest, FormError> {
        if self.amount.trim().is_empty()
            || self.source.trim().is_empty()
            || self.date.trim().is_empty()
        {
            return Err(FormError::MissingFields);
        }
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidAmount)?;

        Ok(CreateIncomeRequest {
            amount,
            source: self.source.trim().to_string(),
            date: self.date.trim().to_string(),
            description: optional(&self.description),
        })
    }
}

/// Raw field values of the expense form. The category holds the select's
/// string value; the empty placeholder option counts as missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseFormFields {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub description: String,
}

impl ExpenseFormFields {
    /// Check required fields (amount, category, date) and build the
    /// create/update request.
    pub fn validate(&self) -> Result<CreateExpenseRequest, FormError> {
        if self.amount.trim().is_empty() || self.date.trim().is_empty() {
            return Err(FormError::MissingFields);
        }
        let category = match ExpenseCategory::from_name(self.category.trim()) {
            Some(category) => category,
            None => return Err(FormError::MissingFields),
        };
        let amount = self
            .amount
            .trim()
            .parse::<f64>()
            .map_err(|_| FormError::InvalidAmount)?;

        Ok(CreateExpenseRequest {
            amount,
            category,
            date: self.date.trim().to_string(),
            description: optional(&self.description),
        })
    }

    /// Copy an existing record into the form for editing.
    pub fn from_expense(expense: &Expense) -> ExpenseFormFields {
        ExpenseFormFields {
            amount: expense.amount.to_string(),
            category: expense.category.to_string(),
            date: expense.date.clone(),
            description: expense.description.clone().unwrap_or_default(),
        }
    }
}

/// Raw field values of the login form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFormFields {
    pub username: String,
    pub password: String,
}

impl LoginFormFields {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(LoginRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

/// Raw field values of the registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterFormFields {
    pub username: String,
    pub password: String,
}

impl RegisterFormFields {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        if self.username.trim().is_empty() || self.password.is_empty() {
            return Err(FormError::MissingFields);
        }
        Ok(RegisterRequest {
            username: self.username.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn income(id: i64, amount: f64, source: &str, date: &str) -> Income {
        Income {
            id,
            amount,
            source: source.to_string(),
            date: date.to_string(),
            description: None,
        }
    }

    fn expense(id: i64, amount: f64, category: ExpenseCategory, date: &str) -> Expense {
        Expense {
            id,
            amount,
            category,
            date: date.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_combine_empty_lists() {
        assert!(combine_transactions(&[], &[]).is_empty());
    }

    #[test]
    fn test_combine_keeps_every_entry() {
        let income_list = vec![
            income(1, 500.0, "Salary", "2024-01-10"),
            income(2, 75.0, "Freelance", "2024-03-05"),
        ];
        let expense_list = vec![
            expense(7, 40.0, ExpenseCategory::Food, "2024-02-01"),
            expense(8, 900.0, ExpenseCategory::Rent, "2024-01-01"),
            expense(9, 12.5, ExpenseCategory::Travel, "2024-04-20"),
        ];

        let combined = combine_transactions(&income_list, &expense_list);
        assert_eq!(combined.len(), income_list.len() + expense_list.len());

        let income_entries: Vec<_> = combined
            .iter()
            .filter(|t| t.kind == TransactionKind::Income)
            .collect();
        let expense_entries: Vec<_> = combined
            .iter()
            .filter(|t| t.kind == TransactionKind::Expense)
            .collect();
        assert_eq!(income_entries.len(), 2);
        assert_eq!(expense_entries.len(), 3);

        // Income entries carry no back-reference, expenses carry their id
        assert!(income_entries.iter().all(|t| t.expense_id.is_none()));
        assert!(expense_entries
            .iter()
            .all(|t| t.expense_id == Some(t.id.trim_start_matches("expense-").parse().unwrap())));
    }

    #[test]
    fn test_combine_sorts_newest_first() {
        let income_list = vec![income(1, 100.0, "Salary", "2024-01-15")];
        let expense_list = vec![
            expense(1, 50.0, ExpenseCategory::Food, "2024-01-01"),
            expense(2, 60.0, ExpenseCategory::Travel, "2024-02-01"),
        ];

        let combined = combine_transactions(&income_list, &expense_list);
        let dates: Vec<&str> = combined.iter().map(|t| t.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-02-01", "2024-01-15", "2024-01-01"]);
    }

    #[test]
    fn test_combine_tie_break_is_deterministic() {
        // Equal dates: income entries come before expenses, each in input
        // order, because the sort is stable over the concatenation.
        let income_list = vec![
            income(1, 10.0, "A", "2024-06-01"),
            income(2, 20.0, "B", "2024-06-01"),
        ];
        let expense_list = vec![
            expense(3, 30.0, ExpenseCategory::Food, "2024-06-01"),
            expense(4, 40.0, ExpenseCategory::Rent, "2024-06-01"),
        ];

        let combined = combine_transactions(&income_list, &expense_list);
        let ids: Vec<&str> = combined.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["income-1", "income-2", "expense-3", "expense-4"]);
    }

    #[test]
    fn test_combine_unparseable_dates_sort_last() {
        let income_list = vec![income(1, 10.0, "A", "not-a-date")];
        let expense_list = vec![expense(2, 20.0, ExpenseCategory::Food, "2024-01-01")];

        let combined = combine_transactions(&income_list, &expense_list);
        assert_eq!(combined[0].id, "expense-2");
        assert_eq!(combined[1].id, "income-1");
    }

    #[test]
    fn test_transaction_labels() {
        let combined = combine_transactions(
            &[income(1, 500.0, "Salary", "2024-01-01")],
            &[expense(2, 40.0, ExpenseCategory::Emi, "2024-01-02")],
        );
        assert_eq!(combined[0].label, "EMI");
        assert_eq!(combined[1].label, "Salary");
    }

    #[test]
    fn test_income_form_valid_submit() {
        let fields = IncomeFormFields {
            amount: "500".to_string(),
            source: "Salary".to_string(),
            date: "2024-01-01".to_string(),
            description: String::new(),
        };

        let request = fields.validate().unwrap();
        assert_eq!(request.amount, 500.0);
        assert_eq!(request.source, "Salary");
        assert_eq!(request.date, "2024-01-01");
        assert_eq!(request.description, None);
    }

    #[test]
    fn test_income_form_requires_each_field() {
        let valid = IncomeFormFields {
            amount: "500".to_string(),
            source: "Salary".to_string(),
            date: "2024-01-01".to_string(),
            description: String::new(),
        };
        assert!(valid.validate().is_ok());

        for blank in ["amount", "source", "date"] {
            let mut fields = valid.clone();
            match blank {
                "amount" => fields.amount = String::new(),
                "source" => fields.source = "  ".to_string(),
                _ => fields.date = String::new(),
            }
            assert_eq!(fields.validate(), Err(FormError::MissingFields));
        }
    }

    #[test]
    fn test_income_form_rejects_unparseable_amount() {
        let fields = IncomeFormFields {
            amount: "12abc".to_string(),
            source: "Salary".to_string(),
            date: "2024-01-01".to_string(),
            description: String::new(),
        };
        assert_eq!(fields.validate(), Err(FormError::InvalidAmount));
    }

    #[test]
    fn test_expense_form_valid_submit() {
        let fields = ExpenseFormFields {
            amount: "49.99".to_string(),
            category: "Shopping".to_string(),
            date: "2024-05-05".to_string(),
            description: "  new shoes  ".to_string(),
        };

        let request = fields.validate().unwrap();
        assert_eq!(request.amount, 49.99);
        assert_eq!(request.category, ExpenseCategory::Shopping);
        assert_eq!(request.description, Some("new shoes".to_string()));
    }

    #[test]
    fn test_expense_form_requires_category() {
        let fields = ExpenseFormFields {
            amount: "10".to_string(),
            category: String::new(),
            date: "2024-05-05".to_string(),
            description: String::new(),
        };
        assert_eq!(fields.validate(), Err(FormError::MissingFields));

        // Anything the select could not have produced also counts as missing
        let fields = ExpenseFormFields {
            category: "Gadgets".to_string(),
            ..fields
        };
        assert_eq!(fields.validate(), Err(FormError::MissingFields));
    }

    #[test]
    fn test_expense_form_from_expense() {
        let record = Expense {
            id: 7,
            amount: 250.0,
            category: ExpenseCategory::Travel,
            date: "2024-03-10".to_string(),
            description: Some("train ticket".to_string()),
        };

        let fields = ExpenseFormFields::from_expense(&record);
        assert_eq!(fields.amount, "250");
        assert_eq!(fields.category, "Travel");
        assert_eq!(fields.date, "2024-03-10");
        assert_eq!(fields.description, "train ticket");
    }

    #[test]
    fn test_form_defaults_are_empty() {
        let income = IncomeFormFields::default();
        assert!(income.amount.is_empty() && income.source.is_empty());
        assert!(income.date.is_empty() && income.description.is_empty());

        let expense = ExpenseFormFields::default();
        assert!(expense.amount.is_empty() && expense.category.is_empty());
        assert!(expense.date.is_empty() && expense.description.is_empty());
    }

    #[test]
    fn test_login_form_requires_both_fields() {
        let fields = LoginFormFields {
            username: "sam".to_string(),
            password: String::new(),
        };
        assert_eq!(fields.validate(), Err(FormError::MissingFields));

        let fields = LoginFormFields {
            username: "sam".to_string(),
            password: "hunter2".to_string(),
        };
        let request = fields.validate().unwrap();
        assert_eq!(request.username, "sam");
        assert_eq!(request.password, "hunter2");
    }

    #[test]
    fn test_category_wire_names() {
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Emi).unwrap(),
            "\"EMI\""
        );
        assert_eq!(
            serde_json::to_string(&ExpenseCategory::Food).unwrap(),
            "\"Food\""
        );

        for category in ExpenseCategory::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            assert_eq!(ExpenseCategory::from_name(category.as_str()), Some(category));
        }
        assert_eq!(ExpenseCategory::from_name(""), None);
    }

    #[test]
    fn test_session_info_decode() {
        let info: SessionInfo =
            serde_json::from_str(r#"{"loggedIn":true,"username":"sam"}"#).unwrap();
        assert!(info.logged_in);
        assert_eq!(info.username.as_deref(), Some("sam"));

        let info: SessionInfo = serde_json::from_str(r#"{"loggedIn":false}"#).unwrap();
        assert!(!info.logged_in);
        assert_eq!(info.username, None);
    }

    #[test]
    fn test_summary_decode() {
        let summary: Summary = serde_json::from_str(
            r#"{"totalIncome":1500.0,"totalExpense":400.5,"remainingAmount":1099.5}"#,
        )
        .unwrap();
        assert_eq!(summary.total_income, 1500.0);
        assert_eq!(summary.total_expense, 400.5);
        assert_eq!(summary.remaining_amount, 1099.5);
    }

    #[test]
    fn test_expense_decode_without_description() {
        let record: Expense = serde_json::from_str(
            r#"{"id":7,"amount":40.0,"category":"Food","date":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(record.description, None);
        assert_eq!(record.category, ExpenseCategory::Food);
    }
}
