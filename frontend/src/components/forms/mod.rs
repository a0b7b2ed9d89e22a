pub mod expense_form;
pub mod income_form;

pub use expense_form::ExpenseForm;
pub use income_form::IncomeForm;
