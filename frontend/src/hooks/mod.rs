pub mod use_expense_form;
pub mod use_finance_data;
pub mod use_income_form;
pub mod use_notification;
pub mod use_session;

pub use use_expense_form::use_expense_form;
pub use use_finance_data::use_finance_data;
pub use use_income_form::use_income_form;
pub use use_notification::{use_notification, Notification, NotificationKind};
pub use use_session::{use_session, SessionState};
