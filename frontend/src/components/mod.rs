pub mod auth;
pub mod balance_card;
pub mod forms;
pub mod message_banner;
pub mod navbar;
pub mod transactions;

pub use auth::AuthView;
pub use balance_card::BalanceCard;
pub use message_banner::MessageBanner;
pub use navbar::Navbar;
