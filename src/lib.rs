// Banco Terminal - Core Library
// Exposes the domain model and the console loop for the binary and tests

pub mod config;
pub mod entities;
pub mod ui;
pub mod validation;

// Re-export commonly used types
pub use config::BankConfig;
pub use entities::{
    Account, Agency, RegisterOutcome, StatementEntry, TransactionError, TransactionKind, User,
};
pub use ui::{App, Command};
pub use validation::{format_cpf, parse_amount, validate_cpf, ValidationError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
