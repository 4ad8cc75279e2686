// Entity Models - one file per domain object
//
// Agency owns Users keyed by CPF; each User owns Accounts keyed by
// account number; each Account owns its statement. Mutation flows down
// that chain only, from the single console loop.

pub mod account;
pub mod agency;
pub mod user;

pub use account::{Account, StatementEntry, TransactionError, TransactionKind};
pub use agency::{Agency, RegisterOutcome};
pub use user::User;
