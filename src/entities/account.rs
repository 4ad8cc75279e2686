// 💳 Account Entity - balance, transaction cap, append-only statement
//
// An account belongs to exactly one User and is mutated only through
// deposit/withdraw. Every successful operation appends one statement
// entry; the statement is never cleared.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::BankConfig;

// ============================================================================
// TRANSACTION KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdraw => "Withdraw",
        }
    }
}

// ============================================================================
// STATEMENT ENTRY
// ============================================================================

/// One line of an account statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementEntry {
    pub kind: TransactionKind,
    pub amount: f64,
    /// Local wall-clock time at the moment the balance changed
    pub timestamp: DateTime<Local>,
}

impl fmt::Display for StatementEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: R$ {:.2} at {}",
            self.kind.as_str(),
            self.amount,
            self.timestamp.format("%d-%m-%y %H:%M:%S")
        )
    }
}

// ============================================================================
// TRANSACTION ERROR
// ============================================================================

/// Why a deposit or withdrawal was rejected.
///
/// A rejection leaves the account untouched: no balance change, no
/// statement entry, no count increment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionError {
    /// The account already performed its maximum number of transactions
    TransactionLimitExceeded,
    /// Non-positive amount
    InvalidAmount,
    /// Withdrawal larger than the current balance
    InsufficientBalance,
    /// Withdrawal larger than the single-withdrawal cap
    WithdrawalLimitExceeded,
}

impl fmt::Display for TransactionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            TransactionError::TransactionLimitExceeded => {
                "you have exceeded the transaction limit"
            }
            TransactionError::InvalidAmount => "invalid amount",
            TransactionError::InsufficientBalance => "you don't have enough balance",
            TransactionError::WithdrawalLimitExceeded => {
                "you have exceeded the withdrawal limit"
            }
        };
        f.write_str(msg)
    }
}

impl std::error::Error for TransactionError {}

// ============================================================================
// ACCOUNT ENTITY
// ============================================================================

/// A single bank account.
///
/// Fields stay private so the invariants hold at every call site: the
/// balance never goes negative and the statement maps 1:1 to successful
/// transactions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// `"<agency>-<0-padded sequence>"`, unique within the owning user,
    /// immutable after creation
    number: String,

    /// Current balance; never negative
    balance: f64,

    /// Successful deposits + withdrawals so far
    transactions: u32,

    /// Append-only, in transaction order
    statement: Vec<StatementEntry>,

    // Caps copied from BankConfig at creation
    transaction_limit: u32,
    withdrawal_limit: f64,
}

impl Account {
    /// Create a new empty account. Only a User hands out numbers, so this
    /// stays crate-private.
    pub(crate) fn new(number: String, config: &BankConfig) -> Self {
        Account {
            number,
            balance: 0.0,
            transactions: 0,
            statement: Vec::new(),
            transaction_limit: config.transaction_limit,
            withdrawal_limit: config.withdrawal_limit,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Number of successful deposits + withdrawals
    pub fn transactions(&self) -> u32 {
        self.transactions
    }

    /// Statement entries in transaction order
    pub fn entries(&self) -> &[StatementEntry] {
        &self.statement
    }

    /// Distinguishes a never-used account from one with history
    pub fn has_transactions(&self) -> bool {
        !self.statement.is_empty()
    }

    fn record(&mut self, kind: TransactionKind, amount: f64) {
        self.statement.push(StatementEntry {
            kind,
            amount,
            timestamp: Local::now(),
        });
        self.transactions += 1;
    }

    /// Add `amount` to the balance.
    ///
    /// Returns the deposited amount on success.
    pub fn deposit(&mut self, amount: f64) -> Result<f64, TransactionError> {
        if self.transactions >= self.transaction_limit {
            return Err(TransactionError::TransactionLimitExceeded);
        }

        if amount <= 0.0 {
            return Err(TransactionError::InvalidAmount);
        }

        self.balance += amount;
        self.record(TransactionKind::Deposit, amount);
        Ok(amount)
    }

    /// Remove `amount` from the balance.
    ///
    /// After the transaction-limit gate the checks run in a fixed order:
    /// balance first, then the single-withdrawal cap, then positivity.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64, TransactionError> {
        if self.transactions >= self.transaction_limit {
            return Err(TransactionError::TransactionLimitExceeded);
        }

        if amount > self.balance {
            Err(TransactionError::InsufficientBalance)
        } else if amount > self.withdrawal_limit {
            Err(TransactionError::WithdrawalLimitExceeded)
        } else if amount > 0.0 {
            self.balance -= amount;
            self.record(TransactionKind::Withdraw, amount);
            Ok(amount)
        } else {
            Err(TransactionError::InvalidAmount)
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_account() -> Account {
        Account::new("001-0001".to_string(), &BankConfig::default())
    }

    #[test]
    fn test_new_account_is_empty() {
        let account = test_account();

        assert_eq!(account.number(), "001-0001");
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.transactions(), 0);
        assert!(!account.has_transactions());
        assert!(account.entries().is_empty());
    }

    #[test]
    fn test_deposit_success() {
        let mut account = test_account();

        assert_eq!(account.deposit(100.0), Ok(100.0));
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.transactions(), 1);
        assert_eq!(account.entries().len(), 1);
        assert_eq!(account.entries()[0].kind, TransactionKind::Deposit);
        assert_eq!(account.entries()[0].amount, 100.0);
    }

    #[test]
    fn test_deposit_rejects_non_positive() {
        let mut account = test_account();

        assert_eq!(account.deposit(0.0), Err(TransactionError::InvalidAmount));
        assert_eq!(account.deposit(-5.0), Err(TransactionError::InvalidAmount));
        assert_eq!(account.balance(), 0.0);
        assert_eq!(account.transactions(), 0);
        assert!(account.entries().is_empty());
    }

    #[test]
    fn test_withdraw_insufficient_balance_checked_before_cap() {
        let mut account = test_account();
        account.deposit(100.0).unwrap();

        // 600 exceeds both the balance and the 500 cap; the balance check
        // comes first
        assert_eq!(
            account.withdraw(600.0),
            Err(TransactionError::InsufficientBalance)
        );
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.transactions(), 1);
    }

    #[test]
    fn test_withdraw_rejects_over_balance_even_under_cap() {
        let mut account = test_account();
        account.deposit(100.0).unwrap();

        assert_eq!(
            account.withdraw(200.0),
            Err(TransactionError::InsufficientBalance)
        );
        assert_eq!(account.balance(), 100.0);
    }

    #[test]
    fn test_withdraw_rejects_over_cap_with_covering_balance() {
        let mut account = test_account();
        account.deposit(1000.0).unwrap();

        assert_eq!(
            account.withdraw(600.0),
            Err(TransactionError::WithdrawalLimitExceeded)
        );
        assert_eq!(account.balance(), 1000.0);
        assert_eq!(account.transactions(), 1);
    }

    #[test]
    fn test_withdraw_rejects_non_positive() {
        let mut account = test_account();
        account.deposit(100.0).unwrap();

        assert_eq!(account.withdraw(0.0), Err(TransactionError::InvalidAmount));
        assert_eq!(account.withdraw(-10.0), Err(TransactionError::InvalidAmount));
        assert_eq!(account.balance(), 100.0);
        assert_eq!(account.entries().len(), 1);
    }

    #[test]
    fn test_withdraw_success() {
        let mut account = test_account();
        account.deposit(100.0).unwrap();

        assert_eq!(account.withdraw(50.0), Ok(50.0));
        assert_eq!(account.balance(), 50.0);
        assert_eq!(account.transactions(), 2);
        assert_eq!(account.entries()[1].kind, TransactionKind::Withdraw);
    }

    #[test]
    fn test_balance_never_goes_negative() {
        let mut account = test_account();
        account.deposit(30.0).unwrap();

        for amount in [31.0, 100.0, 1e9] {
            let _ = account.withdraw(amount);
            assert!(account.balance() >= 0.0);
        }
        assert_eq!(account.balance(), 30.0);
    }

    #[test]
    fn test_transaction_limit_caps_successful_operations() {
        let mut account = test_account();

        for _ in 0..10 {
            account.deposit(1.0).unwrap();
        }
        assert_eq!(account.transactions(), 10);

        // The 11th operation is rejected even though it would be valid
        assert_eq!(
            account.deposit(1.0),
            Err(TransactionError::TransactionLimitExceeded)
        );
        assert_eq!(
            account.withdraw(1.0),
            Err(TransactionError::TransactionLimitExceeded)
        );
        assert_eq!(account.balance(), 10.0);
        assert_eq!(account.entries().len(), 10);
    }

    #[test]
    fn test_rejections_do_not_consume_the_limit() {
        let mut account = test_account();

        for _ in 0..20 {
            let _ = account.deposit(-1.0);
        }
        assert_eq!(account.transactions(), 0);
        assert_eq!(account.deposit(5.0), Ok(5.0));
    }

    #[test]
    fn test_statement_preserves_order() {
        let mut account = test_account();
        account.deposit(100.0).unwrap();
        account.withdraw(40.0).unwrap();
        account.deposit(10.0).unwrap();

        let kinds: Vec<TransactionKind> =
            account.entries().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TransactionKind::Deposit,
                TransactionKind::Withdraw,
                TransactionKind::Deposit
            ]
        );

        let amounts: Vec<f64> = account.entries().iter().map(|e| e.amount).collect();
        assert_eq!(amounts, vec![100.0, 40.0, 10.0]);
    }

    #[test]
    fn test_custom_limits_from_config() {
        let config = BankConfig {
            agency_code: "042".to_string(),
            transaction_limit: 2,
            withdrawal_limit: 20.0,
        };
        let mut account = Account::new("042-0001".to_string(), &config);

        account.deposit(100.0).unwrap();
        assert_eq!(
            account.withdraw(21.0),
            Err(TransactionError::WithdrawalLimitExceeded)
        );
        account.withdraw(20.0).unwrap();
        assert_eq!(
            account.deposit(1.0),
            Err(TransactionError::TransactionLimitExceeded)
        );
    }

    #[test]
    fn test_statement_entry_display() {
        let entry = StatementEntry {
            kind: TransactionKind::Deposit,
            amount: 100.0,
            timestamp: Local::now(),
        };

        let rendered = entry.to_string();
        assert!(rendered.starts_with("Deposit: R$ 100.00 at "));
    }
}
