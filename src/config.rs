// ⚙️ Bank Configuration - branch code and per-account limits
//
// One BankConfig is built at startup (CLI flags or Default) and passed into
// Agency and Account construction; nothing reads global state.

use serde::{Deserialize, Serialize};

/// Operating parameters for one branch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankConfig {
    /// Branch code, used as the prefix of every account number
    pub agency_code: String,

    /// Maximum number of deposits + withdrawals per account
    pub transaction_limit: u32,

    /// Maximum amount a single withdrawal may move
    pub withdrawal_limit: f64,
}

impl BankConfig {
    pub const DEFAULT_AGENCY_CODE: &'static str = "001";
    pub const DEFAULT_TRANSACTION_LIMIT: u32 = 10;
    pub const DEFAULT_WITHDRAWAL_LIMIT: f64 = 500.0;
}

impl Default for BankConfig {
    fn default() -> Self {
        BankConfig {
            agency_code: Self::DEFAULT_AGENCY_CODE.to_string(),
            transaction_limit: Self::DEFAULT_TRANSACTION_LIMIT,
            withdrawal_limit: Self::DEFAULT_WITHDRAWAL_LIMIT,
        }
    }
}
