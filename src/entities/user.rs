// 👤 User Entity - personal data plus owned accounts
//
// A user owns their accounts exclusively. Account numbers are handed out
// sequentially per user, 1-based, and never reused.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::BankConfig;
use crate::entities::account::Account;
use crate::validation::format_cpf;

/// A registered bank customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    name: String,
    /// Stored as typed, e.g. "01-01-1990"
    date_of_birth: String,
    /// 11 digits, validated at registration; the lookup key in Agency
    cpf: String,
    address: String,
    /// Keyed by account number. Zero-padded sequential numbers keep
    /// iteration in creation order.
    accounts: BTreeMap<String, Account>,
}

impl User {
    /// Only an Agency registers users, so this stays crate-private.
    pub(crate) fn new(name: String, date_of_birth: String, cpf: String, address: String) -> Self {
        User {
            name,
            date_of_birth,
            cpf,
            address,
            accounts: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn date_of_birth(&self) -> &str {
        &self.date_of_birth
    }

    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    /// CPF rendered as `XXX.XXX.XXX-XX` for display
    pub fn formatted_cpf(&self) -> String {
        format_cpf(&self.cpf)
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Open the next account for this user and return its number.
    ///
    /// Numbers are `"<agency>-NNNN"`: 1-based sequence, zero-padded to
    /// four digits (wider sequences print unpadded, so numbers stay
    /// unique).
    pub fn open_account(&mut self, config: &BankConfig) -> String {
        let number = format!("{}-{:04}", config.agency_code, self.accounts.len() + 1);
        self.accounts
            .insert(number.clone(), Account::new(number.clone(), config));
        number
    }

    /// Lookup by account number; never constructs.
    pub fn account(&self, number: &str) -> Option<&Account> {
        self.accounts.get(number)
    }

    pub fn account_mut(&mut self, number: &str) -> Option<&mut Account> {
        self.accounts.get_mut(number)
    }

    /// Accounts in creation order
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Distinguishes "no accounts" from an empty listing render
    pub fn has_accounts(&self) -> bool {
        !self.accounts.is_empty()
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
