// 🏦 Agency - one branch's user registry
// Single point of user lookup and registration, keyed by CPF.

use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::config::BankConfig;
use crate::entities::user::User;

/// Whether a registration stored a new user or found the CPF taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created,
    AlreadyRegistered,
}

/// One bank branch. Holds every registered user for the process lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agency {
    code: String,
    users: HashMap<String, User>,
}

impl Agency {
    pub fn new(config: &BankConfig) -> Self {
        Agency {
            code: config.agency_code.clone(),
            users: HashMap::new(),
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Register a user under their CPF.
    ///
    /// A taken CPF returns the existing user untouched; nothing is
    /// overwritten.
    pub fn register_user(
        &mut self,
        name: String,
        date_of_birth: String,
        cpf: String,
        address: String,
    ) -> (RegisterOutcome, &mut User) {
        match self.users.entry(cpf) {
            Entry::Occupied(slot) => (RegisterOutcome::AlreadyRegistered, slot.into_mut()),
            Entry::Vacant(slot) => {
                let cpf = slot.key().clone();
                (
                    RegisterOutcome::Created,
                    slot.insert(User::new(name, date_of_birth, cpf, address)),
                )
            }
        }
    }

    /// Lookup by CPF; absence is an expected outcome, not an error.
    pub fn user(&self, cpf: &str) -> Option<&User> {
        self.users.get(cpf)
    }

    pub fn user_mut(&mut self, cpf: &str) -> Option<&mut User> {
        self.users.get_mut(cpf)
    }

    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
