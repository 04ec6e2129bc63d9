//! Account domain entities
//!
//! Platform accounts and the relevance set built from the caller's social graph.

use std::borrow::Borrow;
use std::collections::{BTreeSet, HashSet};

use serde::{Deserialize, Serialize};

/// Case-sensitive platform login
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub String);

impl AccountId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AccountId {
    fn from(login: &str) -> Self {
        Self(login.to_string())
    }
}

impl From<String> for AccountId {
    fn from(login: String) -> Self {
        Self(login)
    }
}

impl Borrow<str> for AccountId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accounts the caller follows plus the caller itself.
///
/// Built once per run and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceSet {
    owner: AccountId,
    accounts: HashSet<AccountId>,
}

impl RelevanceSet {
    pub fn new(owner: AccountId, following: impl IntoIterator<Item = AccountId>) -> Self {
        let mut accounts: HashSet<AccountId> = following.into_iter().collect();
        accounts.insert(owner.clone());
        Self { owner, accounts }
    }

    /// The caller's own identity
    pub fn owner(&self) -> &AccountId {
        &self.owner
    }

    pub fn contains(&self, login: &str) -> bool {
        self.accounts.contains(login)
    }

    /// Members of the set found among `candidates`
    pub fn matching<'a, I>(&self, candidates: I) -> BTreeSet<AccountId>
    where
        I: IntoIterator<Item = &'a AccountId>,
    {
        candidates
            .into_iter()
            .filter(|account| self.accounts.contains(*account))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
