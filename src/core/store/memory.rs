//! In-memory store.
//!
//! Holds secrets in a map and records every call, so the workflow can be
//! exercised without a network.

use std::cell::RefCell;
use std::collections::BTreeMap;

use zeroize::Zeroizing;

use super::SecretStore;
use crate::core::types::SecretRef;
use crate::error::{Result, StoreError};

/// In-memory secret store.
#[derive(Debug, Default)]
pub struct Memory {
    secrets: RefCell<BTreeMap<String, String>>,
    fetches: RefCell<Vec<SecretRef>>,
    updates: RefCell<Vec<(String, String)>>,
    reject_updates: bool,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a secret value.
    pub fn with_secret(self, id: &str, value: &str) -> Self {
        self.secrets
            .borrow_mut()
            .insert(id.to_string(), value.to_string());
        self
    }

    /// Make every `update` call fail.
    pub fn rejecting_updates(mut self) -> Self {
        self.reject_updates = true;
        self
    }

    /// Current value of a secret.
    pub fn get(&self, id: &str) -> Option<String> {
        self.secrets.borrow().get(id).cloned()
    }

    /// Every reference passed to `fetch`, in call order.
    pub fn fetches(&self) -> Vec<SecretRef> {
        self.fetches.borrow().clone()
    }

    /// Every `(id, content)` pair passed to `update`, in call order.
    pub fn updates(&self) -> Vec<(String, String)> {
        self.updates.borrow().clone()
    }
}

impl SecretStore for Memory {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn fetch(&self, secret: &SecretRef) -> Result<Zeroizing<String>> {
        self.fetches.borrow_mut().push(secret.clone());
        self.secrets
            .borrow()
            .get(secret.id())
            .map(|v| Zeroizing::new(v.clone()))
            .ok_or_else(|| {
                StoreError::Fetch {
                    id: secret.id().to_string(),
                    reason: "ResourceNotFoundException: secret not found".to_string(),
                }
                .into()
            })
    }

    fn update(&self, secret_id: &str, content: &str) -> Result<()> {
        self.updates
            .borrow_mut()
            .push((secret_id.to_string(), content.to_string()));

        if self.reject_updates {
            return Err(StoreError::Update {
                id: secret_id.to_string(),
                reason: "AccessDeniedException: not authorized".to_string(),
            }
            .into());
        }

        let mut secrets = self.secrets.borrow_mut();
        match secrets.get_mut(secret_id) {
            Some(value) => {
                *value = content.to_string();
                Ok(())
            }
            None => Err(StoreError::Update {
                id: secret_id.to_string(),
                reason: "ResourceNotFoundException: secret not found".to_string(),
            }
            .into()),
        }
    }
}
