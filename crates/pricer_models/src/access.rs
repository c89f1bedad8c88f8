//! Optional access gate.
//!
//! Callers that need licensing or authentication install an [`AccessGate`]
//! and consult it before pricing. Nothing in this crate requires one:
//! [`check_access`] with no gate always succeeds.

use thiserror::Error;

/// Reasons a gate refuses access.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccessError {
    /// The gate expects a key but none was presented.
    #[error("Access key required but none was presented")]
    MissingKey,

    /// The presented key is not accepted.
    #[error("Access key rejected")]
    Rejected,

    /// The gate has nothing to check keys against.
    #[error("Access gate has no accepted keys configured")]
    NotConfigured,
}

/// Collaborator deciding whether pricing may proceed.
pub trait AccessGate: Send + Sync {
    /// `Ok(())` when access is granted.
    fn authorise(&self) -> Result<(), AccessError>;

    /// One-line description for diagnostics. Never includes key material.
    fn describe(&self) -> String;
}

/// Gate that grants everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OpenAccess;

impl AccessGate for OpenAccess {
    fn authorise(&self) -> Result<(), AccessError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "open".to_string()
    }
}

/// Gate accepting a presented key found in a fixed list.
///
/// # Examples
/// ```
/// use pricer_models::access::{AccessError, AccessGate, KeyListGate};
///
/// let keys = vec!["alpha".to_string(), "beta".to_string()];
/// let gate = KeyListGate::new(keys.clone(), Some("beta".to_string()));
/// assert!(gate.authorise().is_ok());
///
/// let gate = KeyListGate::new(keys, None);
/// assert_eq!(gate.authorise(), Err(AccessError::MissingKey));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct KeyListGate {
    accepted: Vec<String>,
    presented: Option<String>,
}

impl KeyListGate {
    /// Creates a gate. Blank keys are ignored.
    pub fn new(accepted: Vec<String>, presented: Option<String>) -> Self {
        let accepted = accepted
            .into_iter()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .collect();
        let presented = presented
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());
        Self {
            accepted,
            presented,
        }
    }

    /// Number of accepted keys.
    pub fn accepted_count(&self) -> usize {
        self.accepted.len()
    }
}

// Keys stay out of logs.
impl std::fmt::Debug for KeyListGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyListGate")
            .field("accepted", &self.accepted.len())
            .field("presented", &self.presented.is_some())
            .finish()
    }
}

impl AccessGate for KeyListGate {
    fn authorise(&self) -> Result<(), AccessError> {
        if self.accepted.is_empty() {
            return Err(AccessError::NotConfigured);
        }
        match &self.presented {
            None => Err(AccessError::MissingKey),
            Some(key) if self.accepted.iter().any(|k| k == key) => Ok(()),
            Some(_) => Err(AccessError::Rejected),
        }
    }

    fn describe(&self) -> String {
        format!(
            "key list ({} accepted, key {})",
            self.accepted.len(),
            if self.presented.is_some() {
                "presented"
            } else {
                "missing"
            }
        )
    }
}

/// Consults `gate` if one is installed.
///
/// # Examples
/// ```
/// use pricer_models::access::{check_access, OpenAccess};
///
/// assert!(check_access(None).is_ok());
/// assert!(check_access(Some(&OpenAccess)).is_ok());
/// ```
pub fn check_access(gate: Option<&dyn AccessGate>) -> Result<(), AccessError> {
    match gate {
        Some(gate) => gate.authorise(),
        None => Ok(()),
    }
}
