use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Permission codes granted to the session user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermissionSet(HashSet<String>);

impl PermissionSet {
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(codes.into_iter().map(Into::into).collect())
    }

    pub fn has(&self, code: &str) -> bool {
        self.0.contains(code)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Session permission state. Every code is refused until the set is loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PermissionState {
    #[default]
    Pending,
    Loaded(PermissionSet),
    /// No user id in the entry URL, or the identity service failed.
    Unavailable,
}

impl PermissionState {
    pub fn has_permission(&self, code: &str) -> bool {
        match self {
            PermissionState::Loaded(set) => set.has(code),
            PermissionState::Pending | PermissionState::Unavailable => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PermissionState::Pending)
    }
}

/// Flag that lets exactly one caller start the permission load.
#[derive(Debug, Clone, Default)]
pub struct LoadOnce(Arc<AtomicBool>);

impl LoadOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` for the first caller only.
    pub fn try_begin(&self) -> bool {
        self.0
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::system::permissions::{FINANCIAL_INDICATORS, PRODUCER_GRAIN_STOCK};

    #[test]
    fn test_pending_and_unavailable_refuse_everything() {
        assert!(!PermissionState::Pending.has_permission(FINANCIAL_INDICATORS));
        assert!(!PermissionState::Unavailable.has_permission(FINANCIAL_INDICATORS));
    }

    #[test]
    fn test_loaded_set_answers_by_membership() {
        let state = PermissionState::Loaded(PermissionSet::from_codes([FINANCIAL_INDICATORS]));
        assert!(state.has_permission(FINANCIAL_INDICATORS));
        assert!(!state.has_permission(PRODUCER_GRAIN_STOCK));
    }

    #[test]
    fn test_load_once_admits_single_caller() {
        let flag = LoadOnce::new();
        let rerender = flag.clone();
        assert!(flag.try_begin());
        assert!(!rerender.try_begin());
        assert!(!flag.try_begin());
    }
}
