// ID Provider Port (for deterministic testing)

use std::sync::atomic::{AtomicU64, Ordering};

/// ID provider interface (allows deterministic IDs in tests)
#[cfg_attr(test, mockall::automock)]
pub trait IdProvider: Send + Sync {
    /// Generate a new unique recipe ID
    fn generate_id(&self) -> String;
}

/// UUID v4 provider (production)
pub struct UuidProvider;

impl IdProvider for UuidProvider {
    fn generate_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Counter-based provider yielding `recipe-1`, `recipe-2`, ...
///
/// Each instance has its own counter, so two stores built in the same test
/// process see the same sequence.
#[derive(Default)]
pub struct SequentialIdProvider {
    counter: AtomicU64,
}

impl SequentialIdProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdProvider for SequentialIdProvider {
    fn generate_id(&self) -> String {
        let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
        format!("recipe-{}", n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_provider_unique() {
        let provider = UuidProvider;
        let ids: HashSet<String> = (0..100).map(|_| provider.generate_id()).collect();
        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_sequential_provider() {
        let provider = SequentialIdProvider::new();
        assert_eq!(provider.generate_id(), "recipe-1");
        assert_eq!(provider.generate_id(), "recipe-2");

        let other = SequentialIdProvider::new();
        assert_eq!(other.generate_id(), "recipe-1");
    }
}
