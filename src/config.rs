/// Row cap applied by the limited finders when no explicit limit is given.
pub const DEFAULT_LIMIT: u64 = 10;

/// Tuning knobs for a [`Repository`](crate::Repository).
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Fallback limit for `find_limited` / `find_ordered_limited` calls
    /// that pass `None`.
    pub default_limit: u64,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            default_limit: DEFAULT_LIMIT,
        }
    }
}
