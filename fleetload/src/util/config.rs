use serde::{Deserialize, Serialize};

/// Configuration of the allocator's derived metrics
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct AllocConfig {
    /// Utilization (in percent) above which an allocation is reported as near its limit
    pub near_limit_pct: f64,
}

impl Default for AllocConfig {
    fn default() -> Self {
        Self {
            near_limit_pct: 90.0,
        }
    }
}
