use fleetload::util::AllocConfig;
use serde::{Deserialize, Serialize};

/// Configuration of a command line run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct CliConfig {
    /// Configuration of the allocator itself
    pub alloc_config: AllocConfig,
    /// Run the first-fit allocator on the pending pool before replaying any moves
    pub auto_allocate: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            alloc_config: AllocConfig::default(),
            auto_allocate: false,
        }
    }
}
