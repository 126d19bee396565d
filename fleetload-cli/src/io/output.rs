use fleetload::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::CliConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct AllocOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: CliConfig,
    /// Number of replayed moves that were rejected
    pub n_rejected: usize,
    /// Every notification raised during the run, in order
    pub notifications: Vec<String>,
}
