use std::sync::LazyLock;
use std::time::Instant;

use anyhow::{Context, Result};
use fleetload::entities::AllocProblem;
use fleetload::io::ext_repr::{ExtInstance, ExtMove};
use fleetload::session::Session;
use log::info;

use crate::config::CliConfig;
use crate::io::listener::LogListener;
use crate::io::output::AllocOutput;

pub mod config;
pub mod io;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Replays a sequence of moves (optionally preceded by an automatic allocation) on an instance
/// and returns the saved end state. Rejected moves are reported but do not abort the run.
pub fn run(ext_instance: ExtInstance, ext_moves: &[ExtMove], config: CliConfig) -> Result<AllocOutput> {
    let instance = fleetload::io::import(&ext_instance)?;
    let transfers = ext_moves
        .iter()
        .enumerate()
        .map(|(i, m)| {
            fleetload::io::import_move(&instance, m).with_context(|| format!("invalid move #{i}"))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut session = Session::new(AllocProblem::new(instance), LogListener::default());

    if config.auto_allocate {
        session.auto_allocate();
    }

    let n_rejected = transfers
        .into_iter()
        .filter(|&t| session.transfer(t).is_err())
        .count();

    info!(
        "[RUN] replayed {} moves, {} rejected",
        ext_moves.len(),
        n_rejected
    );

    let solution = session.save().clone();
    let output = AllocOutput {
        solution: fleetload::io::export(&solution, &session.problem.instance, &config.alloc_config),
        n_rejected,
        notifications: session.listener.messages,
        instance: ext_instance,
        config,
    };

    Ok(output)
}
