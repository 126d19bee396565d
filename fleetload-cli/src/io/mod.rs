use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use fleetload::io::ext_repr::{ExtInstance, ExtMove};
use log::{LevelFilter, info};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::EPOCH;

pub mod cli;
pub mod listener;
pub mod output;

pub fn read_instance(path: &Path) -> Result<ExtInstance> {
    read_json(path).context("could not read instance file")
}

pub fn read_moves(path: &Path) -> Result<Vec<ExtMove>> {
    read_json(path).context("could not read moves file")
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).with_context(|| format!("could not parse {}", path.display()))
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open solution file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write solution file: {}", path.display()))?;

    info!(
        "[IO] solution written to file://{}",
        fs::canonicalize(path)?.to_string_lossy()
    );
    Ok(())
}

/// Installs a `fern` logger on stdout. Every line is prefixed with its level, the time elapsed since
/// [`EPOCH`] and the name of the emitting thread.
pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            let handle = std::thread::current();
            let prefix = format!(
                "[{}] [{}] <{}>",
                record.level(),
                elapsed_hms(EPOCH.elapsed()),
                handle.name().unwrap_or("-"),
            );
            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stdout())
        .apply()?;
    info!("[EPOCH]: {:.0}", jiff::Timestamp::now());
    Ok(())
}

/// `hh:mm:ss` rendering of a duration, hours are not wrapped
fn elapsed_hms(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:0>2}:{:0>2}:{:0>2}", secs / 3600, (secs / 60) % 60, secs % 60)
}
