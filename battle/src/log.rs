//! Logging utilities
//!
//! Thin helpers over the `log` facade so call sites stay one line. The
//! library never installs a logger; the host decides where output goes.

#![allow(unused)]

const TARGET: &str = "mb-battle";

/// Log an info message
#[inline(always)]
pub fn info(msg: &str) {
    log::info!(target: TARGET, "{msg}");
}

/// Log a warning message
#[inline(always)]
pub fn warn(msg: &str) {
    log::warn!(target: TARGET, "{msg}");
}

/// Log a debug message with a label
#[inline(always)]
pub fn debug(label: &str, msg: &str) {
    log::debug!(target: TARGET, "[{label}] {msg}");
}

/// Log the outcome of a finished battle
#[inline(always)]
pub fn battle_summary(winner: &str, ticks: u32, actions: usize, allies_alive: usize, enemies_alive: usize) {
    log::info!(
        target: TARGET,
        "battle finished: winner={winner} ticks={ticks} actions={actions} allies_alive={allies_alive} enemies_alive={enemies_alive}"
    );
}
