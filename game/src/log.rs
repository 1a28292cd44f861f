//! Logging utilities
//!
//! Same shape as the battle crate's helpers, under the `mb-game` target.

#![allow(unused)]

const TARGET: &str = "mb-game";

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

/// Log game state summary
#[inline(always)]
pub fn state_summary(phase: &str, turn: u32, coins: u32, bench_count: usize, team_count: usize) {
    log::debug!(
        target: TARGET,
        "[STATE] phase={phase} turn={turn} coins={coins} bench={bench_count} team={team_count}"
    );
}

/// Log an action being performed
#[inline(always)]
pub fn action(name: &str, details: &str) {
    log::debug!(target: TARGET, "[ACTION] {name}: {details}");
}

/// Log action result
#[inline(always)]
pub fn result(success: bool, msg: &str) {
    if success {
        log::debug!(target: TARGET, "[OK] {msg}");
    } else {
        log::info!(target: TARGET, "[REJECTED] {msg}");
    }
}
