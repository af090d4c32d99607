// ==========================================
// Livestock Manager - operation timing
// ==========================================
// OpTimer wraps one API call and logs its duration together with
// the number of SQL statements it ran on the current thread.
// ==========================================

use rusqlite::Connection;
use std::cell::Cell;
use std::time::Instant;

/// Env var switching statement counting on (`1`) or off (`0`).
pub const SQL_COUNT_ENV: &str = "LIVESTOCK_SQL_COUNT";

thread_local! {
    static STATEMENTS: Cell<u64> = const { Cell::new(0) };
}

fn count_statement(_sql: &str) {
    STATEMENTS.with(|n| n.set(n.get().wrapping_add(1)));
}

fn statements_so_far() -> u64 {
    STATEMENTS.with(Cell::get)
}

/// Hooks the statement counter into `conn`.
///
/// Debug builds count by default; `LIVESTOCK_SQL_COUNT` overrides that.
/// Returns whether counting is active.
pub fn attach_statement_counter(conn: &mut Connection) -> bool {
    let enabled = std::env::var(SQL_COUNT_ENV)
        .map(|v| !matches!(v.trim(), "" | "0" | "false" | "off"))
        .unwrap_or(cfg!(debug_assertions));

    if enabled {
        conn.trace(Some(count_statement));
    } else {
        conn.trace(None);
    }
    enabled
}

/// Logs `elapsed_us` and `statements` for `op` when dropped.
pub struct OpTimer {
    op: &'static str,
    started: Instant,
    statements_at_start: u64,
}

impl OpTimer {
    pub fn start(op: &'static str) -> Self {
        Self {
            op,
            started: Instant::now(),
            statements_at_start: statements_so_far(),
        }
    }

    /// Statements run on this thread since `start`.
    pub fn statements(&self) -> u64 {
        statements_so_far().wrapping_sub(self.statements_at_start)
    }
}

impl Drop for OpTimer {
    fn drop(&mut self) {
        tracing::debug!(
            target: "livestock::timing",
            op = self.op,
            elapsed_us = self.started.elapsed().as_micros() as u64,
            statements = self.statements(),
            "operation finished"
        );
    }
}
