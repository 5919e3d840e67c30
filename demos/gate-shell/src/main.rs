//! gate-shell — interactive front end for one boarding gate.
//!
//! Reads one command per line from stdin, runs it against a `Gate`, and
//! prints the result.  Logs go to stderr; set `RUST_LOG=debug` to see every
//! check-in and admission.
//!
//! ```text
//! > CHECKIN John 2 101
//! + John checked in to Business Class in group 101
//! > BOARD
//! ```

mod command;
mod session;

#[cfg(test)]
mod tests;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use bq_gate::Gate;

use session::{Outcome, Session};

/// Initialize the tracing subscriber.  `RUST_LOG` controls the level
/// (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    info!("gate shell starting");

    let mut session = Session::new(Gate::new());
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "{}", session::WELCOME)?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        match session.handle_line(&line?) {
            Outcome::Silent => {}
            Outcome::Print(text) => writeln!(stdout, "{text}")?,
            Outcome::Exit(text) => {
                writeln!(stdout, "{text}")?;
                break;
            }
        }
    }

    info!("gate shell exiting");
    Ok(())
}
