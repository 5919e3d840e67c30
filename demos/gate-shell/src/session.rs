//! Executes parsed commands against a gate and renders the results as text.

use std::fmt::Write;

use bq_gate::{BoardingReport, CheckInConfirmation, Gate, PriorityClass, StatusReport, load_manifest_csv};

use crate::command::{Command, parse_command};

pub const WELCOME: &str = "\
Welcome to Multi-Class Boarding System
==========================================

Available Commands:
  CHECKIN <name> <class> [group_id]
    Classes: 0=Wheelchair, 1=First, 2=Business, 3=Premium, 4=Economy+, 5=Economy, 6=Standby
  SET_GATE_CAPACITY <number>
  BOARD
  STATUS
  LOAD <manifest.csv>
  HELP
  EXIT

Example: CHECKIN John 2 101
==========================================
";

const HELP: &str = "\
Available Commands:
CHECKIN <name> <class> [group_id]
SET_GATE_CAPACITY <number>
BOARD
STATUS
LOAD <manifest.csv>
HELP
EXIT
";

/// What the shell should do after a line.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    Silent,
    Print(String),
    Exit(String),
}

pub struct Session {
    gate: Gate,
}

impl Session {
    pub fn new(gate: Gate) -> Self {
        Self { gate }
    }

    /// Parse and run one input line.  Errors are rendered, never propagated:
    /// a bad command must not end the session.
    pub fn handle_line(&mut self, line: &str) -> Outcome {
        match parse_command(line) {
            Ok(None)      => Outcome::Silent,
            Ok(Some(cmd)) => self.execute(cmd),
            Err(e)        => Outcome::Print(e.to_string()),
        }
    }

    fn execute(&mut self, cmd: Command) -> Outcome {
        let text = match cmd {
            Command::CheckIn { name, class, group } => match self.gate.check_in(name, class, group) {
                Ok(c)  => render_check_in(&c),
                Err(e) => format!("Error: {e}"),
            },
            Command::SetGateCapacity(value) => match self.gate.set_gate_capacity(value) {
                Ok(())  => format!("Gate capacity set to {}", self.gate.gate_capacity()),
                Err(e)  => format!("Error: {e}"),
            },
            Command::Board  => render_boarding(&self.gate.run_boarding_round()),
            Command::Status => render_status(&self.gate.snapshot()),
            Command::Load(path) => match load_manifest_csv(&mut self.gate, &path) {
                Ok(confirmations) => format!(
                    "Loaded {} passengers from {}",
                    confirmations.len(),
                    path.display()
                ),
                Err(e) => format!("Error: {e}"),
            },
            Command::Help => HELP.to_string(),
            Command::Exit => {
                return Outcome::Exit("\nThank you for using the Boarding System. Goodbye!".into());
            }
        };
        Outcome::Print(text)
    }
}

// ── Rendering ─────────────────────────────────────────────────────────────────

pub fn render_check_in(c: &CheckInConfirmation) -> String {
    let mut out = format!("+ {} checked in to {}", c.name, c.class_name());
    if let Some(g) = c.group {
        let _ = write!(out, " in group {}", g.0);
    }
    out
}

pub fn render_boarding(report: &BoardingReport) -> String {
    let mut out = String::from("\nBoarding passengers...\n");
    let mut current_group = None;
    for e in &report.events {
        if e.group != current_group {
            if let Some(g) = e.group {
                let _ = writeln!(out, "Boarding group {}:", g.0);
            }
            current_group = e.group;
        }
        let _ = writeln!(out, "  {}", e.name);
    }
    for g in &report.deferred {
        let _ = writeln!(out, "Group {} deferred: not enough room this round", g.0);
    }
    if report.nothing_admitted() {
        out.push_str("No passengers to board.");
    } else {
        let _ = writeln!(out, "Total boarded this round: {} passengers", report.admitted);
    }
    out
}

pub fn render_status(status: &StatusReport) -> String {
    let mut out = String::from("\nCurrent Boarding Status\n");
    for class in PriorityClass::ALL {
        let _ = writeln!(out, "  {}: {} waiting", class, status.waiting_in(class));
    }
    let _ = writeln!(out, "  Total waiting: {}", status.total_waiting);
    let _ = writeln!(out, "  Total boarded: {}", status.total_boarded);
    let _ = writeln!(out, "  Gate capacity: {}", status.gate_capacity);
    out
}
