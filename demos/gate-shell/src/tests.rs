//! Tests for command parsing and session rendering.

use std::path::PathBuf;

use bq_gate::Gate;

use crate::command::{Command, ParseError, parse_command};
use crate::session::{Outcome, Session};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn printed(outcome: Outcome) -> String {
    match outcome {
        Outcome::Print(text) => text,
        other => panic!("expected printed output, got {other:?}"),
    }
}

// ── Parsing ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod parse_tests {
    use super::*;

    #[test]
    fn check_in_with_and_without_group() {
        assert_eq!(
            parse_command("CHECKIN John 2 101"),
            Ok(Some(Command::CheckIn { name: "John".into(), class: 2, group: 101 }))
        );
        assert_eq!(
            parse_command("checkin Ann 6"),
            Ok(Some(Command::CheckIn { name: "Ann".into(), class: 6, group: 0 }))
        );
    }

    #[test]
    fn check_in_argument_errors() {
        assert_eq!(parse_command("CHECKIN John"), Err(ParseError::Usage("CHECKIN <name> <class> [group_id]")));
        assert_eq!(parse_command("CHECKIN John two"), Err(ParseError::ClassNotNumber));
        assert_eq!(parse_command("CHECKIN John 2 x"), Err(ParseError::GroupNotNumber));
        assert_eq!(parse_command("CHECKIN John 2 -4"), Err(ParseError::GroupNotNumber));
    }

    #[test]
    fn capacity_command() {
        assert_eq!(parse_command("SET_GATE_CAPACITY 3"), Ok(Some(Command::SetGateCapacity(3))));
        assert_eq!(parse_command("SET_GATE_CAPACITY -1"), Ok(Some(Command::SetGateCapacity(-1))));
        assert_eq!(parse_command("SET_GATE_CAPACITY"), Err(ParseError::Usage("SET_GATE_CAPACITY <number>")));
        assert_eq!(parse_command("SET_GATE_CAPACITY many"), Err(ParseError::CapacityNotNumber));
    }

    #[test]
    fn bare_keywords() {
        assert_eq!(parse_command("board"), Ok(Some(Command::Board)));
        assert_eq!(parse_command("  STATUS  "), Ok(Some(Command::Status)));
        assert_eq!(parse_command("Help"), Ok(Some(Command::Help)));
        assert_eq!(parse_command("EXIT"), Ok(Some(Command::Exit)));
        assert_eq!(parse_command("LOAD m.csv"), Ok(Some(Command::Load(PathBuf::from("m.csv")))));
    }

    #[test]
    fn blank_and_unknown() {
        assert_eq!(parse_command("   "), Ok(None));
        assert!(matches!(parse_command("FLY"), Err(ParseError::Unknown(_))));
    }
}

// ── Session ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn check_in_confirmation_text() {
        let mut s = Session::new(Gate::new());
        assert_eq!(
            printed(s.handle_line("CHECKIN John 2 101")),
            "+ John checked in to Business Class in group 101"
        );
        assert_eq!(printed(s.handle_line("CHECKIN Ann 0")), "+ Ann checked in to Wheelchair");
    }

    #[test]
    fn errors_do_not_end_session() {
        let mut s = Session::new(Gate::new());
        assert!(printed(s.handle_line("CHECKIN A 9")).starts_with("Error:"));
        assert!(printed(s.handle_line("SET_GATE_CAPACITY 0")).starts_with("Error:"));
        assert!(printed(s.handle_line("WHAT")).starts_with("Unknown command"));
        assert_eq!(s.handle_line(""), Outcome::Silent);
        assert!(printed(s.handle_line("STATUS")).contains("Gate capacity: 5"));
    }

    #[test]
    fn board_renders_group_header() {
        let mut s = Session::new(Gate::new());
        s.handle_line("CHECKIN Ana 1");
        s.handle_line("CHECKIN Ben 2 7");
        s.handle_line("CHECKIN Cy 2 7");
        let text = printed(s.handle_line("BOARD"));
        assert!(text.contains("  Ana\nBoarding group 7:\n  Ben\n  Cy\n"), "{text}");
        assert!(text.contains("Total boarded this round: 3 passengers"));
    }

    #[test]
    fn board_with_nothing_waiting() {
        let mut s = Session::new(Gate::new());
        assert!(printed(s.handle_line("BOARD")).ends_with("No passengers to board."));
    }

    #[test]
    fn deferred_group_is_reported() {
        let mut s = Session::new(Gate::new());
        s.handle_line("SET_GATE_CAPACITY 1");
        s.handle_line("CHECKIN A 3 4");
        s.handle_line("CHECKIN B 3 4");
        let text = printed(s.handle_line("BOARD"));
        assert!(text.contains("Group 4 deferred"));
        assert!(text.contains("No passengers to board."));
    }

    #[test]
    fn status_lists_every_class() {
        let mut s = Session::new(Gate::new());
        s.handle_line("CHECKIN A 5");
        let text = printed(s.handle_line("STATUS"));
        assert!(text.contains("  Economy: 1 waiting"));
        assert!(text.contains("  Standby: 0 waiting"));
        assert!(text.contains("  Total waiting: 1"));
    }

    #[test]
    fn exit_ends_session() {
        let mut s = Session::new(Gate::new());
        assert!(matches!(s.handle_line("exit"), Outcome::Exit(_)));
    }
}
