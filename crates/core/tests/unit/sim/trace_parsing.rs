//! Trace Line Parsing Tests.

use csim_core::common::TraceError;
use csim_core::sim::{TraceOp, parse_line};
use rstest::rstest;

#[rstest]
#[case::plain_load("l 1fffff50", TraceOp::load(0x1fff_ff50))]
#[case::plain_store("s 0", TraceOp::store(0))]
#[case::prefixed("l 0x7ff000a8", TraceOp::load(0x7ff0_00a8))]
#[case::upper_prefix("s 0XDEADBEEF", TraceOp::store(0xdead_beef))]
#[case::size_column("l 1fffff50 4", TraceOp::load(0x1fff_ff50))]
#[case::tabs_and_padding("  s\t10\t", TraceOp::store(0x10))]
#[case::max_address("l ffffffff", TraceOp::load(u32::MAX))]
fn valid_lines(#[case] line: &str, #[case] op: TraceOp) {
    assert_eq!(parse_line(1, line).ok(), Some(op));
}

/// A line without an operation is malformed, not skipped.
#[rstest]
#[case("")]
#[case("   ")]
#[case("\t")]
fn blank_lines_are_rejected(#[case] line: &str) {
    assert!(matches!(
        parse_line(4, line),
        Err(TraceError::MissingOperation { line: 4 })
    ));
}

#[rstest]
#[case("x 10", "x")]
#[case("L 10", "L")]
#[case("load 10", "load")]
fn invalid_operation(#[case] line: &str, #[case] token: &str) {
    match parse_line(9, line) {
        Err(TraceError::InvalidOperation { line, op }) => {
            assert_eq!(line, 9);
            assert_eq!(op, token);
        }
        other => panic!("expected InvalidOperation, got {other:?}"),
    }
}

#[test]
fn missing_address() {
    assert!(matches!(
        parse_line(3, "s"),
        Err(TraceError::MissingAddress { line: 3 })
    ));
}

#[rstest]
#[case("zz")]
#[case("0x")]
#[case("-4")]
#[case("100000000")]
fn invalid_address(#[case] token: &str) {
    match parse_line(5, &format!("l {token}")) {
        Err(TraceError::InvalidAddress { line, value }) => {
            assert_eq!(line, 5);
            assert_eq!(value, token);
        }
        other => panic!("expected InvalidAddress, got {other:?}"),
    }
}

/// The operation is checked before the address.
#[test]
fn operation_error_takes_precedence() {
    assert!(matches!(
        parse_line(1, "q zz"),
        Err(TraceError::InvalidOperation { .. })
    ));
}
