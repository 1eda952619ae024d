use pretty_assertions::assert_eq;

use mona_ir::Span;

use crate::{cannot_apply_to_interface, Diagnostic, Label};

use super::*;

fn error_at(start: u32) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9001, format!("error at {start}"))
        .with_label(Label::primary(Span::new(start, start + 1), "here"))
}

#[test]
fn collects_and_counts_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());

    queue.add(error_at(3));
    queue.add(Diagnostic::warning(ErrorCode::E9001, "meh"));

    assert_eq!(queue.error_count(), 1);
    assert!(queue.has_errors().is_some());
}

#[test]
fn flush_sorts_by_primary_span() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.add(error_at(50));
    queue.add(error_at(10));
    queue.add(error_at(30));

    let flushed = queue.flush();
    let starts: Vec<u32> = flushed
        .iter()
        .filter_map(|d| d.primary_span())
        .map(|s| s.start)
        .collect();
    assert_eq!(starts, vec![10, 30, 50]);

    // Queue is reset after flush.
    assert_eq!(queue.error_count(), 0);
    assert!(queue.flush().is_empty());
}

#[test]
fn deduplicates_same_code_and_span() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(cannot_apply_to_interface(Span::new(5, 9), "Boxish")));
    assert!(!queue.add(cannot_apply_to_interface(Span::new(5, 9), "Boxish")));
    assert_eq!(queue.error_count(), 1);

    // Different span is not a duplicate.
    assert!(queue.add(cannot_apply_to_interface(Span::new(40, 44), "Other")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn error_limit_drops_excess() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: false,
    });
    assert!(queue.add(error_at(1)));
    assert!(queue.add(error_at(2)));
    assert!(queue.limit_reached());
    assert!(!queue.add(error_at(3)));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn emit_error_returns_proof() {
    let mut queue = DiagnosticQueue::new();
    let _guarantee: ErrorGuaranteed = queue.emit_error(error_at(7));
    assert_eq!(queue.error_count(), 1);
}
