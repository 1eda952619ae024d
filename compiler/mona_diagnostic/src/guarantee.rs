//! Type-level proof that an error was emitted.

/// Proof that at least one error diagnostic was emitted.
///
/// Cannot be constructed outside this crate; the only sources are
/// `DiagnosticQueue::emit_error` and `from_error_count`. Code paths that
/// drop a work item can require this token, making a silent drop a type
/// error rather than a latent bug.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ErrorGuaranteed(());

impl ErrorGuaranteed {
    pub(crate) const fn new() -> Self {
        ErrorGuaranteed(())
    }

    /// Obtain proof from an externally tracked error count.
    ///
    /// Returns `None` when the count is zero.
    pub fn from_error_count(count: usize) -> Option<Self> {
        if count > 0 {
            Some(ErrorGuaranteed(()))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nonzero_count_yields_proof() {
        assert!(ErrorGuaranteed::from_error_count(1).is_some());
        assert!(ErrorGuaranteed::from_error_count(100).is_some());
    }

    #[test]
    fn zero_count_yields_none() {
        assert!(ErrorGuaranteed::from_error_count(0).is_none());
    }
}
