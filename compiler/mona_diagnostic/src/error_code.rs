use std::fmt;

/// Error codes for all processor diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Analyzer errors
/// - E2xxx: Generator errors
/// - E9xxx: Internal processor errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Analyzer Errors (E1xxx)
    /// `@MonadicFor` applied to an interface
    E1001,
    /// Wrapper marker not parameterized with a class type
    E1002,
    /// Wrapper argument is not monadic
    E1003,

    // Generator Errors (E2xxx)
    /// Companion class name collides with an existing declaration
    E2001,

    // Internal Errors (E9xxx)
    /// Internal invariant violation
    E9001,
}

impl ErrorCode {
    /// The code as it appears in output, e.g. `"E1001"`.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E2001 => "E2001",
            ErrorCode::E9001 => "E9001",
        }
    }

    /// One-line description for documentation and `--explain` output.
    pub const fn description(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "@MonadicFor cannot be applied to interfaces",
            ErrorCode::E1002 => "wrapper marker must be parameterized with a class type",
            ErrorCode::E1003 => "wrapper argument is not monadic",
            ErrorCode::E2001 => "generated companion name collides with an existing declaration",
            ErrorCode::E9001 => "internal invariant violation",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(ErrorCode::E1001.to_string(), "E1001");
        assert_eq!(ErrorCode::E9001.as_str(), "E9001");
    }

    #[test]
    fn descriptions_are_nonempty() {
        for code in [
            ErrorCode::E1001,
            ErrorCode::E1002,
            ErrorCode::E1003,
            ErrorCode::E2001,
            ErrorCode::E9001,
        ] {
            assert!(!code.description().is_empty());
        }
    }
}
