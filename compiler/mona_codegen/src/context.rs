//! Code generation context: an indent-aware source writer.

use mona_ir::{Name, StringInterner};

/// State carried while emitting one companion source file.
pub struct CodegenContext<'a> {
    /// String interner for resolving names.
    pub interner: &'a StringInterner,
    /// Current indentation level.
    indent: usize,
    /// Generated source output.
    output: String,
}

impl<'a> CodegenContext<'a> {
    /// Create a new codegen context.
    pub fn new(interner: &'a StringInterner) -> Self {
        Self {
            interner,
            indent: 0,
            output: String::with_capacity(4096),
        }
    }

    /// Resolve a name to its string representation.
    #[inline]
    pub fn resolve_name(&self, name: Name) -> &'a str {
        self.interner.lookup(name)
    }

    /// Increase indentation level.
    pub fn indent(&mut self) {
        self.indent += 1;
    }

    /// Decrease indentation level.
    pub fn dedent(&mut self) {
        debug_assert!(self.indent > 0, "dedent called with zero indent");
        self.indent = self.indent.saturating_sub(1);
    }

    /// Write a string to output without indentation or newline.
    pub fn write(&mut self, s: &str) {
        self.output.push_str(s);
    }

    /// Write a line to output (with indentation and newline).
    pub fn writeln(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.output.push_str("    ");
        }
        self.output.push_str(s);
        self.output.push('\n');
    }

    /// Write a blank line.
    pub fn newline(&mut self) {
        self.output.push('\n');
    }

    /// Consume the context, returning the generated source.
    pub fn finish(self) -> String {
        self.output
    }
}
