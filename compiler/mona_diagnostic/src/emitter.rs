//! Diagnostic emitters.
//!
//! Human-readable output for collected diagnostics. Mona does not own the
//! host sources, so labels render with byte offsets; snippet rendering is
//! the host toolchain's job.

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const WARNING: &str = "\x1b[1;33m"; // Bold yellow
    pub const NOTE: &str = "\x1b[1;36m"; // Bold cyan
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Returns "s" for plural counts, "" for singular.
#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode for the terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` decides; it is ignored otherwise.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Trait for emitting diagnostics.
pub trait DiagnosticEmitter {
    /// Emit a single diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic);

    /// Emit multiple diagnostics.
    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(diag);
        }
    }

    /// Flush any buffered output.
    fn flush(&mut self);

    /// Emit a summary of errors/warnings.
    fn emit_summary(&mut self, error_count: usize, warning_count: usize);
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a new terminal emitter with explicit color mode.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Create an emitter that never colors (useful for capturing output).
    pub fn plain(writer: W) -> Self {
        Self::with_color_mode(writer, ColorMode::Never, false)
    }

    /// Consume the emitter, returning the writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn severity_color(&self, severity: Severity) -> &'static str {
        if !self.colors {
            return "";
        }
        match severity {
            Severity::Error => colors::ERROR,
            Severity::Warning => colors::WARNING,
            Severity::Note => colors::NOTE,
            Severity::Help => colors::HELP,
        }
    }

    fn reset(&self) -> &'static str {
        if self.colors {
            colors::RESET
        } else {
            ""
        }
    }

    fn bold(&self) -> &'static str {
        if self.colors {
            colors::BOLD
        } else {
            ""
        }
    }

    fn write_diagnostic(&mut self, diag: &Diagnostic) -> io::Result<()> {
        let color = self.severity_color(diag.severity);
        let bold = self.bold();
        let reset = self.reset();
        writeln!(
            self.writer,
            "{color}{}[{}]{reset}{bold}: {}{reset}",
            diag.severity, diag.code, diag.message
        )?;
        for label in &diag.labels {
            let marker = if label.is_primary { "-->" } else { ":::" };
            writeln!(
                self.writer,
                "  {marker} bytes {}..{}: {}",
                label.span.start, label.span.end, label.message
            )?;
        }
        for note in &diag.notes {
            writeln!(self.writer, "  note: {note}")?;
        }
        if let Some(help) = &diag.help {
            writeln!(self.writer, "  help: {help}")?;
        }
        Ok(())
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Output errors are not recoverable mid-report; drop them the way
        // a compiler keeps going when stderr is closed.
        let _ = self.write_diagnostic(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            let _ = writeln!(
                self.writer,
                "{}{error_count} error{} emitted{}",
                self.severity_color(Severity::Error),
                plural_s(error_count),
                self.reset()
            );
        }
        if warning_count > 0 {
            let _ = writeln!(
                self.writer,
                "{}{warning_count} warning{} emitted{}",
                self.severity_color(Severity::Warning),
                plural_s(warning_count),
                self.reset()
            );
        }
    }
}
