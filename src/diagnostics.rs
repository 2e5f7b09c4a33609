//! Structured diagnostics reported back to the host instead of raised as
//! fatal failures.
//!
//! Every lifecycle call takes a `&mut Diagnostics` and appends to it; callers
//! inspect [`Diagnostics::has_errors`] to decide whether to proceed. Errors
//! accumulate; validation reports every problem it finds, not just the first.

use std::fmt;

/// Severity of a single diagnostic record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The operation cannot proceed.
    Error,
    /// The operation continued with degraded results.
    Warning,
}

/// A single structured diagnostic, optionally scoped to a configuration
/// attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Whether this record blocks the operation.
    pub severity: Severity,
    /// Configuration attribute this diagnostic is scoped to, if any.
    pub attribute: Option<String>,
    /// Short, one-line description of the problem.
    pub summary: String,
    /// Longer explanation with remediation hints.
    pub detail: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let severity = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        match &self.attribute {
            Some(attribute) => {
                write!(f, "{severity} [{attribute}]: {}: {}", self.summary, self.detail)
            }
            None => write!(f, "{severity}: {}: {}", self.summary, self.detail),
        }
    }
}

/// An ordered collection of diagnostics accumulated across an operation.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty diagnostics collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an error that is not tied to a specific attribute.
    pub fn add_error(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            attribute: None,
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    /// Appends an error scoped to a named configuration attribute.
    pub fn add_attribute_error(
        &mut self,
        attribute: impl Into<String>,
        summary: impl Into<String>,
        detail: impl Into<String>,
    ) {
        self.entries.push(Diagnostic {
            severity: Severity::Error,
            attribute: Some(attribute.into()),
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    /// Appends a non-blocking warning.
    pub fn add_warning(&mut self, summary: impl Into<String>, detail: impl Into<String>) {
        self.entries.push(Diagnostic {
            severity: Severity::Warning,
            attribute: None,
            summary: summary.into(),
            detail: detail.into(),
        });
    }

    /// Returns `true` if any entry has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.entries.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if no diagnostics were recorded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the recorded diagnostics in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
