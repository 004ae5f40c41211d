//! Recoverable conditions collected during a run.
//!
//! Everything that is only warned about (dropped configuration keys, optional
//! libraries that could not be staged, a Java home mismatch) is recorded here
//! as well as logged, so callers and tests can inspect it.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Info,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub level: Level,
    /// What the diagnostic is about: a key, a library, a path.
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn warn(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let subject = subject.into();
        let message = message.into();
        tracing::warn!(%subject, "{message}");
        self.items.push(Diagnostic {
            level: Level::Warn,
            subject,
            message,
        });
    }

    pub fn info(&mut self, subject: impl Into<String>, message: impl Into<String>) {
        let subject = subject.into();
        let message = message.into();
        tracing::info!(%subject, "{message}");
        self.items.push(Diagnostic {
            level: Level::Info,
            subject,
            message,
        });
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter().filter(|d| d.level == Level::Warn)
    }

    /// Whether any diagnostic is about `subject`.
    pub fn mentions(&self, subject: &str) -> bool {
        self.items.iter().any(|d| d.subject == subject)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
