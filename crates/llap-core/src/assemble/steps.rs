//! Ordered assembly steps tagged mandatory or optional

use crate::diagnostics::Diagnostics;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Failure aborts the run.
    Mandatory,
    /// Failure is recorded as a diagnostic and the run continues.
    Optional,
}

type Action<'a> = Box<dyn FnOnce() -> Result<()> + 'a>;

struct Step<'a> {
    name: String,
    kind: StepKind,
    action: Action<'a>,
}

/// What a runner did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepReport {
    pub completed: Vec<String>,
    /// Optional steps that failed and were skipped.
    pub skipped: Vec<String>,
}

impl StepReport {
    pub fn merge(&mut self, other: StepReport) {
        self.completed.extend(other.completed);
        self.skipped.extend(other.skipped);
    }
}

/// Runs steps in insertion order, stopping at the first mandatory failure.
#[derive(Default)]
pub struct StepRunner<'a> {
    steps: Vec<Step<'a>>,
}

impl<'a> StepRunner<'a> {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn mandatory(
        self,
        name: impl Into<String>,
        action: impl FnOnce() -> Result<()> + 'a,
    ) -> Self {
        self.push(name.into(), StepKind::Mandatory, Box::new(action))
    }

    pub fn optional(
        self,
        name: impl Into<String>,
        action: impl FnOnce() -> Result<()> + 'a,
    ) -> Self {
        self.push(name.into(), StepKind::Optional, Box::new(action))
    }

    fn push(mut self, name: String, kind: StepKind, action: Action<'a>) -> Self {
        self.steps.push(Step { name, kind, action });
        self
    }

    pub fn run(self, diagnostics: &mut Diagnostics) -> Result<StepReport> {
        let mut report = StepReport::default();

        for step in self.steps {
            tracing::debug!(step = %step.name, kind = ?step.kind, "running step");
            match ((step.action)(), step.kind) {
                (Ok(()), _) => report.completed.push(step.name),
                (Err(err), StepKind::Mandatory) => {
                    return Err(Error::StepFailed {
                        step: step.name,
                        source: Box::new(err),
                    });
                }
                (Err(err), StepKind::Optional) => {
                    diagnostics.warn(step.name.clone(), err.to_string());
                    report.skipped.push(step.name);
                }
            }
        }

        Ok(report)
    }
}
