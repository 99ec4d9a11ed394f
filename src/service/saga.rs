//! Explicit compensation log for the submission workflow.
//!
//! The submission path applies side effects in order (balance debit, record
//! insert, notifications). There is no surrounding transaction; instead,
//! every committed side effect is recorded here with its undo intent, and
//! on failure the committed steps are undone in reverse order. The unwind
//! is best-effort: a crash between the original side effect and the undo
//! can still leave balance and record inconsistent, which is an accepted
//! limitation of the design.

/// The undo intent for one committed side effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompensationStep {
    /// Credit back a balance debit.
    CreditBalance {
        /// The employee whose balance was debited.
        employee_id: String,
        /// The number of days to credit back.
        days: i64,
    },
    /// Delete a persisted vacation record.
    DeleteRecord {
        /// The id of the record to delete.
        record_id: String,
    },
}

/// An ordered log of committed side effects with paired undo intents.
#[derive(Debug, Default)]
pub struct CompensationLog {
    steps: Vec<CompensationStep>,
}

impl CompensationLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a committed side effect.
    pub fn push(&mut self, step: CompensationStep) {
        self.steps.push(step);
    }

    /// The committed steps in commit order.
    pub fn steps(&self) -> &[CompensationStep] {
        &self.steps
    }

    /// True when nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the log, yielding the undo intents in reverse commit order.
    pub fn into_unwind_order(self) -> Vec<CompensationStep> {
        let mut steps = self.steps;
        steps.reverse();
        steps
    }
}
