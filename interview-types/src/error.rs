/// Error type for interview operations.
#[derive(Debug, thiserror::Error)]
pub enum InterviewError {
    /// A mutating operation was invoked after the interview completed.
    #[error("cannot perform this action on a completed interview")]
    Completed,

    /// A Script or Moderator failed; propagated unchanged through whichever
    /// engine call invoked it.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

impl InterviewError {
    /// Create a collaborator error from any error type.
    pub fn collaborator(err: impl Into<anyhow::Error>) -> Self {
        Self::Collaborator(err.into())
    }

    /// Check if this error is the terminal-state violation.
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_completed() {
        assert!(InterviewError::Completed.is_completed());
        assert!(!InterviewError::collaborator(anyhow::anyhow!("boom")).is_completed());
    }

    #[test]
    fn collaborator_preserves_message() {
        let err = InterviewError::collaborator(anyhow::anyhow!("backend exploded"));
        assert_eq!(err.to_string(), "backend exploded");
    }
}
