use thiserror::Error;

/// Why a refresh run ended without producing a new catalog file.
#[derive(Debug, Error)]
pub enum JobError {
    /// Connection failure, timeout, non-success status, or a broken body.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Anything else: bad JSON, client setup, file-system failures.
    #[error("unexpected error: {0:#}")]
    Unexpected(#[from] anyhow::Error),
}

impl JobError {
    pub fn kind(&self) -> &'static str {
        match self {
            JobError::Network(_) => "network",
            JobError::Unexpected(_) => "unexpected",
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, JobError::Network(_))
    }
}

#[cfg(test)]
mod tests {
    use super::JobError;
    use anyhow::anyhow;

    #[test]
    fn unexpected_errors_render_their_context_chain() {
        let err: JobError = anyhow!("expected value at line 1 column 1")
            .context("failed to decode catalog response")
            .into();
        assert_eq!(err.kind(), "unexpected");
        assert!(!err.is_network());
        assert_eq!(
            err.to_string(),
            "unexpected error: failed to decode catalog response: expected value at line 1 column 1"
        );
    }
}
