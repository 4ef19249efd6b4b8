//! Submission seam between the wizard and the intake service.
//!
//! The wizard never talks to a network; it hands the validated record to
//! whatever [`SubmitApplication`] implementation the caller supplies. A real
//! deployment would put the intake API client (with its retry policy and
//! async status reporting) behind this trait; [`LoggingSubmitter`] is the
//! reference stand-in that just logs the record.

use thiserror::Error;
use tracing::info;

use crate::models::ApplicationForm;

const CONFIRMATION: &str = "Pre-approval application submitted successfully! \
                            Our team will contact you within 24 hours.";

/// Errors the submission collaborator may report back.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// The intake service looked at the record and refused it.
    #[error("intake service rejected the application: {0}")]
    Rejected(String),

    /// The intake service could not be reached.
    #[error("intake service unavailable: {0}")]
    Unavailable(String),
}

/// What the applicant sees after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReceipt {
    pub confirmation: String,
}

/// Receives a complete, already-validated application record.
pub trait SubmitApplication {
    fn submit(
        &mut self,
        application: &ApplicationForm,
    ) -> Result<SubmissionReceipt, SubmissionError>;
}

/// Reference collaborator: logs the record and confirms unconditionally.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubmitter;

impl SubmitApplication for LoggingSubmitter {
    fn submit(
        &mut self,
        application: &ApplicationForm,
    ) -> Result<SubmissionReceipt, SubmissionError> {
        info!(?application, "pre-approval application submitted");
        Ok(SubmissionReceipt {
            confirmation: CONFIRMATION.to_string(),
        })
    }
}
