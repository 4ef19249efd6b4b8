pub mod calculations;
pub mod models;
pub mod wizard;

pub use models::*;
pub use wizard::{
    LoggingSubmitter, SubmissionError, SubmissionReceipt, SubmitApplication, SubmitError,
    ValidationErrors, Wizard, WizardStep,
};
