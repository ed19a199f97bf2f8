pub mod calculator;
pub mod draft;
pub mod errors;
pub mod materials;
pub mod submission;
pub mod wizard;

pub use crate::draft::{DraftField, OrderDraft, Role};
pub use crate::errors::{FailedItem, SubmissionError, WizardError};
pub use crate::submission::{OrderSubmitter, SubmitOrder};
pub use crate::wizard::{OrderWizard, PendingOrder, WizardState, WizardStep};
