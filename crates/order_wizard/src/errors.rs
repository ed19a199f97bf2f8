use thiserror::Error;

use base::entities::material::{MaterialCategoryId, MaterialId};
use base::entities::order::OrderId;
use base::entities::Order;
use stair_api::ApiError;

use crate::draft::{DraftField, Role};
use crate::wizard::{WizardState, WizardStep};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedItem {
    pub role: Role,
    pub error: ApiError,
}

fn join_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn join_failed_roles(failed: &[FailedItem]) -> String {
    join_roles(&failed.iter().map(|item| item.role).collect::<Vec<_>>())
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmissionError {
    #[error("the draft is incomplete: {field} is missing")]
    ValidationFailed { field: DraftField },

    #[error("failed to look up the {role} material #{material_id}")]
    MaterialLookupFailed {
        role: Role,
        material_id: MaterialId,
        #[source]
        source: ApiError,
    },

    #[error(
        "material #{material_id} selected as {role} belongs to category {actual}, expected {expected}"
    )]
    CategoryMismatch {
        role: Role,
        material_id: MaterialId,
        expected: MaterialCategoryId,
        actual: MaterialCategoryId,
    },

    /// The create call failed or its reply could not be read, so the order
    /// may or may not exist remotely.
    #[error("the order could not be saved")]
    OrderCreateFailed(#[source] ApiError),

    /// The header exists remotely; only the listed items are missing from it.
    #[error(
        "order {} was created but the {} item(s) could not be attached (attached: {})",
        .order.id,
        join_failed_roles(.failed),
        join_roles(.attached)
    )]
    PartialSubmissionFailed {
        order: Order,
        attached: Vec<Role>,
        failed: Vec<FailedItem>,
    },
}

impl SubmissionError {
    pub fn failed_roles(&self) -> Vec<Role> {
        match self {
            SubmissionError::PartialSubmissionFailed { failed, .. } => {
                failed.iter().map(|item| item.role).collect()
            }
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WizardError {
    #[error("{field} is required to leave the {step} step")]
    ValidationFailed { step: WizardStep, field: DraftField },

    #[error("cannot {transition} from {state}")]
    InvalidTransition {
        state: WizardState,
        transition: &'static str,
    },

    #[error("order {0} already exists, its basic information can no longer change")]
    OrderAlreadyCreated(OrderId),

    #[error("the wizard is closed ({0})")]
    WizardClosed(WizardState),

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}
