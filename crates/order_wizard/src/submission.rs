use base::entities::{Order, OrderItemCreate};
use base::settings::WizardSettings;
use stair_api::StairApi;

use crate::draft::{DraftField, OrderDraft, Role};
use crate::errors::{FailedItem, SubmissionError};
use crate::materials::category_for_role;


/// Turns a finished draft into a remote order.
pub trait SubmitOrder {
    fn submit(&self, draft: &OrderDraft) -> Result<Order, SubmissionError>;

    /// Attaches the items of `roles` to an order that already exists, as after
    /// a partial submission. No new order header is created.
    fn attach_items(
        &self,
        draft: &OrderDraft,
        order: &Order,
        roles: &[Role],
    ) -> Result<(), SubmissionError>;
}

/// Creates the order header, then attaches the riser, tread and stringer
/// items in that order.
///
/// Items are attached one by one and every role is attempted even after a
/// failure. There is no rollback: when some items fail the header stays on
/// the remote side and the error lists what is attached and what is not;
/// [`SubmitOrder::attach_items`] then retries only the missing roles.
pub struct OrderSubmitter<'a, A: StairApi> {
    api: &'a A,
    settings: WizardSettings,
    target_logger: String,
}

impl<'a, A: StairApi> OrderSubmitter<'a, A> {
    pub fn new(api: &'a A, settings: WizardSettings, target_logger: impl Into<String>) -> Self {
        Self {
            api,
            settings,
            target_logger: target_logger.into(),
        }
    }

    fn verify_categories(&self, draft: &OrderDraft, roles: &[Role]) -> Result<(), SubmissionError> {
        for &role in roles {
            let material_id = draft
                .selection(role)
                .material_id()
                .ok_or_else(|| SubmissionError::ValidationFailed {
                    field: role.material_field(),
                })?;

            let material = self.api.get_material(material_id).map_err(|source| {
                SubmissionError::MaterialLookupFailed {
                    role,
                    material_id,
                    source,
                }
            })?;

            let expected = category_for_role(role, &self.settings.categories);
            if material.material_category_id != expected {
                return Err(SubmissionError::CategoryMismatch {
                    role,
                    material_id,
                    expected,
                    actual: material.material_category_id,
                });
            }
        }

        Ok(())
    }

    fn prepare_items(
        &self,
        draft: &OrderDraft,
        roles: &[Role],
    ) -> Result<Vec<(Role, OrderItemCreate)>, SubmissionError> {
        if draft.calculations().riser_cut_size().is_none() {
            return Err(SubmissionError::ValidationFailed {
                field: DraftField::StepWidth,
            });
        }

        // placeholder id, replaced once the header exists
        let items = roles
            .iter()
            .map(|&role| draft.to_order_item(role, 0).map(|item| (role, item)))
            .collect::<Result<Vec<(Role, OrderItemCreate)>, DraftField>>()
            .map_err(|field| SubmissionError::ValidationFailed { field })?;

        if self.settings.verify_material_categories {
            self.verify_categories(draft, roles)?;
        }

        Ok(items)
    }

    fn attach_prepared(
        &self,
        order: &Order,
        items: Vec<(Role, OrderItemCreate)>,
    ) -> (Vec<Role>, Vec<FailedItem>) {
        let target = self.target_logger.as_str();

        let mut attached = Vec::new();
        let mut failed = Vec::new();

        for (role, mut item) in items {
            item.order_id = order.id;

            match self.api.add_order_item(&item) {
                Ok(()) => {
                    log::info!(
                        target: target,
                        "{} item attached to order {}: {} pieces of material #{}",
                        role,
                        order.id,
                        item.quantity,
                        item.material_id
                    );
                    attached.push(role);
                }
                Err(error) => {
                    log::error!(
                        target: target,
                        "{} item was not attached to order {}: {}",
                        role,
                        order.id,
                        error
                    );
                    failed.push(FailedItem { role, error });
                }
            }
        }

        (attached, failed)
    }
}

impl<'a, A: StairApi> SubmitOrder for OrderSubmitter<'a, A> {
    fn submit(&self, draft: &OrderDraft) -> Result<Order, SubmissionError> {
        let target = self.target_logger.as_str();

        let order_create = draft
            .to_order_create()
            .map_err(|field| SubmissionError::ValidationFailed { field })?;
        let items = self.prepare_items(draft, &Role::ALL)?;

        let order = self.api.create_order(&order_create).map_err(|err| {
            log::error!(target: target, "the order could not be saved: {}", err);
            SubmissionError::OrderCreateFailed(err)
        })?;

        log::info!(
            target: target,
            "order {} created for customer {}",
            order.id,
            order.customer_id
        );

        let (attached, failed) = self.attach_prepared(&order, items);

        if failed.is_empty() {
            Ok(order)
        } else {
            Err(SubmissionError::PartialSubmissionFailed {
                order,
                attached,
                failed,
            })
        }
    }

    fn attach_items(
        &self,
        draft: &OrderDraft,
        order: &Order,
        roles: &[Role],
    ) -> Result<(), SubmissionError> {
        let items = self.prepare_items(draft, roles)?;
        let (attached, failed) = self.attach_prepared(order, items);

        if failed.is_empty() {
            Ok(())
        } else {
            Err(SubmissionError::PartialSubmissionFailed {
                order: order.clone(),
                attached,
                failed,
            })
        }
    }
}
