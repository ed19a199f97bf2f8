use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use base::entities::customer::CustomerId;
use base::entities::material::MaterialId;
use base::entities::order::{ItemQuantity, OrderId};
use base::entities::{Inches, Order, OrderStatus};

use crate::calculator::RiserQuantity;
use crate::draft::{DraftField, OrderDraft, Role};
use crate::errors::{SubmissionError, WizardError};
use crate::submission::SubmitOrder;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    BasicInfo,
    RiserSelection,
    TreadSelection,
    Dimensions,
    StringerSelection,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 6] = [
        WizardStep::BasicInfo,
        WizardStep::RiserSelection,
        WizardStep::TreadSelection,
        WizardStep::Dimensions,
        WizardStep::StringerSelection,
        WizardStep::Review,
    ];

    pub fn step_number(&self) -> usize {
        match self {
            WizardStep::BasicInfo => 1,
            WizardStep::RiserSelection => 2,
            WizardStep::TreadSelection => 3,
            WizardStep::Dimensions => 4,
            WizardStep::StringerSelection => 5,
            WizardStep::Review => 6,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::BasicInfo => "Basic Information",
            WizardStep::RiserSelection => "Riser Selection",
            WizardStep::TreadSelection => "Tread Selection",
            WizardStep::Dimensions => "Dimensions",
            WizardStep::StringerSelection => "Stringer Selection",
            WizardStep::Review => "Review & Submit",
        }
    }

    pub fn following(&self) -> Option<WizardStep> {
        WizardStep::ALL.get(self.step_number()).copied()
    }

    pub fn preceding(&self) -> Option<WizardStep> {
        let index = self.step_number() - 1;
        index
            .checked_sub(1)
            .and_then(|index| WizardStep::ALL.get(index).copied())
    }

    /// The gate that must hold before `next` leaves this step.
    pub fn validate(&self, draft: &OrderDraft) -> Result<(), DraftField> {
        let info = draft.basic_info();

        match self {
            WizardStep::BasicInfo => {
                if info.customer_id.is_none() {
                    return Err(DraftField::Customer);
                }
                if info.shop_date.is_none() {
                    return Err(DraftField::ShopDate);
                }
                if info.job_address.trim().is_empty() {
                    return Err(DraftField::JobAddress);
                }
                if info.delivery_date.is_none() {
                    return Err(DraftField::DeliveryDate);
                }
                Ok(())
            }
            WizardStep::RiserSelection => {
                if draft.selection(Role::Riser).quantity() < 1 {
                    return Err(DraftField::RiserQuantity);
                }
                Ok(())
            }
            WizardStep::TreadSelection => draft
                .selection(Role::Tread)
                .material_id()
                .map(|_| ())
                .ok_or(DraftField::TreadMaterial),
            WizardStep::Dimensions => {
                let step_width = draft.calculations().step_width();
                if step_width.is_finite() && step_width > 0.0 {
                    Ok(())
                } else {
                    Err(DraftField::StepWidth)
                }
            }
            WizardStep::StringerSelection => draft
                .selection(Role::Stringer)
                .material_id()
                .map(|_| ())
                .ok_or(DraftField::StringerMaterial),
            WizardStep::Review => Ok(()),
        }
    }
}

impl Display for WizardStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    Active(WizardStep),
    Submitted(OrderId),
    Cancelled,
}

impl WizardState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WizardState::Active(_))
    }
}

impl Display for WizardState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            WizardState::Active(step) => write!(f, "the {} step", step),
            WizardState::Submitted(order_id) => write!(f, "submitted as order {}", order_id),
            WizardState::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// An order header that exists remotely while some of its items do not.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingOrder {
    order: Order,
    attached: Vec<Role>,
}

impl PendingOrder {
    pub fn order(&self) -> &Order {
        &self.order
    }

    pub fn attached(&self) -> &[Role] {
        &self.attached
    }

    pub fn missing(&self) -> Vec<Role> {
        Role::ALL
            .iter()
            .copied()
            .filter(|role| !self.attached.contains(role))
            .collect()
    }
}

/// Step-by-step assembly of one order.
///
/// The wizard owns the draft for its whole session; step screens read it via
/// [`OrderWizard::draft`] and write through the setters, which re-derive every
/// dependent measurement before returning. The draft is dropped on cancel and
/// on successful submission.
///
/// After a partial submission the created header is kept as a
/// [`PendingOrder`]: the next submit from `Review` attaches only the missing
/// items to it, and the basic information is locked.
#[derive(Debug)]
pub struct OrderWizard {
    state: WizardState,
    draft: Option<OrderDraft>,
    pending_order: Option<PendingOrder>,
    submitted_order: Option<Order>,
}

impl Default for OrderWizard {
    fn default() -> Self {
        Self {
            state: WizardState::Active(WizardStep::BasicInfo),
            draft: Some(OrderDraft::default()),
            pending_order: None,
            submitted_order: None,
        }
    }
}

impl OrderWizard {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn state(&self) -> WizardState {
        self.state
    }

    pub fn current_step(&self) -> Option<WizardStep> {
        match self.state {
            WizardState::Active(step) => Some(step),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&OrderDraft> {
        self.draft.as_ref()
    }

    pub fn submitted_order(&self) -> Option<&Order> {
        self.submitted_order.as_ref()
    }

    pub fn pending_order(&self) -> Option<&PendingOrder> {
        self.pending_order.as_ref()
    }

    fn draft_mut(&mut self) -> Result<&mut OrderDraft, WizardError> {
        let state = self.state;
        self.draft.as_mut().ok_or(WizardError::WizardClosed(state))
    }

    fn basic_info_mut(&mut self) -> Result<&mut OrderDraft, WizardError> {
        if let Some(pending) = &self.pending_order {
            return Err(WizardError::OrderAlreadyCreated(pending.order.id));
        }

        self.draft_mut()
    }

    fn active_step(&self, transition: &'static str) -> Result<WizardStep, WizardError> {
        match self.state {
            WizardState::Active(step) => Ok(step),
            state => Err(WizardError::InvalidTransition { state, transition }),
        }
    }

    pub fn set_customer(&mut self, customer_id: CustomerId) -> Result<(), WizardError> {
        self.basic_info_mut()?.basic_info.customer_id = Some(customer_id);
        Ok(())
    }

    pub fn set_shop_date(&mut self, shop_date: NaiveDate) -> Result<(), WizardError> {
        self.basic_info_mut()?.basic_info.shop_date = Some(shop_date);
        Ok(())
    }

    pub fn set_job_address(&mut self, job_address: impl Into<String>) -> Result<(), WizardError> {
        self.basic_info_mut()?.basic_info.job_address = job_address.into();
        Ok(())
    }

    pub fn set_delivery_date(&mut self, delivery_date: NaiveDate) -> Result<(), WizardError> {
        self.basic_info_mut()?.basic_info.delivery_date = Some(delivery_date);
        Ok(())
    }

    pub fn set_status(&mut self, status: OrderStatus) -> Result<(), WizardError> {
        self.basic_info_mut()?.basic_info.status = status;
        Ok(())
    }

    /// Also sets the tread count and the stringer length.
    pub fn set_riser_quantity(&mut self, riser_quantity: RiserQuantity) -> Result<(), WizardError> {
        self.draft_mut()?.apply_riser_quantity(riser_quantity);
        Ok(())
    }

    pub fn set_step_width(&mut self, step_width: Inches) -> Result<(), WizardError> {
        self.draft_mut()?.apply_step_width(step_width);
        Ok(())
    }

    pub fn select_material(&mut self, role: Role, material_id: MaterialId) -> Result<(), WizardError> {
        self.draft_mut()?.apply_material(role, material_id);
        Ok(())
    }

    pub fn set_stringer_quantity(&mut self, quantity: ItemQuantity) -> Result<(), WizardError> {
        self.draft_mut()?.apply_stringer_quantity(quantity);
        Ok(())
    }

    /// Advances one step, or submits the draft from `Review`.
    ///
    /// A failed gate or a failed submission leaves the wizard where it was.
    /// A partial failure reports every role attached so far, across retries.
    pub fn next(&mut self, submitter: &impl SubmitOrder) -> Result<WizardState, WizardError> {
        let step = self.active_step("go to the next step")?;
        let draft = self.draft.as_ref().ok_or(WizardError::WizardClosed(self.state))?;

        step.validate(draft)
            .map_err(|field| WizardError::ValidationFailed { step, field })?;

        match step.following() {
            Some(following) => {
                self.state = WizardState::Active(following);
            }
            None => {
                Self::validate_for_submission(draft)?;

                let result = match &self.pending_order {
                    None => submitter.submit(draft),
                    Some(pending) => submitter
                        .attach_items(draft, &pending.order, &pending.missing())
                        .map(|()| pending.order.clone()),
                };

                match result {
                    Ok(order) => {
                        self.state = WizardState::Submitted(order.id);
                        self.draft = None;
                        self.pending_order = None;
                        self.submitted_order = Some(order);
                    }
                    Err(SubmissionError::PartialSubmissionFailed {
                        order,
                        attached,
                        failed,
                    }) => {
                        let mut all_attached = self
                            .pending_order
                            .take()
                            .map(|pending| pending.attached)
                            .unwrap_or_default();
                        all_attached.extend(attached);

                        self.pending_order = Some(PendingOrder {
                            order: order.clone(),
                            attached: all_attached.clone(),
                        });

                        return Err(SubmissionError::PartialSubmissionFailed {
                            order,
                            attached: all_attached,
                            failed,
                        }
                        .into());
                    }
                    Err(error) => return Err(error.into()),
                }
            }
        }

        Ok(self.state)
    }

    pub fn previous(&mut self) -> Result<WizardState, WizardError> {
        let step = self.active_step("go to the previous step")?;

        let preceding = step.preceding().ok_or(WizardError::InvalidTransition {
            state: self.state,
            transition: "go to the previous step",
        })?;
        self.state = WizardState::Active(preceding);

        Ok(self.state)
    }

    pub fn cancel(&mut self) -> Result<WizardState, WizardError> {
        self.active_step("cancel")?;

        self.draft = None;
        self.pending_order = None;
        self.state = WizardState::Cancelled;

        Ok(self.state)
    }

    // every earlier gate again: setters are not tied to the step on screen
    fn validate_for_submission(draft: &OrderDraft) -> Result<(), WizardError> {
        for step in WizardStep::ALL {
            step.validate(draft)
                .map_err(|field| WizardError::ValidationFailed { step, field })?;

            if step == WizardStep::RiserSelection && draft.selection(Role::Riser).material_id().is_none() {
                return Err(WizardError::ValidationFailed {
                    step,
                    field: DraftField::RiserMaterial,
                });
            }
        }

        Ok(())
    }
}
