use std::io::Write;

use anyhow::{Context, Result};

use base::entities::{Material, Order};
use base::settings::RoleCategorySettings;
use order_wizard::calculator::{estimate_stringer_cost, format_cut_size, format_feet};
use order_wizard::materials::materials_for_role;
use order_wizard::{OrderDraft, OrderWizard, Role, SubmitOrder, WizardStep};

use crate::params::DraftParams;

pub struct DraftRunningConfig<'a, S: SubmitOrder> {
    /// Current material list, used to show the candidates of each role.
    pub catalogue: &'a [Material],
    pub categories: RoleCategorySettings,
    pub submitter: &'a S,
}

fn write_candidates(
    out: &mut impl Write,
    catalogue: &[Material],
    categories: &RoleCategorySettings,
    role: Role,
) -> Result<()> {
    let candidates = materials_for_role(catalogue, role, categories)
        .iter()
        .map(|material| format!("#{} {}", material.id, material.name))
        .collect::<Vec<_>>();

    if candidates.is_empty() {
        writeln!(out, "no {} materials available", role)?;
    } else {
        writeln!(out, "{} materials: {}", role, candidates.join(", "))?;
    }

    Ok(())
}

fn write_stringer_estimate(
    out: &mut impl Write,
    catalogue: &[Material],
    draft: &OrderDraft,
) -> Result<()> {
    let selection = draft.selection(Role::Stringer);

    let material = selection
        .material_id()
        .and_then(|id| catalogue.iter().find(|material| material.id == id));

    if let Some(material) = material {
        if let Some(cost) =
            estimate_stringer_cost(material.price, draft.calculations().stringer_length())
        {
            writeln!(
                out,
                "estimated cost per stringer: ${:.2} ({} feet of {})",
                cost,
                format_feet(draft.calculations().stringer_length()),
                material.name
            )?;
        }
    }

    Ok(())
}

/// Walks the wizard from the first step to submission with the given values,
/// writing what each step screen would show.
pub fn run_draft<S: SubmitOrder>(
    params: &DraftParams,
    config: DraftRunningConfig<S>,
    out: &mut impl Write,
) -> Result<Order> {
    let mut wizard = OrderWizard::new();

    while let Some(step) = wizard.current_step() {
        writeln!(
            out,
            "\nStep {} of {}: {}",
            step.step_number(),
            WizardStep::ALL.len(),
            step
        )?;

        match step {
            WizardStep::BasicInfo => {
                wizard.set_customer(params.customer_id)?;
                wizard.set_shop_date(params.shop_date)?;
                wizard.set_job_address(params.job_address.as_str())?;
                wizard.set_delivery_date(params.delivery_date)?;
                wizard.set_status(params.status)?;
            }
            WizardStep::RiserSelection => {
                write_candidates(out, config.catalogue, &config.categories, Role::Riser)?;
                wizard.set_riser_quantity(params.riser_quantity)?;
                wizard.select_material(Role::Riser, params.riser_material_id)?;
            }
            WizardStep::TreadSelection => {
                write_candidates(out, config.catalogue, &config.categories, Role::Tread)?;
                wizard.select_material(Role::Tread, params.tread_material_id)?;

                if let Some(draft) = wizard.draft() {
                    writeln!(
                        out,
                        "treads: {} (one per riser)",
                        draft.selection(Role::Tread).quantity()
                    )?;
                }
            }
            WizardStep::Dimensions => {
                wizard.set_step_width(params.step_width)?;

                if let Some(draft) = wizard.draft() {
                    let cut_size = draft
                        .calculations()
                        .riser_cut_size()
                        .map(format_cut_size)
                        .unwrap_or_else(|| String::from("-"));
                    writeln!(out, "riser cut size: {}\"", cut_size)?;
                }
            }
            WizardStep::StringerSelection => {
                write_candidates(out, config.catalogue, &config.categories, Role::Stringer)?;
                wizard.select_material(Role::Stringer, params.stringer_material_id)?;
                if let Some(quantity) = params.stringer_quantity {
                    wizard.set_stringer_quantity(quantity)?;
                }

                if let Some(draft) = wizard.draft() {
                    writeln!(
                        out,
                        "stringer length: {}\" ({} feet)",
                        draft.calculations().stringer_length(),
                        format_feet(draft.calculations().stringer_length())
                    )?;
                    write_stringer_estimate(out, config.catalogue, draft)?;
                }
            }
            WizardStep::Review => {
                if let Some(draft) = wizard.draft() {
                    write!(out, "{}", draft)?;
                }
            }
        }

        wizard
            .next(config.submitter)
            .with_context(|| format!("the {} step did not complete", step))?;
    }

    let order = wizard
        .submitted_order()
        .cloned()
        .context("the wizard closed without a submitted order")?;

    writeln!(out, "\nOrder {} submitted", order.id)?;

    Ok(order)
}
