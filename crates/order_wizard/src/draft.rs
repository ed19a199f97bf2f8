use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

use base::entities::customer::CustomerId;
use base::entities::material::MaterialId;
use base::entities::order::{ItemQuantity, OrderId};
use base::entities::{Inches, OrderCreate, OrderItemCreate, OrderStatus};

use crate::calculator::{
    compute_cut_size, compute_stringer_length, format_cut_size, format_feet, RiserQuantity,
};

/// A staircase is carried by a stringer on each side unless the operator says otherwise.
pub const DEFAULT_STRINGER_QUANTITY: ItemQuantity = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    Riser,
    Tread,
    Stringer,
}

impl Role {
    /// Order in which items are attached to a submitted order.
    pub const ALL: [Role; 3] = [Role::Riser, Role::Tread, Role::Stringer];

    pub fn material_field(&self) -> DraftField {
        match *self {
            Role::Riser => DraftField::RiserMaterial,
            Role::Tread => DraftField::TreadMaterial,
            Role::Stringer => DraftField::StringerMaterial,
        }
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Role::Riser => write!(f, "riser"),
            Role::Tread => write!(f, "tread"),
            Role::Stringer => write!(f, "stringer"),
        }
    }
}

/// Fields a validation gate can complain about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Customer,
    ShopDate,
    JobAddress,
    DeliveryDate,
    RiserQuantity,
    RiserMaterial,
    TreadMaterial,
    StepWidth,
    StringerMaterial,
}

impl Display for DraftField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            DraftField::Customer => write!(f, "customer_id"),
            DraftField::ShopDate => write!(f, "shop_date"),
            DraftField::JobAddress => write!(f, "job_address"),
            DraftField::DeliveryDate => write!(f, "delivery_date"),
            DraftField::RiserQuantity => write!(f, "riser_quantity"),
            DraftField::RiserMaterial => write!(f, "riser_material_id"),
            DraftField::TreadMaterial => write!(f, "tread_material_id"),
            DraftField::StepWidth => write!(f, "step_width"),
            DraftField::StringerMaterial => write!(f, "stringer_material_id"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicInfo {
    pub customer_id: Option<CustomerId>,
    pub shop_date: Option<NaiveDate>,
    pub job_address: String,
    pub delivery_date: Option<NaiveDate>,
    pub status: OrderStatus,
}

/// Derived measurements. Only the wizard writes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Calculations {
    pub(crate) riser_quantity: RiserQuantity,
    pub(crate) step_width: Inches,
    pub(crate) riser_cut_size: Option<Inches>,
    pub(crate) stringer_length: Inches,
}

impl Calculations {
    pub fn riser_quantity(&self) -> RiserQuantity {
        self.riser_quantity
    }

    pub fn step_width(&self) -> Inches {
        self.step_width
    }

    /// `None` until a positive step width has been entered.
    pub fn riser_cut_size(&self) -> Option<Inches> {
        self.riser_cut_size
    }

    pub fn stringer_length(&self) -> Inches {
        self.stringer_length
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MaterialSelection {
    pub(crate) material_id: Option<MaterialId>,
    pub(crate) quantity: ItemQuantity,
    pub(crate) cut_size: Inches,
}

impl MaterialSelection {
    pub fn material_id(&self) -> Option<MaterialId> {
        self.material_id
    }

    pub fn quantity(&self) -> ItemQuantity {
        self.quantity
    }

    pub fn cut_size(&self) -> Inches {
        self.cut_size
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaterialSelections {
    riser: MaterialSelection,
    tread: MaterialSelection,
    stringer: MaterialSelection,
}

impl Default for MaterialSelections {
    fn default() -> Self {
        Self {
            riser: Default::default(),
            tread: Default::default(),
            stringer: MaterialSelection {
                quantity: DEFAULT_STRINGER_QUANTITY,
                ..Default::default()
            },
        }
    }
}

impl MaterialSelections {
    pub fn get(&self, role: Role) -> &MaterialSelection {
        match role {
            Role::Riser => &self.riser,
            Role::Tread => &self.tread,
            Role::Stringer => &self.stringer,
        }
    }

    pub(crate) fn get_mut(&mut self, role: Role) -> &mut MaterialSelection {
        match role {
            Role::Riser => &mut self.riser,
            Role::Tread => &mut self.tread,
            Role::Stringer => &mut self.stringer,
        }
    }
}

/// The order being assembled by the wizard. Derived values are kept in step
/// with their sources by the `apply_*` methods, never by callers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub(crate) basic_info: BasicInfo,
    pub(crate) calculations: Calculations,
    pub(crate) material_selections: MaterialSelections,
}

impl OrderDraft {
    pub fn basic_info(&self) -> &BasicInfo {
        &self.basic_info
    }

    pub fn calculations(&self) -> &Calculations {
        &self.calculations
    }

    pub fn material_selections(&self) -> &MaterialSelections {
        &self.material_selections
    }

    pub fn selection(&self, role: Role) -> &MaterialSelection {
        self.material_selections.get(role)
    }

    /// The riser count drives the tread count and the stringer length.
    pub(crate) fn apply_riser_quantity(&mut self, riser_quantity: RiserQuantity) {
        self.material_selections.riser.quantity = riser_quantity;
        self.calculations.riser_quantity = riser_quantity;
        self.material_selections.tread.quantity = riser_quantity;

        self.calculations.stringer_length = compute_stringer_length(riser_quantity);
        self.material_selections.stringer.cut_size = self.calculations.stringer_length;
    }

    pub(crate) fn apply_step_width(&mut self, step_width: Inches) {
        self.calculations.step_width = step_width;
        self.calculations.riser_cut_size = if step_width.is_finite() && step_width > 0.0 {
            Some(compute_cut_size(step_width))
        } else {
            None
        };

        let cut_size = self.calculations.riser_cut_size.unwrap_or_default();
        self.material_selections.riser.cut_size = cut_size;
        self.material_selections.tread.cut_size = cut_size;
    }

    pub(crate) fn apply_material(&mut self, role: Role, material_id: MaterialId) {
        let stringer_length = self.calculations.stringer_length;
        let selection = self.material_selections.get_mut(role);
        selection.material_id = Some(material_id);

        if role == Role::Stringer {
            selection.cut_size = stringer_length;
        }
    }

    pub(crate) fn apply_stringer_quantity(&mut self, quantity: ItemQuantity) {
        self.material_selections.stringer.quantity = quantity;
    }

    /// The header record; fails on the first required field that is missing.
    pub fn to_order_create(&self) -> Result<OrderCreate, DraftField> {
        let info = &self.basic_info;

        Ok(OrderCreate {
            customer_id: info.customer_id.ok_or(DraftField::Customer)?,
            shop_date: info.shop_date.ok_or(DraftField::ShopDate)?,
            job_address: info.job_address.trim().to_string(),
            delivery_date: info.delivery_date.ok_or(DraftField::DeliveryDate)?,
            order_status: info.status,
        })
    }

    pub fn to_order_item(&self, role: Role, order_id: OrderId) -> Result<OrderItemCreate, DraftField> {
        let selection = self.selection(role);

        Ok(OrderItemCreate {
            order_id,
            name: role.to_string(),
            material_id: selection.material_id.ok_or_else(|| role.material_field())?,
            quantity: selection.quantity,
            cut_size: selection.cut_size,
        })
    }
}

fn display_optional<T: Display>(value: &Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => String::from("-"),
    }
}

/// The review step's summary of everything entered so far.
impl Display for OrderDraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let info = &self.basic_info;
        let calculations = &self.calculations;

        writeln!(f, "Order Information:")?;
        writeln!(f, "customer: {}", display_optional(&info.customer_id))?;
        writeln!(f, "shop date: {}", display_optional(&info.shop_date))?;
        writeln!(f, "delivery date: {}", display_optional(&info.delivery_date))?;
        writeln!(f, "job address: {}", info.job_address.trim())?;
        writeln!(f, "status: {}", info.status)?;

        writeln!(f, "\nMeasurements:")?;
        writeln!(f, "risers: {}", calculations.riser_quantity)?;
        writeln!(f, "step width: {}\"", calculations.step_width)?;
        writeln!(
            f,
            "riser cut size: {}",
            calculations
                .riser_cut_size
                .map(|cut_size| format!("{}\"", format_cut_size(cut_size)))
                .unwrap_or_else(|| String::from("-"))
        )?;
        writeln!(
            f,
            "stringer length: {}\" ({} feet)",
            calculations.stringer_length,
            format_feet(calculations.stringer_length)
        )?;

        writeln!(f, "\nMaterials Summary:")?;
        for role in Role::ALL {
            let selection = self.selection(role);
            writeln!(
                f,
                "{}: {} pieces, cut {}\", material #{}",
                role,
                selection.quantity,
                format_cut_size(selection.cut_size),
                display_optional(&selection.material_id)
            )?;
        }

        Ok(())
    }
}
