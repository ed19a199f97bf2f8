use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};
use chrono::NaiveDate;
use csv::Reader;
use serde::{Deserialize, Serialize};

use base::entities::customer::CustomerId;
use base::entities::material::MaterialId;
use base::entities::order::{parse_order_date, ItemQuantity};
use base::entities::{
    Customer, CustomerCreate, Inches, Material, MaterialCategory, MaterialCategoryCreate,
    MaterialCreate, Order, OrderCreate, OrderStatus, StairConfig,
};

pub type ParamName = String;
pub type ParamInputValue = String;

/// One `name,value` row of a parameter file.
#[derive(Debug, Deserialize, Serialize)]
pub struct FileParam {
    pub name: ParamName,
    pub value: ParamInputValue,
}

#[derive(Debug, Default)]
pub struct CsvFileParams {
    values: HashMap<ParamName, ParamInputValue>,
}

impl CsvFileParams {
    pub fn from_csv<P: AsRef<Path>>(path_to_file: P) -> Result<Self> {
        let mut reader = Reader::from_path(path_to_file)
            .context("an error occurred on creating a reader from the path")?;

        let mut params = Vec::new();
        for param in reader.deserialize() {
            let param: FileParam = param.context("an error on deserializing a param")?;
            params.push(param);
        }

        Self::from_vec(params)
    }

    pub fn from_vec(params: Vec<FileParam>) -> Result<Self> {
        let mut values = HashMap::new();

        for param in params {
            let name = param.name.trim().to_string();
            if values.contains_key(&name) {
                bail!("the param {} is given more than once", name);
            }

            values.insert(name, param.value.trim().to_string());
        }

        Ok(Self { values })
    }

    fn raw(&self, name: &impl Display) -> Option<&str> {
        self.values
            .get(&name.to_string())
            .map(|value| value.as_str())
            .filter(|value| !value.is_empty())
    }

    pub fn get<T>(&self, name: impl Display) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.get_optional(&name)?
            .ok_or_else(|| anyhow!("the param {} is missing", name))
    }

    pub fn get_optional<T>(&self, name: impl Display) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        self.raw(&name)
            .map(|value| {
                value
                    .parse::<T>()
                    .map_err(|err| anyhow!("invalid value {} of the param {}: {}", value, name, err))
            })
            .transpose()
    }

    fn get_date(&self, name: impl Display) -> Result<NaiveDate> {
        self.get_optional_date(&name)?
            .ok_or_else(|| anyhow!("the param {} is missing", name))
    }

    fn get_optional_date(&self, name: impl Display) -> Result<Option<NaiveDate>> {
        self.raw(&name).map(parse_order_date).transpose()
    }

    /// Required for a new record; over an existing one an absent param keeps
    /// the current value.
    fn get_or_keep<T>(&self, name: impl Display, current: Option<T>) -> Result<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        match current {
            Some(current) => Ok(self.get_optional(name)?.unwrap_or(current)),
            None => self.get(name),
        }
    }

    fn get_date_or_keep(&self, name: impl Display, current: Option<NaiveDate>) -> Result<NaiveDate> {
        match current {
            Some(current) => Ok(self.get_optional_date(name)?.unwrap_or(current)),
            None => self.get_date(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftParam {
    CustomerId,
    ShopDate,
    JobAddress,
    DeliveryDate,
    Status,
    RiserQuantity,
    RiserMaterialId,
    TreadMaterialId,
    StepWidth,
    StringerMaterialId,
    StringerQuantity,
}

impl Display for DraftParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            DraftParam::CustomerId => write!(f, "customer_id"),
            DraftParam::ShopDate => write!(f, "shop_date"),
            DraftParam::JobAddress => write!(f, "job_address"),
            DraftParam::DeliveryDate => write!(f, "delivery_date"),
            DraftParam::Status => write!(f, "status"),
            DraftParam::RiserQuantity => write!(f, "riser_quantity"),
            DraftParam::RiserMaterialId => write!(f, "riser_material_id"),
            DraftParam::TreadMaterialId => write!(f, "tread_material_id"),
            DraftParam::StepWidth => write!(f, "step_width"),
            DraftParam::StringerMaterialId => write!(f, "stringer_material_id"),
            DraftParam::StringerQuantity => write!(f, "stringer_quantity"),
        }
    }
}

/// Everything an operator would type into the order wizard.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftParams {
    pub customer_id: CustomerId,
    pub shop_date: NaiveDate,
    pub job_address: String,
    pub delivery_date: NaiveDate,
    pub status: OrderStatus,
    pub riser_quantity: ItemQuantity,
    pub riser_material_id: MaterialId,
    pub tread_material_id: MaterialId,
    pub step_width: Inches,
    pub stringer_material_id: MaterialId,
    pub stringer_quantity: Option<ItemQuantity>,
}

impl TryFrom<&CsvFileParams> for DraftParams {
    type Error = anyhow::Error;

    fn try_from(params: &CsvFileParams) -> Result<Self> {
        Ok(Self {
            customer_id: params.get(DraftParam::CustomerId)?,
            shop_date: params.get_date(DraftParam::ShopDate)?,
            job_address: params.get_optional(DraftParam::JobAddress)?.unwrap_or_default(),
            delivery_date: params.get_date(DraftParam::DeliveryDate)?,
            status: params.get_optional(DraftParam::Status)?.unwrap_or_default(),
            riser_quantity: params.get(DraftParam::RiserQuantity)?,
            riser_material_id: params.get(DraftParam::RiserMaterialId)?,
            tread_material_id: params.get(DraftParam::TreadMaterialId)?,
            step_width: params.get(DraftParam::StepWidth)?,
            stringer_material_id: params.get(DraftParam::StringerMaterialId)?,
            stringer_quantity: params.get_optional(DraftParam::StringerQuantity)?,
        })
    }
}

/// Fields of the customer, material and material category records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordParam {
    Name,
    Email,
    Phone,
    Address,
    Description,
    Price,
    Inventory,
    MaterialCategoryId,
    WoodTypeId,
    DimensionId,
}

impl Display for RecordParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            RecordParam::Name => write!(f, "name"),
            RecordParam::Email => write!(f, "email"),
            RecordParam::Phone => write!(f, "phone"),
            RecordParam::Address => write!(f, "address"),
            RecordParam::Description => write!(f, "description"),
            RecordParam::Price => write!(f, "price"),
            RecordParam::Inventory => write!(f, "inventory"),
            RecordParam::MaterialCategoryId => write!(f, "material_category_id"),
            RecordParam::WoodTypeId => write!(f, "wood_type_id"),
            RecordParam::DimensionId => write!(f, "dimension_id"),
        }
    }
}

pub fn customer_from_params(
    params: &CsvFileParams,
    current: Option<&Customer>,
) -> Result<CustomerCreate> {
    Ok(CustomerCreate {
        name: params.get_or_keep(RecordParam::Name, current.map(|c| c.name.clone()))?,
        email: params.get_or_keep(RecordParam::Email, current.map(|c| c.email.clone()))?,
        phone: params.get_or_keep(RecordParam::Phone, current.map(|c| c.phone.clone()))?,
        address: params.get_or_keep(RecordParam::Address, current.map(|c| c.address.clone()))?,
    })
}

pub fn material_from_params(
    params: &CsvFileParams,
    current: Option<&Material>,
) -> Result<MaterialCreate> {
    let material = MaterialCreate {
        name: params.get_or_keep(RecordParam::Name, current.map(|m| m.name.clone()))?,
        price: params.get_or_keep(RecordParam::Price, current.map(|m| m.price))?,
        inventory: params.get_or_keep(RecordParam::Inventory, current.map(|m| m.inventory))?,
        material_category_id: params.get_or_keep(
            RecordParam::MaterialCategoryId,
            current.map(|m| m.material_category_id),
        )?,
        wood_type_id: params
            .get_or_keep(RecordParam::WoodTypeId, current.map(|m| m.wood_type_id))?,
        dimension_id: params
            .get_or_keep(RecordParam::DimensionId, current.map(|m| m.dimension_id))?,
    };

    if material.price.is_sign_negative() {
        bail!("the param {} cannot be negative", RecordParam::Price);
    }

    Ok(material)
}

/// The description may stay blank.
pub fn material_category_from_params(
    params: &CsvFileParams,
    current: Option<&MaterialCategory>,
) -> Result<MaterialCategoryCreate> {
    let description = match params.get_optional(RecordParam::Description)? {
        Some(description) => description,
        None => current
            .map(|category| category.description.clone())
            .unwrap_or_default(),
    };

    Ok(MaterialCategoryCreate {
        name: params.get_or_keep(RecordParam::Name, current.map(|c| c.name.clone()))?,
        description,
    })
}

/// Order headers use the same param names as the draft file.
pub fn order_from_params(params: &CsvFileParams, current: Option<&Order>) -> Result<OrderCreate> {
    Ok(OrderCreate {
        customer_id: params
            .get_or_keep(DraftParam::CustomerId, current.map(|o| o.customer_id))?,
        shop_date: params.get_date_or_keep(DraftParam::ShopDate, current.map(|o| o.shop_date))?,
        job_address: params
            .get_or_keep(DraftParam::JobAddress, current.map(|o| o.job_address.clone()))?,
        delivery_date: params
            .get_date_or_keep(DraftParam::DeliveryDate, current.map(|o| o.delivery_date))?,
        order_status: params.get_or_keep(
            DraftParam::Status,
            Some(current.map(|o| o.order_status).unwrap_or_default()),
        )?,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteParam {
    Width,
    Height,
    Depth,
    Steps,
    Material,
    Finish,
}

impl Display for QuoteParam {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            QuoteParam::Width => write!(f, "width"),
            QuoteParam::Height => write!(f, "height"),
            QuoteParam::Depth => write!(f, "depth"),
            QuoteParam::Steps => write!(f, "steps"),
            QuoteParam::Material => write!(f, "material"),
            QuoteParam::Finish => write!(f, "finish"),
        }
    }
}

pub fn stair_config_from_params(params: &CsvFileParams) -> Result<StairConfig> {
    Ok(StairConfig {
        width: params.get(QuoteParam::Width)?,
        height: params.get(QuoteParam::Height)?,
        depth: params.get(QuoteParam::Depth)?,
        steps: params.get(QuoteParam::Steps)?,
        material: params.get(QuoteParam::Material)?,
        finish: params.get(QuoteParam::Finish)?,
    })
}
