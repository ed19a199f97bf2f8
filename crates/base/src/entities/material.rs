use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::{EntityId, Inches, Timestamp};

pub type MaterialId = EntityId;
pub type MaterialCategoryId = EntityId;
pub type WoodTypeId = EntityId;
pub type DimensionId = EntityId;

pub type MaterialPrice = Decimal;
pub type MaterialInventory = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub id: MaterialId,
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: MaterialPrice,
    #[serde(default)]
    pub inventory: MaterialInventory,
    pub material_category_id: MaterialCategoryId,
    pub wood_type_id: WoodTypeId,
    pub dimension_id: DimensionId,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub deleted_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCreate {
    pub name: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: MaterialPrice,
    pub inventory: MaterialInventory,
    pub material_category_id: MaterialCategoryId,
    pub wood_type_id: WoodTypeId,
    pub dimension_id: DimensionId,
}

impl From<&Material> for MaterialCreate {
    fn from(material: &Material) -> Self {
        Self {
            name: material.name.clone(),
            price: material.price,
            inventory: material.inventory,
            material_category_id: material.material_category_id,
            wood_type_id: material.wood_type_id,
            dimension_id: material.dimension_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialCategory {
    pub id: MaterialCategoryId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub deleted_at: Option<Timestamp>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MaterialCategoryCreate {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WoodType {
    pub id: WoodTypeId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimension {
    pub id: DimensionId,
    pub amount_of_inches: Inches,
}
