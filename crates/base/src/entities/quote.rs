use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::Inches;

pub type NumberOfSteps = u32;
pub type QuotePrice = Decimal;

/// Stair configuration posted to the quote endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StairConfig {
    pub width: Inches,
    pub height: Inches,
    pub depth: Inches,
    pub steps: NumberOfSteps,
    pub material: String,
    pub finish: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: QuotePrice,
    #[serde(with = "rust_decimal::serde::float")]
    pub material_cost: QuotePrice,
    #[serde(with = "rust_decimal::serde::float")]
    pub labor_cost: QuotePrice,
    pub estimated_time: String,
}
