use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::entities::customer::CustomerId;
use crate::entities::material::MaterialId;
use crate::entities::{EntityId, Inches, Timestamp};

pub type OrderId = EntityId;
pub type OrderItemId = EntityId;
pub type ItemQuantity = u32;

const ORDER_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl FromStr for OrderStatus {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => anyhow::bail!("Invalid order status: {}", input),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::InProgress => write!(f, "in_progress"),
            OrderStatus::Completed => write!(f, "completed"),
            OrderStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// Accepts both a plain `YYYY-MM-DD` date and a full timestamp that starts with one.
pub fn parse_order_date(raw: &str) -> Result<NaiveDate> {
    let date_part = raw.get(..10).unwrap_or(raw);

    NaiveDate::parse_from_str(date_part, ORDER_DATE_FORMAT)
        .context(format!("error on parsing an order date from {}", raw))
}

mod order_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{parse_order_date, ORDER_DATE_FORMAT};

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(ORDER_DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_order_date(&raw).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    #[serde(with = "order_date")]
    pub shop_date: NaiveDate,
    pub job_address: String,
    #[serde(with = "order_date")]
    pub delivery_date: NaiveDate,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: CustomerId,
    #[serde(with = "order_date")]
    pub shop_date: NaiveDate,
    pub job_address: String,
    #[serde(with = "order_date")]
    pub delivery_date: NaiveDate,
    pub order_status: OrderStatus,
}

impl From<&Order> for OrderCreate {
    fn from(order: &Order) -> Self {
        Self {
            customer_id: order.customer_id,
            shop_date: order.shop_date,
            job_address: order.job_address.clone(),
            delivery_date: order.delivery_date,
            order_status: order.order_status,
        }
    }
}

/// One material line of an order: which material, how many pieces and what
/// they are cut to. `name` carries the usage role (riser, tread, stringer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub name: String,
    pub material_id: MaterialId,
    pub quantity: ItemQuantity,
    pub cut_size: Inches,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub order_id: OrderId,
    pub name: String,
    pub material_id: MaterialId,
    pub quantity: ItemQuantity,
    pub cut_size: Inches,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(non_snake_case)]
    fn parse_order_date__full_timestamp__should_return_date_part() {
        let date = parse_order_date("2024-03-18T00:00:00.000Z").unwrap();

        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 18).unwrap());
    }

    #[test]
    #[allow(non_snake_case)]
    fn parse_order_date__garbage__should_return_error() {
        assert!(parse_order_date("next tuesday").is_err());
    }

    #[test]
    #[allow(non_snake_case)]
    fn order_status__in_progress__should_use_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            "in_progress".parse::<OrderStatus>().unwrap(),
            OrderStatus::InProgress
        );
        assert!("shipped".parse::<OrderStatus>().is_err());
    }

    #[test]
    #[allow(non_snake_case)]
    fn order_create__serialize__should_send_plain_dates_without_id() {
        let order = OrderCreate {
            customer_id: 4,
            shop_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
            job_address: String::from("12 Oak St"),
            delivery_date: NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(),
            order_status: OrderStatus::Pending,
        };

        let body = serde_json::to_value(&order).unwrap();

        assert_eq!(body["shop_date"], "2024-05-01");
        assert_eq!(body["delivery_date"], "2024-05-09");
        assert_eq!(body["order_status"], "pending");
        assert!(body.get("id").is_none());
    }
}
