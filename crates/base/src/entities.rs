pub mod customer;
pub mod material;
pub mod order;
pub mod quote;

pub use customer::{Customer, CustomerCreate};
pub use material::{Dimension, Material, MaterialCategory, MaterialCategoryCreate, MaterialCreate, WoodType};
pub use order::{Order, OrderCreate, OrderItem, OrderItemCreate, OrderStatus};
pub use quote::{PriceQuote, StairConfig};

pub type EntityId = u64;
pub type Timestamp = String;

pub type Inches = f64;
pub type Feet = f64;

pub const INCHES_IN_FOOT: u32 = 12;

pub const CUT_SIZE_DECIMAL_PLACES: usize = 3;
pub const FEET_DECIMAL_PLACES: usize = 1;
pub const MONEY_DECIMAL_PLACES: u32 = 2;

pub const TARGET_LOGGER_ENV: &str = "STAIR_API_LOGGER_TARGET";
pub const DEFAULT_TARGET_LOGGER: &str = "stair_admin";
