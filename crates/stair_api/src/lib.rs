pub mod api;
pub mod errors;
pub mod rest_stair_api;

pub use crate::api::StairApi;
pub use crate::errors::{ApiError, ApiResult};
pub use crate::rest_stair_api::{Resource, RestStairApi};
