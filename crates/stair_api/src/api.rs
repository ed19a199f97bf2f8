use base::entities::customer::CustomerId;
use base::entities::material::{MaterialCategoryId, MaterialId};
use base::entities::order::OrderId;
use base::entities::{
    Customer, CustomerCreate, Dimension, Material, MaterialCategory, MaterialCategoryCreate,
    MaterialCreate, Order, OrderCreate, OrderItemCreate, PriceQuote, StairConfig, WoodType,
};

use crate::errors::ApiResult;

/// Everything the back office can ask of the remote resource service.
pub trait StairApi {
    fn get_customers(&self) -> ApiResult<Vec<Customer>>;
    fn get_customer(&self, id: CustomerId) -> ApiResult<Customer>;
    fn create_customer(&self, customer: &CustomerCreate) -> ApiResult<Customer>;
    fn update_customer(&self, id: CustomerId, customer: &CustomerCreate) -> ApiResult<Customer>;
    fn delete_customer(&self, id: CustomerId) -> ApiResult<()>;

    fn get_materials(&self) -> ApiResult<Vec<Material>>;
    fn get_material(&self, id: MaterialId) -> ApiResult<Material>;
    fn create_material(&self, material: &MaterialCreate) -> ApiResult<Material>;
    fn update_material(&self, id: MaterialId, material: &MaterialCreate) -> ApiResult<Material>;
    fn delete_material(&self, id: MaterialId) -> ApiResult<()>;

    fn get_material_categories(&self) -> ApiResult<Vec<MaterialCategory>>;
    fn get_material_category(&self, id: MaterialCategoryId) -> ApiResult<MaterialCategory>;
    fn create_material_category(
        &self,
        category: &MaterialCategoryCreate,
    ) -> ApiResult<MaterialCategory>;
    fn update_material_category(
        &self,
        id: MaterialCategoryId,
        category: &MaterialCategoryCreate,
    ) -> ApiResult<MaterialCategory>;
    fn delete_material_category(&self, id: MaterialCategoryId) -> ApiResult<()>;

    fn get_orders(&self) -> ApiResult<Vec<Order>>;
    fn get_order(&self, id: OrderId) -> ApiResult<Order>;
    fn create_order(&self, order: &OrderCreate) -> ApiResult<Order>;
    fn update_order(&self, id: OrderId, order: &OrderCreate) -> ApiResult<Order>;
    fn delete_order(&self, id: OrderId) -> ApiResult<()>;

    /// Any 2xx reply counts as attached; the reply body is not interpreted.
    fn add_order_item(&self, item: &OrderItemCreate) -> ApiResult<()>;

    fn get_wood_types(&self) -> ApiResult<Vec<WoodType>>;
    fn get_dimensions(&self) -> ApiResult<Vec<Dimension>>;

    fn get_quote(&self, config: &StairConfig) -> ApiResult<PriceQuote>;
}
