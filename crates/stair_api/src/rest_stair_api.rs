use std::fmt::{Display, Formatter};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

use base::entities::customer::CustomerId;
use base::entities::material::{MaterialCategoryId, MaterialId};
use base::entities::order::OrderId;
use base::entities::{
    Customer, CustomerCreate, Dimension, EntityId, Material, MaterialCategory,
    MaterialCategoryCreate, MaterialCreate, Order, OrderCreate, OrderItemCreate, PriceQuote,
    StairConfig, WoodType,
};
use base::helpers::{decode_envelope, decode_list};
use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod, HttpRequestWithRetriesParams};
use base::requests::http_request_with_retries;
use base::settings::ApiSettings;

use crate::api::StairApi;
use crate::errors::{ApiError, ApiResult};

const ADD_ACTION: &str = "add";
const UPDATE_ACTION: &str = "update";
const DELETE_ACTION: &str = "delete";
const QUOTE_PATH: &str = "quote";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Customer,
    Material,
    MaterialCategory,
    Order,
    OrderItem,
    WoodType,
    Dimensions,
}

impl Resource {
    pub fn path(&self) -> &'static str {
        match *self {
            Resource::Customer => "customer",
            Resource::Material => "material",
            Resource::MaterialCategory => "material-category",
            Resource::Order => "order",
            Resource::OrderItem => "item",
            Resource::WoodType => "wood-type",
            Resource::Dimensions => "dimensions",
        }
    }

    pub fn plural(&self) -> &'static str {
        match *self {
            Resource::Customer => "customers",
            Resource::Material => "materials",
            Resource::MaterialCategory => "material categories",
            Resource::Order => "orders",
            Resource::OrderItem => "order items",
            Resource::WoodType => "wood types",
            Resource::Dimensions => "dimensions",
        }
    }
}

impl Display for Resource {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Resource::Customer => write!(f, "customer"),
            Resource::Material => write!(f, "material"),
            Resource::MaterialCategory => write!(f, "material category"),
            Resource::Order => write!(f, "order"),
            Resource::OrderItem => write!(f, "order item"),
            Resource::WoodType => write!(f, "wood type"),
            Resource::Dimensions => write!(f, "dimension"),
        }
    }
}

/// `StairApi` over plain HTTP+JSON. Reads go through the retry helper,
/// writes are sent exactly once.
pub struct RestStairApi<R>
where
    R: SyncHttpRequest,
{
    settings: ApiSettings,
    request_api: R,
}

impl<R> RestStairApi<R>
where
    R: SyncHttpRequest,
{
    pub fn new(settings: ApiSettings, request_api: R) -> RestStairApi<R> {
        Self {
            settings,
            request_api,
        }
    }

    pub fn settings(&self) -> &ApiSettings {
        &self.settings
    }

    fn url(&self, resource: Resource, action: Option<&str>, id: Option<EntityId>) -> String {
        let mut url = format!("{}/{}", self.settings.resource_url, resource.path());

        if let Some(action) = action {
            url.push('/');
            url.push_str(action);
        }

        if let Some(id) = id {
            url.push('/');
            url.push_str(&id.to_string());
        }

        url
    }

    fn read(&self, req_data: HttpRequestData, operation: &str) -> Result<String> {
        let req_params = HttpRequestWithRetriesParams {
            req_entity_name: operation,
            target_logger: self.settings.target_logger.as_str(),
            number_of_retries: self.settings.retry_settings.number_of_request_retries,
            seconds_to_sleep: self
                .settings
                .retry_settings
                .seconds_to_sleep_before_request_retry,
        };

        http_request_with_retries(req_data, req_params, &self.request_api)
    }

    fn write<B: Serialize>(
        &self,
        method: HttpRequestMethod,
        url: &str,
        body: Option<&B>,
        operation: &str,
    ) -> Result<String> {
        let mut req_data = HttpRequestData::new(method, url);
        if let Some(body) = body {
            let body = serde_json::to_value(body)
                .context(format!("error on serializing a body to {}", operation))?;
            req_data = req_data.with_json_body(body);
        }

        self.request_api.call(req_data).map_err(|e| {
            log::error!(
                target: self.settings.target_logger.as_str(),
                "an error occurred on trying to {}: {:?}",
                operation,
                e
            );
            e
        })
    }

    fn fetch_list<T: DeserializeOwned>(&self, resource: Resource) -> ApiResult<Vec<T>> {
        let operation = format!("fetch {}", resource.plural());
        let req_data = HttpRequestData::new(HttpRequestMethod::Get, &self.url(resource, None, None));

        self.read(req_data, &operation)
            .and_then(|body| decode_list(&body))
            .map_err(|e| ApiError::fetch(&operation, e))
    }

    fn fetch_one<T: DeserializeOwned>(&self, resource: Resource, id: EntityId) -> ApiResult<T> {
        let operation = format!("fetch {} {}", resource, id);
        let req_data =
            HttpRequestData::new(HttpRequestMethod::Get, &self.url(resource, None, Some(id)));

        self.read(req_data, &operation)
            .and_then(|body| decode_envelope(&body))
            .map_err(|e| ApiError::fetch(&operation, e))
    }

    fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: Resource,
        body: &B,
    ) -> ApiResult<T> {
        let operation = format!("create {}", resource);
        let url = self.url(resource, Some(ADD_ACTION), None);

        self.write(HttpRequestMethod::Post, &url, Some(body), &operation)
            .and_then(|reply| decode_envelope(&reply))
            .map_err(|e| ApiError::save(&operation, e))
    }

    fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: EntityId,
        body: &B,
    ) -> ApiResult<T> {
        let operation = format!("update {} {}", resource, id);
        let url = self.url(resource, Some(UPDATE_ACTION), Some(id));

        self.write(HttpRequestMethod::Put, &url, Some(body), &operation)
            .and_then(|reply| decode_envelope(&reply))
            .map_err(|e| ApiError::save(&operation, e))
    }

    fn remove(&self, resource: Resource, id: EntityId) -> ApiResult<()> {
        let operation = format!("delete {} {}", resource, id);
        let url = self.url(resource, Some(DELETE_ACTION), Some(id));

        self.write::<()>(HttpRequestMethod::Delete, &url, None, &operation)
            .map(|_| ())
            .map_err(|e| ApiError::delete(&operation, e))
    }
}

impl<R> StairApi for RestStairApi<R>
where
    R: SyncHttpRequest,
{
    fn get_customers(&self) -> ApiResult<Vec<Customer>> {
        self.fetch_list(Resource::Customer)
    }

    fn get_customer(&self, id: CustomerId) -> ApiResult<Customer> {
        self.fetch_one(Resource::Customer, id)
    }

    fn create_customer(&self, customer: &CustomerCreate) -> ApiResult<Customer> {
        self.create(Resource::Customer, customer)
    }

    fn update_customer(&self, id: CustomerId, customer: &CustomerCreate) -> ApiResult<Customer> {
        self.update(Resource::Customer, id, customer)
    }

    fn delete_customer(&self, id: CustomerId) -> ApiResult<()> {
        self.remove(Resource::Customer, id)
    }

    fn get_materials(&self) -> ApiResult<Vec<Material>> {
        self.fetch_list(Resource::Material)
    }

    fn get_material(&self, id: MaterialId) -> ApiResult<Material> {
        self.fetch_one(Resource::Material, id)
    }

    fn create_material(&self, material: &MaterialCreate) -> ApiResult<Material> {
        self.create(Resource::Material, material)
    }

    fn update_material(&self, id: MaterialId, material: &MaterialCreate) -> ApiResult<Material> {
        self.update(Resource::Material, id, material)
    }

    fn delete_material(&self, id: MaterialId) -> ApiResult<()> {
        self.remove(Resource::Material, id)
    }

    fn get_material_categories(&self) -> ApiResult<Vec<MaterialCategory>> {
        self.fetch_list(Resource::MaterialCategory)
    }

    fn get_material_category(&self, id: MaterialCategoryId) -> ApiResult<MaterialCategory> {
        self.fetch_one(Resource::MaterialCategory, id)
    }

    fn create_material_category(
        &self,
        category: &MaterialCategoryCreate,
    ) -> ApiResult<MaterialCategory> {
        self.create(Resource::MaterialCategory, category)
    }

    fn update_material_category(
        &self,
        id: MaterialCategoryId,
        category: &MaterialCategoryCreate,
    ) -> ApiResult<MaterialCategory> {
        self.update(Resource::MaterialCategory, id, category)
    }

    fn delete_material_category(&self, id: MaterialCategoryId) -> ApiResult<()> {
        self.remove(Resource::MaterialCategory, id)
    }

    fn get_orders(&self) -> ApiResult<Vec<Order>> {
        self.fetch_list(Resource::Order)
    }

    fn get_order(&self, id: OrderId) -> ApiResult<Order> {
        self.fetch_one(Resource::Order, id)
    }

    fn create_order(&self, order: &OrderCreate) -> ApiResult<Order> {
        self.create(Resource::Order, order)
    }

    fn update_order(&self, id: OrderId, order: &OrderCreate) -> ApiResult<Order> {
        self.update(Resource::Order, id, order)
    }

    fn delete_order(&self, id: OrderId) -> ApiResult<()> {
        self.remove(Resource::Order, id)
    }

    fn add_order_item(&self, item: &OrderItemCreate) -> ApiResult<()> {
        let operation = format!("add {} {} to order {}", Resource::OrderItem, item.name, item.order_id);
        let url = self.url(Resource::OrderItem, Some(ADD_ACTION), None);

        self.write(HttpRequestMethod::Post, &url, Some(item), &operation)
            .map(|_| ())
            .map_err(|e| ApiError::save(&operation, e))
    }

    fn get_wood_types(&self) -> ApiResult<Vec<WoodType>> {
        self.fetch_list(Resource::WoodType)
    }

    fn get_dimensions(&self) -> ApiResult<Vec<Dimension>> {
        self.fetch_list(Resource::Dimensions)
    }

    fn get_quote(&self, config: &StairConfig) -> ApiResult<PriceQuote> {
        let operation = "get quote";
        let url = format!("{}/{}", self.settings.quote_url, QUOTE_PATH);

        self.write(HttpRequestMethod::Post, &url, Some(config), operation)
            .and_then(|reply| decode_envelope(&reply))
            .map_err(|e| ApiError::fetch(operation, e))
    }
}
