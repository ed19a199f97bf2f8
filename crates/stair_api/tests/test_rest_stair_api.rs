use std::cell::RefCell;
use std::collections::HashMap;

use anyhow::{bail, Result};
use base::entities::{CustomerCreate, OrderCreate, OrderItemCreate, OrderStatus, StairConfig};
use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod};
use base::requests::ureq::UreqRequestApi;
use base::settings::{ApiSettings, RetrySettings};
use chrono::NaiveDate;
use log::Level;
use rust_decimal_macros::dec;
use stair_api::{ApiError, RestStairApi, StairApi};

const RESOURCE_URL: &str = "http://stairs.test/api";
const QUOTE_URL: &str = "http://stairs.test";

#[derive(Default)]
struct FakeHttpRequest {
    replies: HashMap<(String, String), String>,
    requests: RefCell<Vec<HttpRequestData>>,
}

impl FakeHttpRequest {
    fn reply(mut self, method: HttpRequestMethod, url: &str, body: &str) -> Self {
        self.replies
            .insert((method.to_string(), url.to_string()), body.to_string());
        self
    }

    fn requested(&self) -> Vec<(HttpRequestMethod, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|req| (req.method, req.url.clone()))
            .collect()
    }
}

impl SyncHttpRequest for FakeHttpRequest {
    fn call(&self, req: HttpRequestData) -> Result<String> {
        self.requests.borrow_mut().push(req.clone());

        match self.replies.get(&(req.method.to_string(), req.url.clone())) {
            Some(body) => Ok(body.clone()),
            None => bail!("{} request to {} failed with a code 500", req.method, req.url),
        }
    }
}

fn settings() -> ApiSettings {
    ApiSettings {
        resource_url: String::from(RESOURCE_URL),
        quote_url: String::from(QUOTE_URL),
        target_logger: String::from("test"),
        retry_settings: RetrySettings {
            number_of_request_retries: 0,
            seconds_to_sleep_before_request_retry: 0,
        },
    }
}

fn url(path: &str) -> String {
    format!("{}/{}", RESOURCE_URL, path)
}

#[test]
fn should_build_the_same_customer_list_from_bare_and_wrapped_replies() {
    let customers = r#"[{"id": 1, "name": "Harbor Homes", "email": "a@b.test", "phone": "1", "address": "1 Dock Rd"}]"#;

    let bare_http = FakeHttpRequest::default().reply(HttpRequestMethod::Get, &url("customer"), customers);
    let wrapped_http = FakeHttpRequest::default().reply(
        HttpRequestMethod::Get,
        &url("customer"),
        &format!(r#"{{"data": {}}}"#, customers),
    );

    let bare = RestStairApi::new(settings(), &bare_http).get_customers().unwrap();
    let wrapped = RestStairApi::new(settings(), &wrapped_http).get_customers().unwrap();

    assert_eq!(bare, wrapped);
    assert_eq!(bare[0].name, "Harbor Homes");
}

#[test]
fn should_use_resource_specific_paths_for_every_operation() {
    let customer = r#"{"data": {"id": 5, "name": "Pine", "email": "", "phone": "", "address": ""}}"#;
    let http = FakeHttpRequest::default()
        .reply(HttpRequestMethod::Get, &url("customer/5"), customer)
        .reply(HttpRequestMethod::Post, &url("customer/add"), customer)
        .reply(HttpRequestMethod::Put, &url("customer/update/5"), customer)
        .reply(HttpRequestMethod::Delete, &url("customer/delete/5"), "")
        .reply(HttpRequestMethod::Get, &url("material-category"), "[]")
        .reply(HttpRequestMethod::Get, &url("wood-type"), "[]")
        .reply(HttpRequestMethod::Get, &url("dimensions"), r#"{"data": []}"#);

    let api = RestStairApi::new(settings(), &http);
    let body = CustomerCreate {
        name: String::from("Pine"),
        ..Default::default()
    };

    assert_eq!(api.get_customer(5).unwrap().id, 5);
    assert_eq!(api.create_customer(&body).unwrap().id, 5);
    assert_eq!(api.update_customer(5, &body).unwrap().name, "Pine");
    api.delete_customer(5).unwrap();
    assert!(api.get_material_categories().unwrap().is_empty());
    assert!(api.get_wood_types().unwrap().is_empty());
    assert!(api.get_dimensions().unwrap().is_empty());

    assert_eq!(
        http.requested(),
        vec![
            (HttpRequestMethod::Get, url("customer/5")),
            (HttpRequestMethod::Post, url("customer/add")),
            (HttpRequestMethod::Put, url("customer/update/5")),
            (HttpRequestMethod::Delete, url("customer/delete/5")),
            (HttpRequestMethod::Get, url("material-category")),
            (HttpRequestMethod::Get, url("wood-type")),
            (HttpRequestMethod::Get, url("dimensions")),
        ]
    );
}

#[test]
fn should_send_entity_fields_without_id_when_creating_an_order() {
    let http = FakeHttpRequest::default().reply(
        HttpRequestMethod::Post,
        &url("order/add"),
        r#"{"id": 90, "customer_id": 3, "shop_date": "2024-04-01", "job_address": "9 Elm", "delivery_date": "2024-04-08", "order_status": "pending"}"#,
    );
    let api = RestStairApi::new(settings(), &http);

    let order = api
        .create_order(&OrderCreate {
            customer_id: 3,
            shop_date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            job_address: String::from("9 Elm"),
            delivery_date: NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
            order_status: OrderStatus::Pending,
        })
        .unwrap();

    assert_eq!(order.id, 90);

    let requests = http.requests.borrow();
    let body = requests[0].body.as_ref().unwrap();
    assert_eq!(body["customer_id"], 3);
    assert_eq!(body["shop_date"], "2024-04-01");
    assert!(body.get("id").is_none());
    assert!(body.get("created_at").is_none());
}

#[test]
fn should_name_the_operation_in_each_error_kind() {
    let http = FakeHttpRequest::default();
    let api = RestStairApi::new(settings(), &http);

    let fetch_error = api.get_materials().unwrap_err();
    let save_error = api
        .update_material_category(4, &Default::default())
        .unwrap_err();
    let delete_error = api.delete_order(8).unwrap_err();

    assert!(matches!(fetch_error, ApiError::FetchFailed { .. }));
    assert_eq!(fetch_error.operation(), "fetch materials");
    assert!(matches!(save_error, ApiError::SaveFailed { .. }));
    assert_eq!(save_error.operation(), "update material category 4");
    assert!(matches!(delete_error, ApiError::DeleteFailed { .. }));
    assert!(delete_error.to_string().starts_with("failed to delete order 8"));
}

#[test]
fn should_treat_any_successful_item_reply_as_attached() {
    let http = FakeHttpRequest::default().reply(
        HttpRequestMethod::Post,
        &url("item/add"),
        r#"{"message": "Item added"}"#,
    );
    let api = RestStairApi::new(settings(), &http);

    let res = api.add_order_item(&OrderItemCreate {
        order_id: 90,
        name: String::from("riser"),
        material_id: 11,
        quantity: 6,
        cut_size: 34.75,
    });

    assert!(res.is_ok());
    let requests = http.requests.borrow();
    assert_eq!(requests[0].body.as_ref().unwrap()["cut_size"], 34.75);
}

#[test]
fn should_post_quotes_to_the_quote_url() {
    let http = FakeHttpRequest::default().reply(
        HttpRequestMethod::Post,
        &format!("{}/quote", QUOTE_URL),
        r#"{"totalPrice": 2450.5, "materialCost": 1450.5, "laborCost": 1000, "estimatedTime": "3 days"}"#,
    );
    let api = RestStairApi::new(settings(), &http);

    let quote = api
        .get_quote(&StairConfig {
            width: 36.0,
            height: 108.0,
            depth: 120.0,
            steps: 14,
            material: String::from("oak"),
            finish: String::from("natural"),
        })
        .unwrap();

    assert_eq!(quote.total_price, dec!(2450.5));
    assert_eq!(quote.labor_cost, dec!(1000));
    assert_eq!(quote.estimated_time, "3 days");
}

#[test]
fn should_log_an_error_for_every_failed_read_attempt() {
    testing_logger::setup();

    let http = FakeHttpRequest::default();
    let mut retrying_settings = settings();
    retrying_settings.retry_settings.number_of_request_retries = 2;
    let api = RestStairApi::new(retrying_settings, &http);

    assert!(api.get_orders().is_err());
    assert_eq!(http.requests.borrow().len(), 3);

    testing_logger::validate(|captured_logs| {
        let number_of_error_logs = captured_logs
            .iter()
            .filter(|log| matches!(log.level, Level::Error))
            .count();

        assert_eq!(number_of_error_logs, 3);
    });
}

#[test]
#[ignore]
fn should_successfully_get_customers_from_the_live_service() {
    dotenv::dotenv().ok();

    let api = RestStairApi::new(ApiSettings::from_env().unwrap(), UreqRequestApi::new());

    assert!(api.get_customers().is_ok());
}
