use std::cell::RefCell;

use anyhow::{bail, Result};
use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod};
use base::settings::{ApiSettings, RetrySettings, WizardSettings};
use chrono::NaiveDate;
use order_wizard::{
    OrderSubmitter, OrderWizard, Role, SubmissionError, WizardError, WizardState, WizardStep,
};
use stair_api::RestStairApi;

const RESOURCE_URL: &str = "http://stairs.test/api";

/// Answers like the resource service, failing `item/add` for the listed item names.
struct FakeStairService {
    failing_items: RefCell<Vec<&'static str>>,
    requests: RefCell<Vec<HttpRequestData>>,
}

impl FakeStairService {
    fn new(failing_items: Vec<&'static str>) -> Self {
        Self {
            failing_items: RefCell::new(failing_items),
            requests: RefCell::new(Vec::new()),
        }
    }

    fn requested(&self) -> Vec<(HttpRequestMethod, String)> {
        self.requests
            .borrow()
            .iter()
            .map(|req| (req.method, req.url.replace(RESOURCE_URL, "")))
            .collect()
    }
}

impl SyncHttpRequest for FakeStairService {
    fn call(&self, req: HttpRequestData) -> Result<String> {
        self.requests.borrow_mut().push(req.clone());

        let path = req.url.replace(RESOURCE_URL, "");

        match (req.method, path.as_str()) {
            (HttpRequestMethod::Get, "/material/11") => Ok(material(11, 1)),
            (HttpRequestMethod::Get, "/material/21") => Ok(material(21, 2)),
            (HttpRequestMethod::Get, "/material/31") => Ok(material(31, 3)),
            (HttpRequestMethod::Post, "/order/add") => Ok(String::from(
                r#"{"data": {"id": 90, "customer_id": 3, "shop_date": "2024-04-01T00:00:00.000Z", "job_address": "9 Elm St", "delivery_date": "2024-04-08", "order_status": "pending"}}"#,
            )),
            (HttpRequestMethod::Post, "/item/add") => {
                let name = req
                    .body
                    .as_ref()
                    .and_then(|body| body["name"].as_str())
                    .unwrap_or_default()
                    .to_string();

                if self.failing_items.borrow().contains(&name.as_str()) {
                    bail!("POST request to {} failed with a code 500", req.url);
                }

                Ok(String::from(r#"{"message": "Item added"}"#))
            }
            _ => bail!("{} request to {} failed with a code 404", req.method, req.url),
        }
    }
}

fn material(id: u64, material_category_id: u64) -> String {
    format!(
        r#"{{"id": {}, "name": "material {}", "price": 12.5, "inventory": 8, "material_category_id": {}, "wood_type_id": 1, "dimension_id": 1}}"#,
        id, id, material_category_id
    )
}

fn settings() -> ApiSettings {
    ApiSettings {
        resource_url: String::from(RESOURCE_URL),
        quote_url: String::from("http://stairs.test"),
        target_logger: String::from("test"),
        retry_settings: RetrySettings {
            number_of_request_retries: 0,
            seconds_to_sleep_before_request_retry: 0,
        },
    }
}

fn fill_and_reach_review(wizard: &mut OrderWizard, submitter: &OrderSubmitter<RestStairApi<&FakeStairService>>) {
    wizard.set_customer(3).unwrap();
    wizard
        .set_shop_date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
        .unwrap();
    wizard.set_job_address("9 Elm St").unwrap();
    wizard
        .set_delivery_date(NaiveDate::from_ymd_opt(2024, 4, 8).unwrap())
        .unwrap();
    wizard.next(submitter).unwrap();

    wizard.set_riser_quantity(6).unwrap();
    wizard.select_material(Role::Riser, 11).unwrap();
    wizard.next(submitter).unwrap();

    wizard.select_material(Role::Tread, 21).unwrap();
    wizard.next(submitter).unwrap();

    wizard.set_step_width(36.0).unwrap();
    wizard.next(submitter).unwrap();

    wizard.select_material(Role::Stringer, 31).unwrap();
    wizard.next(submitter).unwrap();

    assert_eq!(wizard.current_step(), Some(WizardStep::Review));
}

#[test]
fn should_create_the_order_and_attach_all_three_items() {
    let service = FakeStairService::new(vec![]);
    let api = RestStairApi::new(settings(), &service);
    let submitter = OrderSubmitter::new(&api, WizardSettings::default(), "test");
    let mut wizard = OrderWizard::new();

    fill_and_reach_review(&mut wizard, &submitter);
    let state = wizard.next(&submitter).unwrap();

    assert_eq!(state, WizardState::Submitted(90));
    assert_eq!(wizard.submitted_order().unwrap().job_address, "9 Elm St");

    let requests = service.requests.borrow();
    let items: Vec<_> = requests
        .iter()
        .filter(|req| req.url.ends_with("/item/add"))
        .map(|req| req.body.clone().unwrap())
        .collect();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "riser");
    assert_eq!(items[0]["quantity"], 6);
    assert_eq!(items[0]["cut_size"], 34.75);
    assert_eq!(items[1]["name"], "tread");
    assert_eq!(items[1]["material_id"], 21);
    assert_eq!(items[2]["name"], "stringer");
    assert_eq!(items[2]["quantity"], 2);
    assert_eq!(items[2]["cut_size"], 72.0);
    assert!(items.iter().all(|item| item["order_id"] == 90));
}

#[test]
fn should_report_the_failed_stringer_item_and_keep_the_created_order() {
    let service = FakeStairService::new(vec!["stringer"]);
    let api = RestStairApi::new(settings(), &service);
    let submitter = OrderSubmitter::new(&api, WizardSettings::default(), "test");
    let mut wizard = OrderWizard::new();

    fill_and_reach_review(&mut wizard, &submitter);
    let error = wizard.next(&submitter).unwrap_err();

    match error {
        WizardError::Submission(SubmissionError::PartialSubmissionFailed {
            order,
            attached,
            failed,
        }) => {
            assert_eq!(order.id, 90);
            assert_eq!(attached, vec![Role::Riser, Role::Tread]);
            assert_eq!(failed.len(), 1);
            assert_eq!(failed[0].role, Role::Stringer);
            assert_eq!(failed[0].error.operation(), "add order item stringer to order 90");
        }
        other => panic!("unexpected result: {:?}", other),
    }

    assert_eq!(wizard.current_step(), Some(WizardStep::Review));
    assert!(service
        .requested()
        .iter()
        .all(|(method, _)| *method != HttpRequestMethod::Delete));
}

#[test]
fn should_attach_only_the_failed_stringer_to_the_same_order_on_retry() {
    let service = FakeStairService::new(vec!["stringer"]);
    let api = RestStairApi::new(settings(), &service);
    let submitter = OrderSubmitter::new(&api, WizardSettings::default(), "test");
    let mut wizard = OrderWizard::new();

    fill_and_reach_review(&mut wizard, &submitter);
    wizard.next(&submitter).unwrap_err();
    service.failing_items.borrow_mut().clear();
    service.requests.borrow_mut().clear();

    let state = wizard.next(&submitter).unwrap();

    assert_eq!(state, WizardState::Submitted(90));
    assert_eq!(
        service.requested(),
        vec![
            (HttpRequestMethod::Get, String::from("/material/31")),
            (HttpRequestMethod::Post, String::from("/item/add")),
        ]
    );

    let requests = service.requests.borrow();
    let body = requests[1].body.clone().unwrap();
    assert_eq!(body["name"], "stringer");
    assert_eq!(body["order_id"], 90);
}

#[test]
fn should_not_create_an_order_when_a_material_is_in_the_wrong_category() {
    let service = FakeStairService::new(vec![]);
    let api = RestStairApi::new(settings(), &service);
    let submitter = OrderSubmitter::new(&api, WizardSettings::default(), "test");
    let mut wizard = OrderWizard::new();

    fill_and_reach_review(&mut wizard, &submitter);
    wizard.select_material(Role::Stringer, 21).unwrap();
    let error = wizard.next(&submitter).unwrap_err();

    assert!(matches!(
        error,
        WizardError::Submission(SubmissionError::CategoryMismatch {
            role: Role::Stringer,
            expected: 3,
            actual: 2,
            ..
        })
    ));
    assert!(!service
        .requested()
        .contains(&(HttpRequestMethod::Post, String::from("/order/add"))));
}
