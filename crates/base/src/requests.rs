use crate::requests::api::SyncHttpRequest;
use crate::requests::entities::{HttpRequestData, HttpRequestWithRetriesParams};
use anyhow::{bail, Result};
use std::{thread, time};

pub mod api;
pub mod entities;
pub mod ureq;

/// Sends the request until it succeeds or `number_of_retries` extra tries are
/// used up. Every failed try is logged as an error.
pub fn http_request_with_retries(
    req_data: HttpRequestData,
    req_params: HttpRequestWithRetriesParams,
    request_api: &impl SyncHttpRequest,
) -> Result<String> {
    let number_of_tries = req_params.number_of_retries.saturating_add(1);
    let mut last_error = None;

    for current_try in 1..=number_of_tries {
        match request_api.call(req_data.clone()) {
            Ok(body) => return Ok(body),
            Err(e) => {
                log::error!(
                    target: req_params.target_logger,
                    "{} {}: try {} of {} to request {} failed: {:?}",
                    req_data.method,
                    req_data.url,
                    current_try,
                    number_of_tries,
                    req_params.req_entity_name,
                    e
                );

                if current_try < number_of_tries {
                    thread::sleep(time::Duration::from_secs(u64::from(
                        req_params.seconds_to_sleep,
                    )));
                }

                last_error = Some(e);
            }
        }
    }

    match last_error {
        Some(e) => bail!(e.context(format!(
            "an error occurred after {} retries on requesting {}",
            req_params.number_of_retries, req_params.req_entity_name
        ))),
        None => bail!("no tries were made to request {}", req_params.req_entity_name),
    }
}
