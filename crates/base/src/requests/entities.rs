use std::collections::HashMap;
use std::fmt::{Display, Formatter};

use serde_json::Value;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HttpRequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl Default for HttpRequestMethod {
    fn default() -> Self {
        Self::Get
    }
}

impl Display for HttpRequestMethod {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            HttpRequestMethod::Get => write!(f, "GET"),
            HttpRequestMethod::Post => write!(f, "POST"),
            HttpRequestMethod::Put => write!(f, "PUT"),
            HttpRequestMethod::Delete => write!(f, "DELETE"),
        }
    }
}

pub type Headers = HashMap<String, String>;
pub type Queries = HashMap<String, String>;

#[derive(Debug, Clone, Default)]
pub struct HttpRequestData {
    pub method: HttpRequestMethod,
    pub url: String,
    pub headers: Option<Headers>,
    pub queries: Option<Queries>,
    pub body: Option<Value>,
}

impl HttpRequestData {
    pub fn new(method: HttpRequestMethod, url: &str) -> Self {
        Self {
            method,
            url: url.to_string(),
            ..Default::default()
        }
    }

    pub fn with_json_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = Some(headers);
        self
    }
}

pub type NumberOfRetries = u32;
pub type SecondsToSleep = u32;

#[derive(Default)]
pub struct HttpRequestWithRetriesParams<'a> {
    pub req_entity_name: &'a str,
    pub target_logger: &'a str,
    pub number_of_retries: NumberOfRetries,
    pub seconds_to_sleep: SecondsToSleep,
}
