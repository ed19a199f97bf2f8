use std::fmt::Display;
use std::str::FromStr;

use anyhow::{anyhow, Result};

use crate::entities::material::MaterialCategoryId;
use crate::entities::{DEFAULT_TARGET_LOGGER, TARGET_LOGGER_ENV};
use crate::requests::entities::{NumberOfRetries, SecondsToSleep};

pub const RESOURCE_URL_ENV: &str = "STAIR_API_RESOURCE_URL";
pub const QUOTE_URL_ENV: &str = "STAIR_API_QUOTE_URL";
pub const NUMBER_OF_REQUEST_RETRIES_ENV: &str = "STAIR_API_NUMBER_OF_REQUEST_RETRIES";
pub const SECONDS_TO_SLEEP_BEFORE_RETRY_ENV: &str = "STAIR_API_SECONDS_TO_SLEEP_BEFORE_RETRY";

pub const RISER_CATEGORY_ID_ENV: &str = "RISER_CATEGORY_ID";
pub const TREAD_CATEGORY_ID_ENV: &str = "TREAD_CATEGORY_ID";
pub const STRINGER_CATEGORY_ID_ENV: &str = "STRINGER_CATEGORY_ID";
pub const VERIFY_MATERIAL_CATEGORIES_ENV: &str = "VERIFY_MATERIAL_CATEGORIES";

pub const DEFAULT_RESOURCE_URL: &str = "https://seashell-app-4ht95.ondigitalocean.app/api";
pub const DEFAULT_QUOTE_URL: &str = "https://seashell-app-4ht95.ondigitalocean.app";

// the remote service has no idempotency keys, so reads are not retried unless configured
pub const DEFAULT_NUMBER_OF_REQUEST_RETRIES: NumberOfRetries = 0;
pub const DEFAULT_SECONDS_TO_SLEEP_BEFORE_RETRY: SecondsToSleep = 1;

pub const DEFAULT_RISER_CATEGORY_ID: MaterialCategoryId = 1;
pub const DEFAULT_TREAD_CATEGORY_ID: MaterialCategoryId = 2;
pub const DEFAULT_STRINGER_CATEGORY_ID: MaterialCategoryId = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrySettings {
    pub number_of_request_retries: NumberOfRetries,
    pub seconds_to_sleep_before_request_retry: SecondsToSleep,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            number_of_request_retries: DEFAULT_NUMBER_OF_REQUEST_RETRIES,
            seconds_to_sleep_before_request_retry: DEFAULT_SECONDS_TO_SLEEP_BEFORE_RETRY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub resource_url: String,
    pub quote_url: String,
    pub target_logger: String,
    pub retry_settings: RetrySettings,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            resource_url: String::from(DEFAULT_RESOURCE_URL),
            quote_url: String::from(DEFAULT_QUOTE_URL),
            target_logger: String::from(DEFAULT_TARGET_LOGGER),
            retry_settings: Default::default(),
        }
    }
}

impl ApiSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            resource_url: trim_url(lookup(RESOURCE_URL_ENV).unwrap_or(defaults.resource_url)),
            quote_url: trim_url(lookup(QUOTE_URL_ENV).unwrap_or(defaults.quote_url)),
            target_logger: lookup(TARGET_LOGGER_ENV).unwrap_or(defaults.target_logger),
            retry_settings: RetrySettings {
                number_of_request_retries: parse_or(
                    &lookup,
                    NUMBER_OF_REQUEST_RETRIES_ENV,
                    DEFAULT_NUMBER_OF_REQUEST_RETRIES,
                )?,
                seconds_to_sleep_before_request_retry: parse_or(
                    &lookup,
                    SECONDS_TO_SLEEP_BEFORE_RETRY_ENV,
                    DEFAULT_SECONDS_TO_SLEEP_BEFORE_RETRY,
                )?,
            },
        })
    }
}

/// Material category ids that back the three order roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleCategorySettings {
    pub riser: MaterialCategoryId,
    pub tread: MaterialCategoryId,
    pub stringer: MaterialCategoryId,
}

impl Default for RoleCategorySettings {
    fn default() -> Self {
        Self {
            riser: DEFAULT_RISER_CATEGORY_ID,
            tread: DEFAULT_TREAD_CATEGORY_ID,
            stringer: DEFAULT_STRINGER_CATEGORY_ID,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WizardSettings {
    pub categories: RoleCategorySettings,
    pub verify_material_categories: bool,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            categories: Default::default(),
            verify_material_categories: true,
        }
    }
}

impl WizardSettings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenv::var(key).ok())
    }

    pub fn from_lookup<L>(lookup: L) -> Result<Self>
    where
        L: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            categories: RoleCategorySettings {
                riser: parse_or(&lookup, RISER_CATEGORY_ID_ENV, DEFAULT_RISER_CATEGORY_ID)?,
                tread: parse_or(&lookup, TREAD_CATEGORY_ID_ENV, DEFAULT_TREAD_CATEGORY_ID)?,
                stringer: parse_or(
                    &lookup,
                    STRINGER_CATEGORY_ID_ENV,
                    DEFAULT_STRINGER_CATEGORY_ID,
                )?,
            },
            verify_material_categories: parse_or(&lookup, VERIFY_MATERIAL_CATEGORIES_ENV, true)?,
        })
    }
}

fn parse_or<L, T>(lookup: &L, key: &str, default: T) -> Result<T>
where
    L: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| anyhow!("invalid value {:?} for {}: {}", value, key, e)),
        None => Ok(default),
    }
}

fn trim_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
