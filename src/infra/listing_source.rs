//! Remote listing source and the fetch lifecycle around it.
//!
//! - `HttpListingSource` performs a single GET against a fixed URL returning a JSON array.
//! - `load_listings` drives the store through Loading into Loaded or Failed.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use thiserror::Error;

use crate::domain::{DayPassDiscount, ListingAction, Workspace};

pub const DEFAULT_LISTINGS_URL: &str =
    "https://raw.githubusercontent.com/MujtabaKably/bhive-interview-project-data/main/data.json";
pub const USER_AGENT: &str = concat!("workspace-finder/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum ListingSourceError {
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("failed to fetch workspaces: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to fetch workspaces: server answered {0}")]
    Status(StatusCode),
}

#[async_trait]
pub trait ListingSource: Send + Sync {
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, ListingSourceError>;
}

#[derive(Clone)]
pub struct HttpListingSource {
    http: Client,
    url: Url,
}

impl HttpListingSource {
    pub fn new(url: &str) -> Result<Self, ListingSourceError> {
        let url = Url::parse(url)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ListingSource for HttpListingSource {
    async fn fetch_workspaces(&self) -> Result<Vec<Workspace>, ListingSourceError> {
        let response = self.http.get(self.url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ListingSourceError::Status(status));
        }
        let records: Vec<WorkspaceDto> = response.json().await?;
        Ok(records.into_iter().map(Workspace::from).collect())
    }
}

/// Runs one fetch and reports each lifecycle step through `dispatch`.
pub async fn load_listings<S, F>(source: &S, mut dispatch: F)
where
    S: ListingSource + ?Sized,
    F: FnMut(ListingAction),
{
    dispatch(ListingAction::FetchStarted);
    tracing::info!("fetching workspace listings");

    match source.fetch_workspaces().await {
        Ok(list) => {
            tracing::info!(count = list.len(), "workspace listings loaded");
            dispatch(ListingAction::FetchSucceeded(list));
        }
        Err(err) => {
            tracing::error!(error = %err, "workspace listings failed to load");
            dispatch(ListingAction::FetchFailed(err.to_string()));
        }
    }
}

#[derive(Debug, Deserialize)]
struct WorkspaceDto {
    #[serde(deserialize_with = "string_from_json")]
    id: String,
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    state: String,
    #[serde(default)]
    country: String,
    #[serde(default, deserialize_with = "opt_string_from_json")]
    postal_code: Option<String>,
    #[serde(deserialize_with = "f64_from_json")]
    latitude: f64,
    #[serde(deserialize_with = "f64_from_json")]
    longitude: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    rules: Option<String>,
    #[serde(default)]
    amenities: Option<Vec<String>>,
    #[serde(default)]
    facilities: Option<Vec<String>>,
    #[serde(default)]
    images: Option<Vec<String>>,
    #[serde(default)]
    working_hours_start: Option<String>,
    #[serde(default)]
    working_hours_end: Option<String>,
    #[serde(default)]
    contact_person_name: Option<String>,
    #[serde(default = "default_true")]
    is_active: bool,
    #[serde(default)]
    is_day_pass_enabled: bool,
    #[serde(deserialize_with = "f64_from_json")]
    day_pass_price: f64,
    #[serde(default)]
    day_pass_discounts_percentage: Option<BTreeMap<String, DiscountDto>>,
    #[serde(default, deserialize_with = "opt_string_from_json")]
    manager_id: Option<String>,
    #[serde(default)]
    can_edit: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct DiscountDto {
    #[serde(deserialize_with = "f64_from_json")]
    value: f64,
    #[serde(default)]
    message: Option<String>,
}

fn default_true() -> bool {
    true
}

impl From<WorkspaceDto> for Workspace {
    fn from(dto: WorkspaceDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            address: dto.address,
            city: dto.city,
            state: dto.state,
            country: dto.country,
            postal_code: dto.postal_code.unwrap_or_default(),
            latitude: dto.latitude,
            longitude: dto.longitude,
            description: dto.description.filter(|text| !text.trim().is_empty()),
            rules: dto.rules.filter(|text| !text.trim().is_empty()),
            amenities: dto.amenities.unwrap_or_default(),
            facilities: dto.facilities.unwrap_or_default(),
            images: dto.images.unwrap_or_default(),
            working_hours_start: dto.working_hours_start.unwrap_or_default(),
            working_hours_end: dto.working_hours_end.unwrap_or_default(),
            contact_person_name: dto.contact_person_name,
            is_active: dto.is_active,
            is_day_pass_enabled: dto.is_day_pass_enabled,
            day_pass_price: dto.day_pass_price,
            day_pass_discounts_percentage: dto
                .day_pass_discounts_percentage
                .unwrap_or_default()
                .into_iter()
                .map(|(key, discount)| {
                    (
                        key.trim().to_string(),
                        DayPassDiscount {
                            value: discount.value,
                            message: discount.message.unwrap_or_default(),
                        },
                    )
                })
                .collect(),
            manager_id: dto.manager_id,
            can_edit: dto.can_edit.unwrap_or(false),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Str(String),
    Int(i64),
    Float(f64),
}

impl StringOrNumber {
    fn into_string(self) -> String {
        match self {
            StringOrNumber::Str(value) => value,
            StringOrNumber::Int(value) => value.to_string(),
            StringOrNumber::Float(value) => value.to_string(),
        }
    }
}

fn string_from_json<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer).map(StringOrNumber::into_string)
}

fn opt_string_from_json<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<StringOrNumber>::deserialize(deserializer)
        .map(|value| value.map(StringOrNumber::into_string))
}

/// Accepts `12.5` as well as `"12.5"`. `"NaN"` and `"inf"` are rejected.
fn f64_from_json<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let number = match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Int(value) => value as f64,
        StringOrNumber::Float(value) => value,
        StringOrNumber::Str(value) => value.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("expected a number, got {value:?}"))
        })?,
    };
    if number.is_finite() {
        Ok(number)
    } else {
        Err(serde::de::Error::custom(format!(
            "expected a finite number, got {number}"
        )))
    }
}
