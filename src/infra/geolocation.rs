//! Device position providers and the per-card distance task.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::domain::{distance_km, Coordinates, DistanceState};
use crate::infra::listing_source::USER_AGENT;
use crate::util::config::GeolocationProvider;

#[derive(Debug, Error)]
pub enum GeolocationError {
    #[error("geolocation is disabled")]
    Disabled,
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("position lookup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("position lookup returned no coordinates")]
    MissingCoordinates,
    #[error("position lookup timed out after {0:?}")]
    Timeout(Duration),
    #[error("position lookup cancelled")]
    Cancelled,
}

#[async_trait]
pub trait Geolocator: Send + Sync {
    /// One best-effort sample; callers treat any error as "distance unknown".
    async fn current_position(&self) -> Result<Coordinates, GeolocationError>;
}

/// Always reports the configured position.
pub struct FixedGeolocator(pub Coordinates);

#[async_trait]
impl Geolocator for FixedGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Ok(self.0)
    }
}

/// Stands in for a denied permission prompt.
pub struct DisabledGeolocator;

#[async_trait]
impl Geolocator for DisabledGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        Err(GeolocationError::Disabled)
    }
}

/// Approximates the device position from its public IP.
#[derive(Clone)]
pub struct IpGeolocator {
    http: Client,
    endpoint: Url,
}

impl IpGeolocator {
    pub fn new(endpoint: &str) -> Result<Self, GeolocationError> {
        let endpoint = Url::parse(endpoint)?;
        let http = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { http, endpoint })
    }
}

#[derive(Debug, Deserialize)]
struct IpLookupDto {
    #[serde(default, alias = "lat")]
    latitude: Option<f64>,
    #[serde(default, alias = "lon", alias = "lng")]
    longitude: Option<f64>,
}

#[async_trait]
impl Geolocator for IpGeolocator {
    async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
        let dto: IpLookupDto = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        match (dto.latitude, dto.longitude) {
            (Some(latitude), Some(longitude)) => Ok(Coordinates::new(latitude, longitude)),
            _ => Err(GeolocationError::MissingCoordinates),
        }
    }
}

/// Builds the configured provider. A broken IP endpoint degrades to disabled.
pub fn geolocator_for(provider: &GeolocationProvider) -> Arc<dyn Geolocator> {
    match provider {
        GeolocationProvider::Disabled => Arc::new(DisabledGeolocator),
        GeolocationProvider::Fixed {
            latitude,
            longitude,
        } => Arc::new(FixedGeolocator(Coordinates::new(*latitude, *longitude))),
        GeolocationProvider::IpLookup { endpoint } => match IpGeolocator::new(endpoint) {
            Ok(geolocator) => Arc::new(geolocator),
            Err(err) => {
                tracing::warn!(%endpoint, error = %err, "IP geolocation unavailable, disabling");
                Arc::new(DisabledGeolocator)
            }
        },
    }
}

/// Requests one position and measures the distance to `target`.
///
/// Never fails: cancellation, timeout and provider errors all collapse into
/// [`DistanceState::Unknown`] after being logged.
pub async fn locate_distance(
    geolocator: &dyn Geolocator,
    target: Coordinates,
    timeout: Duration,
    cancel: &CancellationToken,
) -> DistanceState {
    let request = tokio::time::timeout(timeout, geolocator.current_position());

    let outcome = tokio::select! {
        _ = cancel.cancelled() => Err(GeolocationError::Cancelled),
        result = request => result.unwrap_or(Err(GeolocationError::Timeout(timeout))),
    };

    match outcome {
        Ok(position) => DistanceState::Known(distance_km(position, target)),
        Err(GeolocationError::Cancelled) => {
            tracing::debug!("geolocation request dropped with its card");
            DistanceState::Unknown
        }
        Err(err) => {
            tracing::warn!(error = %err, "geolocation unavailable");
            DistanceState::Unknown
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TIMEOUT: Duration = Duration::from_secs(5);

    struct NeverResolves;

    #[async_trait]
    impl Geolocator for NeverResolves {
        async fn current_position(&self) -> Result<Coordinates, GeolocationError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn fixed_position_yields_known_distance() {
        let here = FixedGeolocator(Coordinates::new(0.0, 0.0));
        let state = locate_distance(
            &here,
            Coordinates::new(0.0, 1.0),
            TIMEOUT,
            &CancellationToken::new(),
        )
        .await;
        match state {
            DistanceState::Known(km) => assert!((km - 111.19).abs() < 0.5),
            other => panic!("expected a distance, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn disabled_provider_is_unknown() {
        let state = locate_distance(
            &DisabledGeolocator,
            Coordinates::new(0.0, 1.0),
            TIMEOUT,
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(state, DistanceState::Unknown);
    }

    #[tokio::test]
    async fn cancelled_request_is_unknown() {
        let token = CancellationToken::new();
        token.cancel();
        let state =
            locate_distance(&NeverResolves, Coordinates::new(0.0, 1.0), TIMEOUT, &token).await;
        assert_eq!(state, DistanceState::Unknown);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_provider_times_out() {
        let state = locate_distance(
            &NeverResolves,
            Coordinates::new(0.0, 1.0),
            Duration::from_millis(50),
            &CancellationToken::new(),
        )
        .await;
        assert_eq!(state, DistanceState::Unknown);
    }

    #[tokio::test]
    async fn provider_config_selects_implementation() {
        let fixed = geolocator_for(&GeolocationProvider::Fixed {
            latitude: 1.0,
            longitude: 2.0,
        });
        assert_eq!(
            fixed.current_position().await.unwrap(),
            Coordinates::new(1.0, 2.0)
        );

        let broken = geolocator_for(&GeolocationProvider::IpLookup {
            endpoint: "not a url".to_string(),
        });
        assert!(matches!(
            broken.current_position().await,
            Err(GeolocationError::Disabled)
        ));
    }

    #[tokio::test]
    async fn ip_lookup_accepts_both_field_styles() {
        for body in [
            json!({ "latitude": 12.97, "longitude": 77.59 }),
            json!({ "status": "success", "lat": 12.97, "lon": 77.59 }),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("GET"))
                .respond_with(ResponseTemplate::new(200).set_body_json(body))
                .mount(&server)
                .await;

            let position = IpGeolocator::new(&server.uri())
                .unwrap()
                .current_position()
                .await
                .unwrap();
            assert_eq!(position, Coordinates::new(12.97, 77.59));
        }
    }

    #[tokio::test]
    async fn ip_lookup_without_coordinates_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "ip": "1.2.3.4" })))
            .mount(&server)
            .await;

        let result = IpGeolocator::new(&server.uri())
            .unwrap()
            .current_position()
            .await;
        assert!(matches!(result, Err(GeolocationError::MissingCoordinates)));
    }
}
