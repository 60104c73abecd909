//! Great-circle distance and map links.

use url::Url;

use super::entities::Coordinates;

pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_MAP_URL_TEMPLATE: &str =
    "https://www.google.com/maps/search/?api=1&query={lat},{lng}";

/// Haversine distance between two points in kilometers.
pub fn distance_km(origin: Coordinates, destination: Coordinates) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = destination.latitude.to_radians();
    let delta_lat = (destination.latitude - origin.latitude).to_radians();
    let delta_lng = (destination.longitude - origin.longitude).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance shown on a card while its position request is outstanding or after it gave up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DistanceState {
    Pending,
    Known(f64),
    Unknown,
}

impl DistanceState {
    pub fn label(&self) -> String {
        match self {
            DistanceState::Known(km) => format!("{:.0} Kms", km.round()),
            DistanceState::Pending | DistanceState::Unknown => "-- Kms".to_string(),
        }
    }
}

/// Fills `{lat}` and `{lng}` in the template and validates the result.
pub fn map_search_url(template: &str, point: Coordinates) -> Result<Url, url::ParseError> {
    let raw = template
        .replace("{lat}", &point.latitude.to_string())
        .replace("{lng}", &point.longitude.to_string());
    Url::parse(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "expected {expected} ± {tolerance}, got {actual}"
        );
    }

    #[test]
    fn distance_to_self_is_zero() {
        for point in [
            Coordinates::new(0.0, 0.0),
            Coordinates::new(12.9716, 77.5946),
            Coordinates::new(-33.8688, 151.2093),
        ] {
            assert_eq!(distance_km(point, point), 0.0);
        }
    }

    #[test]
    fn distance_is_symmetric() {
        let bengaluru = Coordinates::new(12.9716, 77.5946);
        let mumbai = Coordinates::new(19.0760, 72.8777);
        approx(
            distance_km(bengaluru, mumbai),
            distance_km(mumbai, bengaluru),
            1e-9,
        );
    }

    #[test]
    fn one_degree_of_longitude_on_equator() {
        let km = distance_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
        approx(km, 111.19, 0.5);
    }

    #[test]
    fn antipodal_points_are_half_the_circumference_apart() {
        let km = distance_km(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        approx(km, 20015.0, 50.0);

        let km = distance_km(Coordinates::new(45.0, 30.0), Coordinates::new(-45.0, -150.0));
        approx(km, 20015.0, 50.0);
    }

    #[test]
    fn label_rounds_known_distance() {
        assert_eq!(DistanceState::Known(12.4).label(), "12 Kms");
        assert_eq!(DistanceState::Known(12.5).label(), "13 Kms");
        assert_eq!(DistanceState::Pending.label(), "-- Kms");
        assert_eq!(DistanceState::Unknown.label(), "-- Kms");
    }

    #[test]
    fn map_url_embeds_coordinates() {
        let url = map_search_url(DEFAULT_MAP_URL_TEMPLATE, Coordinates::new(12.5, 77.25))
            .expect("valid template");
        assert_eq!(
            url.as_str(),
            "https://www.google.com/maps/search/?api=1&query=12.5,77.25"
        );
    }

    #[test]
    fn map_url_rejects_garbage_template() {
        assert!(map_search_url("not a url {lat}", Coordinates::new(0.0, 0.0)).is_err());
    }
}
