use std::collections::BTreeMap;

/// Identifier for workspaces returned by the listing source.
pub type WorkspaceId = String;

/// Bulk-quantity key (e.g. `"10"`) to discount descriptor.
pub type DiscountTable = BTreeMap<String, DayPassDiscount>;

/// Placeholder shown when a listing carries no images.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=Workspace";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DayPassDiscount {
    /// Percentage off the per-day rate, 0-100.
    pub value: f64,
    pub message: String,
}

/// A single coworking listing as served by the remote source.
#[derive(Clone, Debug, PartialEq)]
pub struct Workspace {
    pub id: WorkspaceId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: Option<String>,
    pub rules: Option<String>,
    pub amenities: Vec<String>,
    pub facilities: Vec<String>,
    /// Ordered; the first entry is the primary image.
    pub images: Vec<String>,
    pub working_hours_start: String,
    pub working_hours_end: String,
    pub contact_person_name: Option<String>,
    pub is_active: bool,
    pub is_day_pass_enabled: bool,
    pub day_pass_price: f64,
    pub day_pass_discounts_percentage: DiscountTable,
    pub manager_id: Option<String>,
    pub can_edit: bool,
}

impl Workspace {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }

    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// Street part of the address, before the first comma.
    pub fn short_address(&self) -> &str {
        self.address
            .split(',')
            .next()
            .map(str::trim)
            .unwrap_or_default()
    }

    /// "City, State, Country" with empty parts skipped.
    pub fn locality(&self) -> String {
        [&self.city, &self.state, &self.country]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn workspace(id: &str, price: f64, discounts: &[(&str, f64)]) -> Workspace {
        Workspace {
            id: id.to_string(),
            name: format!("Workspace {id}"),
            address: "12 MG Road, Ashok Nagar".to_string(),
            city: "Bengaluru".to_string(),
            state: "Karnataka".to_string(),
            country: "India".to_string(),
            postal_code: "560001".to_string(),
            latitude: 12.9716,
            longitude: 77.5946,
            description: None,
            rules: None,
            amenities: vec!["Wifi".to_string(), "Coffee".to_string()],
            facilities: Vec::new(),
            images: vec![format!("https://img.example/{id}.jpg")],
            working_hours_start: "09:00:00".to_string(),
            working_hours_end: "18:30:00".to_string(),
            contact_person_name: None,
            is_active: true,
            is_day_pass_enabled: true,
            day_pass_price: price,
            day_pass_discounts_percentage: discounts
                .iter()
                .map(|(key, value)| {
                    (
                        key.to_string(),
                        DayPassDiscount {
                            value: *value,
                            message: format!("{value}% off"),
                        },
                    )
                })
                .collect(),
            manager_id: None,
            can_edit: false,
        }
    }
}
