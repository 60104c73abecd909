use super::entities::{Coordinates, Workspace, WorkspaceId};
use super::geo::map_search_url;
use super::pricing::{bulk_pass_price, BulkPassQuote, PricingError};

/// Everything a listing card renders apart from the device distance.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: WorkspaceId,
    pub name: String,
    pub short_address: String,
    pub image: String,
    pub day_price: f64,
    pub bulk: Result<BulkPassQuote, PricingError>,
    pub coordinates: Coordinates,
    pub map_url: Option<String>,
}

impl CardView {
    pub fn from_workspace(workspace: &Workspace, bulk_days: u32, map_template: &str) -> Self {
        let coordinates = workspace.coordinates();
        Self {
            id: workspace.id.clone(),
            name: workspace.name.clone(),
            short_address: workspace.short_address().to_string(),
            image: workspace.primary_image().to_string(),
            day_price: workspace.day_pass_price,
            bulk: bulk_pass_price(
                workspace.day_pass_price,
                &workspace.day_pass_discounts_percentage,
                bulk_days,
            ),
            coordinates,
            map_url: map_search_url(map_template, coordinates)
                .ok()
                .map(String::from),
        }
    }
}

/// Cards for the first `display_count` listings, in source order.
pub fn build_card_views(
    list: &[Workspace],
    display_count: usize,
    bulk_days: u32,
    map_template: &str,
) -> Vec<CardView> {
    list.iter()
        .take(display_count)
        .map(|workspace| CardView::from_workspace(workspace, bulk_days, map_template))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::fixtures::workspace;
    use crate::domain::geo::DEFAULT_MAP_URL_TEMPLATE;
    use crate::domain::pricing::BULK_DAYS;

    #[test]
    fn caps_at_display_count() {
        let list: Vec<_> = (0..9)
            .map(|i| workspace(&i.to_string(), 100.0, &[("10", 20.0)]))
            .collect();
        let cards = build_card_views(&list, 6, BULK_DAYS, DEFAULT_MAP_URL_TEMPLATE);
        assert_eq!(cards.len(), 6);
        assert_eq!(cards[0].id, "0");
        assert_eq!(cards[5].id, "5");
    }

    #[test]
    fn missing_tier_only_affects_its_own_card() {
        let list = vec![
            workspace("good", 100.0, &[("10", 20.0)]),
            workspace("bad", 100.0, &[("5", 10.0)]),
        ];
        let cards = build_card_views(&list, 6, BULK_DAYS, DEFAULT_MAP_URL_TEMPLATE);
        assert_eq!(cards[0].bulk.as_ref().map(|q| q.price), Ok(800));
        assert!(matches!(cards[1].bulk, Err(PricingError::MissingTier(_))));
        assert_eq!(cards[1].short_address, "12 MG Road");
    }

    #[test]
    fn card_carries_map_link() {
        let list = vec![workspace("a", 100.0, &[("10", 20.0)])];
        let cards = build_card_views(&list, 6, BULK_DAYS, DEFAULT_MAP_URL_TEMPLATE);
        assert_eq!(
            cards[0].map_url.as_deref(),
            Some("https://www.google.com/maps/search/?api=1&query=12.9716,77.5946")
        );
    }
}
