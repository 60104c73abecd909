pub mod feature_tile;
pub mod status;
pub mod workspace_card;
pub mod workspace_detail;

pub use feature_tile::FeatureTile;
pub use status::{Spinner, StatusLine};
pub use workspace_card::WorkspaceCard;
pub use workspace_detail::WorkspaceDetailView;
