pub mod home;
pub mod workspace_detail;

pub use home::HomePage;
pub use workspace_detail::WorkspaceDetailPage;
