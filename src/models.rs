pub mod empty;
pub mod fetch_state;
pub mod panel_view;
pub mod portfolio;
pub mod profile_summary;
pub mod repository_summary;
