pub mod github_profile_mapper;
pub mod language_color_mapper;
