pub mod github_profile_service;
