pub mod auth_response;
pub mod profile;
pub mod profile_lookup;
pub mod save_response;
pub mod targeting_list;
