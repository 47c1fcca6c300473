mod auth_response;
mod profile;
mod profile_lookup;
