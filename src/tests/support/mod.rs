pub mod app_state_builder;
pub mod blog_fixtures;
pub mod stubs;
