mod extractor_config;
pub mod named_routes;
pub mod page;

pub use extractor_config::{custom_form_config, custom_path_config};
pub use page::{EmptyContext, ErrorContext, Page, RenderedPage};
