// src/shared/web/extractor_config.rs
use actix_web::web::{FormConfig, PathConfig};

use crate::shared::web::Page;

pub fn custom_form_config() -> FormConfig {
    FormConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            Page::bad_request("INVALID_FORM_DATA", &message),
        )
        .into()
    })
}

/// Path segments that fail to parse (e.g. `/posts/abc/`) do not match the route.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            Page::not_found("PAGE_NOT_FOUND", "Page not found"),
        )
        .into()
    })
}
