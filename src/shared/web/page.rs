// src/shared/web/page.rs
use actix_web::{
    http::{header, StatusCode},
    HttpResponse,
};
use serde::Serialize;

pub const NOT_FOUND_TEMPLATE: &str = "pages/404.html";
pub const FORBIDDEN_TEMPLATE: &str = "pages/403.html";
pub const BAD_REQUEST_TEMPLATE: &str = "pages/400.html";
pub const SERVER_ERROR_TEMPLATE: &str = "pages/500.html";

/// Rendered page handed to the templating layer.
#[derive(Serialize)]
pub struct RenderedPage<'a, C: Serialize> {
    pub template: &'a str,
    pub context: C,
}

/// Context for templates that need no values.
#[derive(Serialize, Clone, Copy, Default)]
pub struct EmptyContext {}

#[derive(Serialize, Clone)]
pub struct ErrorContext {
    pub code: String,
    pub message: String,
}

pub struct Page;

impl Page {
    pub fn render<C: Serialize>(template: &str, context: C) -> HttpResponse {
        Self::render_with_status(StatusCode::OK, template, context)
    }

    pub fn render_with_status<C: Serialize>(
        status: StatusCode,
        template: &str,
        context: C,
    ) -> HttpResponse {
        HttpResponse::build(status).json(RenderedPage { template, context })
    }

    pub fn redirect(location: impl AsRef<str>) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location.as_ref()))
            .finish()
    }

    pub fn error(status: StatusCode, template: &str, code: &str, message: &str) -> HttpResponse {
        Self::render_with_status(
            status,
            template,
            ErrorContext {
                code: code.to_string(),
                message: message.to_string(),
            },
        )
    }

    pub fn not_found(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::NOT_FOUND, NOT_FOUND_TEMPLATE, code, message)
    }

    pub fn forbidden(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::FORBIDDEN, FORBIDDEN_TEMPLATE, code, message)
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, BAD_REQUEST_TEMPLATE, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            SERVER_ERROR_TEMPLATE,
            "INTERNAL_ERROR",
            "An unexpected error occurred",
        )
    }
}
