use actix_web::{get, HttpRequest, HttpResponse, Responder};

use crate::shared::web::{EmptyContext, Page};

pub const ABOUT_TEMPLATE: &str = "pages/about.html";
pub const RULES_TEMPLATE: &str = "pages/rules.html";

#[get("/pages/about/")]
pub async fn about_handler() -> impl Responder {
    Page::render(ABOUT_TEMPLATE, EmptyContext::default())
}

#[get("/pages/rules/")]
pub async fn rules_handler() -> impl Responder {
    Page::render(RULES_TEMPLATE, EmptyContext::default())
}

/// Default service for unmatched routes.
pub async fn not_found_handler(req: HttpRequest) -> HttpResponse {
    tracing::debug!(path = %req.path(), "No route matched");
    Page::not_found("PAGE_NOT_FOUND", "Page not found")
}
