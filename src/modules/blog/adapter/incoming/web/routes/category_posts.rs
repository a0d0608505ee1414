use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use super::with_image_urls;
use crate::blog::application::domain::entities::{Category, PostView};
use crate::blog::application::ports::incoming::use_cases::ListPostsError;
use crate::shared::pagination::{self, PageQuery};
use crate::shared::web::Page;
use crate::AppState;

pub const CATEGORY_TEMPLATE: &str = "blog/category.html";

#[derive(Serialize)]
struct CategoryPage {
    category: Category,
    page_obj: pagination::Page<PostView>,
}

#[get("/category/{category_slug}/")]
pub async fn category_posts_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let slug = path.into_inner();

    match data.blog.list_posts.by_category(&slug, query.request()).await {
        Ok(found) => Page::render(
            CATEGORY_TEMPLATE,
            CategoryPage {
                category: found.category,
                page_obj: with_image_urls(found.page, &data.media_url),
            },
        ),
        Err(err) => map_category_error(err, &slug),
    }
}

fn map_category_error(err: ListPostsError, slug: &str) -> HttpResponse {
    match err {
        ListPostsError::CategoryNotFound => Page::not_found("CATEGORY_NOT_FOUND", "Category not found"),
        ListPostsError::RepositoryError(e) => {
            error!(slug = %slug, error = %e, "Repository error listing category posts");
            Page::internal_error()
        }
    }
}
