use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use super::with_image_urls;
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::ports::incoming::use_cases::ListPostsError;
use crate::shared::pagination::{self, PageQuery};
use crate::shared::web::Page;
use crate::AppState;

pub const INDEX_TEMPLATE: &str = "blog/index.html";

#[derive(Serialize)]
struct IndexPage {
    page_obj: pagination::Page<PostView>,
}

#[get("/")]
pub async fn index_handler(query: web::Query<PageQuery>, data: web::Data<AppState>) -> impl Responder {
    match data.blog.list_posts.index(query.request()).await {
        Ok(page) => Page::render(
            INDEX_TEMPLATE,
            IndexPage {
                page_obj: with_image_urls(page, &data.media_url),
            },
        ),
        Err(err) => map_index_error(err),
    }
}

fn map_index_error(err: ListPostsError) -> HttpResponse {
    match err {
        ListPostsError::CategoryNotFound => Page::not_found("CATEGORY_NOT_FOUND", "Category not found"),
        ListPostsError::RepositoryError(e) => {
            error!(error = %e, "Repository error listing posts");
            Page::internal_error()
        }
    }
}
