mod add_comment;
mod category_posts;
mod create_post;
mod delete_comment;
mod delete_post;
mod edit_comment;
mod edit_post;
mod index;
mod post_detail;
mod profile;

pub use add_comment::add_comment_handler;
pub use category_posts::category_posts_handler;
pub use create_post::{create_post_form_handler, create_post_handler};
pub use delete_comment::{delete_comment_form_handler, delete_comment_handler};
pub use delete_post::{delete_post_form_handler, delete_post_handler};
pub use edit_comment::{edit_comment_form_handler, edit_comment_handler};
pub use edit_post::{edit_post_form_handler, edit_post_handler};
pub use index::index_handler;
pub use post_detail::post_detail_handler;
pub use profile::profile_handler;

use actix_web::HttpResponse;
use serde::Serialize;

use crate::blog::application::domain::entities::PostView;
use crate::blog::application::ports::incoming::use_cases::PostForm;
use crate::shared::forms::FormContext;
use crate::shared::pagination;
use crate::shared::web::Page;

pub const POST_FORM_TEMPLATE: &str = "blog/create.html";
pub const COMMENT_TEMPLATE: &str = "blog/comment.html";

fn with_image_urls(page: pagination::Page<PostView>, media_url: &str) -> pagination::Page<PostView> {
    page.map(|post| post.with_image_url(media_url))
}

#[derive(Serialize)]
struct PostFormPage {
    form: FormContext<PostForm>,
}

/// Create, edit and delete confirmation share one template.
fn render_post_form(form: FormContext<PostForm>) -> HttpResponse {
    Page::render(POST_FORM_TEMPLATE, PostFormPage { form })
}
