use actix_web::{get, post, web, HttpResponse, Responder};
use tracing::error;

use super::render_post_form;
use crate::blog::application::ports::incoming::use_cases::DeletePostError;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedUser;
use crate::shared::forms::FormContext;
use crate::shared::web::{named_routes, Page};
use crate::AppState;

// Anonymous visitors get the same 403 as other non-authors, not a login redirect.

#[get("/posts/{post_id:\\d+}/delete/")]
pub async fn delete_post_form_handler(
    path: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data.blog.delete_post.load(post_id, user.map(|u| u.user_id)).await {
        Ok(editable) => {
            render_post_form(FormContext::unbound(editable.form).with_choices(editable.choices))
        }
        Err(err) => map_delete_post_error(err, post_id),
    }
}

#[post("/posts/{post_id:\\d+}/delete/")]
pub async fn delete_post_handler(
    path: web::Path<i32>,
    user: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let requester = user.as_ref().map(|u| u.user_id);

    match (data.blog.delete_post.execute(post_id, requester).await, user) {
        (Ok(()), Some(user)) => Page::redirect(named_routes::profile(&user.username)),
        (Ok(()), None) => Page::redirect(named_routes::index()),
        (Err(err), _) => map_delete_post_error(err, post_id),
    }
}

fn map_delete_post_error(err: DeletePostError, post_id: i32) -> HttpResponse {
    match err {
        DeletePostError::NotFound => Page::not_found("POST_NOT_FOUND", "Post not found"),
        DeletePostError::Forbidden => {
            Page::forbidden("PERMISSION_DENIED", "Only the author can delete this post")
        }
        DeletePostError::RepositoryError(e) => {
            error!(post_id, error = %e, "Repository error deleting post");
            Page::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blog::adapter::incoming::web::routes::POST_FORM_TEMPLATE;
    use actix_web::{http::header, http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::blog_fixtures::{post, user_id};
    use crate::tests::support::stubs::{bearer_for, test_token_provider, StubDeletePostUseCase};

    async fn call(stub: StubDeletePostUseCase, req: test::TestRequest) -> actix_web::dev::ServiceResponse {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_delete_post(stub).build())
                .app_data(web::Data::new(test_token_provider()))
                .service(delete_post_form_handler)
                .service(delete_post_handler),
        )
        .await;
        test::call_service(&app, req.to_request()).await
    }

    #[actix_web::test]
    async fn get_renders_prefilled_confirmation() {
        let req = test::TestRequest::get()
            .uri("/posts/3/delete/")
            .insert_header(("Authorization", bearer_for(user_id(), "anna")));

        let resp = call(StubDeletePostUseCase::deletable(&post(3, user_id())), req).await;
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(body["template"], POST_FORM_TEMPLATE);
        assert_eq!(body["context"]["form"]["data"]["title"], "Post 3");
    }

    #[actix_web::test]
    async fn post_deletes_and_redirects_to_profile() {
        let req = test::TestRequest::post()
            .uri("/posts/3/delete/")
            .insert_header(("Authorization", bearer_for(user_id(), "anna")));

        let resp = call(StubDeletePostUseCase::deletable(&post(3, user_id())), req).await;

        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/profile/anna/");
    }

    #[actix_web::test]
    async fn anonymous_gets_403_not_login_redirect() {
        let req = test::TestRequest::post().uri("/posts/3/delete/");

        let resp = call(StubDeletePostUseCase::error(DeletePostError::Forbidden), req).await;

        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn missing_post_is_404() {
        let req = test::TestRequest::get().uri("/posts/3/delete/");

        let resp = call(StubDeletePostUseCase::error(DeletePostError::NotFound), req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
