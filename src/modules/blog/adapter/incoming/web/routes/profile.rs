use actix_web::{get, web, HttpResponse, Responder};
use serde::Serialize;
use tracing::error;

use super::with_image_urls;
use crate::auth::application::domain::entities::PublicProfile;
use crate::blog::application::domain::entities::PostView;
use crate::blog::application::ports::incoming::use_cases::ListPostsError;
use crate::modules::auth::adapter::incoming::web::extractors::{
    resolve_profile_or_response, AuthenticatedUser,
};
use crate::shared::pagination::{self, PageQuery};
use crate::shared::web::Page;
use crate::AppState;

pub const PROFILE_TEMPLATE: &str = "blog/profile.html";

#[derive(Serialize)]
struct ProfilePage {
    profile: PublicProfile,
    page_obj: pagination::Page<PostView>,
}

/// The owner sees every post of their own, drafts and scheduled ones included.
#[get("/profile/{username}/")]
pub async fn profile_handler(
    path: web::Path<String>,
    query: web::Query<PageQuery>,
    viewer: Option<AuthenticatedUser>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    let profile = match resolve_profile_or_response(&data, &username).await {
        Ok(profile) => profile,
        Err(response) => return response,
    };

    let posts = data
        .blog
        .list_posts
        .by_author(profile.id, viewer.map(|u| u.user_id), query.request())
        .await;

    match posts {
        Ok(page) => Page::render(
            PROFILE_TEMPLATE,
            ProfilePage {
                profile: profile.public(),
                page_obj: with_image_urls(page, &data.media_url),
            },
        ),
        Err(err) => map_profile_posts_error(err, &username),
    }
}

/// `by_author` applies no category filter, so every failure here is unexpected.
fn map_profile_posts_error(err: ListPostsError, username: &str) -> HttpResponse {
    match err {
        ListPostsError::RepositoryError(e) => {
            error!(username = %username, error = %e, "Repository error listing profile posts");
        }
        ListPostsError::CategoryNotFound => {
            error!(username = %username, "Category lookup failed while listing profile posts");
        }
    }
    Page::internal_error()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::blog_fixtures::{hidden_post, user_id};
    use crate::tests::support::stubs::{
        bearer_for, test_token_provider, StubFetchProfileUseCase, StubListPostsUseCase,
    };

    #[actix_web::test]
    async fn renders_profile_with_posts() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_fetch_profile(StubFetchProfileUseCase::found("anna"))
                        .with_list_posts(StubListPostsUseCase::with_posts(vec![hidden_post(
                            4,
                            user_id(),
                        )]))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(profile_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/profile/anna/")
            .insert_header(("Authorization", bearer_for(user_id(), "anna")))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["template"], PROFILE_TEMPLATE);
        assert_eq!(body["context"]["profile"]["username"], "anna");
        assert_eq!(body["context"]["page_obj"]["items"][0]["id"], 4);
    }

    #[actix_web::test]
    async fn anonymous_viewer_is_allowed() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_fetch_profile(StubFetchProfileUseCase::found("anna"))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/profile/anna/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["context"]["profile"]["username"], "anna");
        assert!(body["context"]["profile"].get("email").is_none());
    }

    #[actix_web::test]
    async fn listing_failure_is_500_not_404() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_fetch_profile(StubFetchProfileUseCase::found("anna"))
                        .with_list_posts(StubListPostsUseCase::error(
                            ListPostsError::CategoryNotFound,
                        ))
                        .build(),
                )
                .app_data(web::Data::new(test_token_provider()))
                .service(profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/profile/anna/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn unknown_user_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .app_data(web::Data::new(test_token_provider()))
                .service(profile_handler),
        )
        .await;

        let req = test::TestRequest::get().uri("/profile/ghost/").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
