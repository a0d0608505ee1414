pub mod modules;
pub use modules::{auth, blog, pages};

mod config;
pub mod health;
mod shared;

#[cfg(test)]
mod tests;

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::auth::adapter::incoming::web::session_cookie::SessionCookieConfig;
use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::Argon2Hasher;
use crate::auth::adapter::outgoing::{UserQueryPostgres, UserRepositoryPostgres};
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::services::password::BasicPasswordPolicy;
use crate::auth::application::services::{
    FetchProfileService, LoginUserService, RegisterUserService, UpdateProfileService,
};
use crate::auth::application::AuthUseCases;
use crate::blog::adapter::outgoing::{
    CategoryQueryPostgres, CommentQueryPostgres, CommentRepositoryPostgres, LocalMediaStorage,
    LocationQueryPostgres, PostQueryPostgres, PostRepositoryPostgres,
};
use crate::blog::application::domain::media::ImagePolicy;
use crate::blog::application::ports::outgoing::MediaStorage;
use crate::blog::application::services::{
    AddCommentService, CreatePostService, DeleteCommentService, DeletePostService,
    EditCommentService, EditPostService, GetPostDetailService, ListPostsService,
    PostChoicesLoader,
};
use crate::blog::application::BlogUseCases;
use crate::config::{load_env_files, AppConfig, DatabaseConfig};
use crate::shared::web::{custom_form_config, custom_path_config};

#[derive(Clone)]
pub struct AppState {
    pub auth: AuthUseCases,
    pub blog: BlogUseCases,
    pub session_cookie: SessionCookieConfig,
    /// URL prefix of uploaded media, without a trailing slash.
    pub media_url: String,
}

async fn connect(config: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opt = ConnectOptions::new(config.url.clone());
    opt.max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;

    if config.run_migrations {
        Migrator::up(&conn, None)
            .await
            .context("Failed to apply migrations")?;
        info!("Migrations applied");
    }
    Ok(conn)
}

fn build_auth(
    db: &Arc<DatabaseConnection>,
    config: &AppConfig,
    token_provider: Arc<dyn TokenProvider + Send + Sync>,
) -> anyhow::Result<AuthUseCases> {
    let user_query = UserQueryPostgres::new(Arc::clone(db));
    let user_repo = UserRepositoryPostgres::new(Arc::clone(db));
    let hasher = Arc::new(
        Argon2Hasher::from_config(&config.argon2)
            .map_err(|e| anyhow::anyhow!("Invalid Argon2 parameters: {e}"))?,
    );

    Ok(AuthUseCases {
        register: Arc::new(RegisterUserService::new(
            user_query.clone(),
            user_repo.clone(),
            hasher.clone(),
            Arc::new(BasicPasswordPolicy),
        )),
        login: Arc::new(LoginUserService::new(
            user_query.clone(),
            hasher,
            Arc::clone(&token_provider),
        )),
        fetch_profile: Arc::new(FetchProfileService::new(user_query.clone())),
        update_profile: Arc::new(UpdateProfileService::new(
            user_query,
            user_repo,
            token_provider,
        )),
    })
}

fn build_blog(db: &Arc<DatabaseConnection>, config: &AppConfig) -> BlogUseCases {
    let posts = PostQueryPostgres::new(Arc::clone(db));
    let post_repo = PostRepositoryPostgres::new(Arc::clone(db));
    let categories = CategoryQueryPostgres::new(Arc::clone(db));
    let comments = CommentQueryPostgres::new(Arc::clone(db));
    let comment_repo = CommentRepositoryPostgres::new(Arc::clone(db));
    let media: Arc<dyn MediaStorage + Send + Sync> =
        Arc::new(LocalMediaStorage::new(config.media.root.clone()));
    let choices = PostChoicesLoader::new(
        Arc::new(categories.clone()),
        Arc::new(LocationQueryPostgres::new(Arc::clone(db))),
    );
    let policy = ImagePolicy::default();

    BlogUseCases {
        list_posts: Arc::new(ListPostsService::new(posts.clone(), categories)),
        post_detail: Arc::new(GetPostDetailService::new(posts.clone(), comments.clone())),
        create_post: Arc::new(CreatePostService::new(
            post_repo.clone(),
            choices.clone(),
            Arc::clone(&media),
            policy.clone(),
        )),
        edit_post: Arc::new(EditPostService::new(
            posts.clone(),
            post_repo.clone(),
            choices.clone(),
            media,
            policy,
        )),
        delete_post: Arc::new(DeletePostService::new(posts.clone(), post_repo, choices)),
        add_comment: Arc::new(AddCommentService::new(posts, comment_repo.clone())),
        edit_comment: Arc::new(EditCommentService::new(comments.clone(), comment_repo.clone())),
        delete_comment: Arc::new(DeleteCommentService::new(comments, comment_repo)),
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    load_env_files();
    let config = AppConfig::from_env().context("Invalid configuration")?;
    info!(environment = %config.environment, "Starting blogicum");

    let db = Arc::new(connect(&config.database).await?);

    let token_provider: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(config.jwt.clone()));

    let state = AppState {
        auth: build_auth(&db, &config, Arc::clone(&token_provider))?,
        blog: build_blog(&db, &config),
        session_cookie: SessionCookieConfig {
            max_age_secs: config.jwt.access_token_expiry,
            secure: config.environment == "production",
        },
        media_url: config.media.url.clone(),
    };

    if config.media.serve {
        tokio::fs::create_dir_all(&config.media.root)
            .await
            .with_context(|| format!("Cannot create media root {:?}", config.media.root))?;
    }

    let (host, port) = config.bind_address();
    info!("Server run on: {host}:{port}");

    let media = config.media.clone();
    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider)))
            .app_data(web::Data::new(Arc::clone(&db)))
            .app_data(custom_form_config())
            .app_data(custom_path_config());

        if media.serve {
            app = app.service(actix_files::Files::new(&media.url, &media.root));
        }

        app.configure(init_routes)
            .default_service(web::to(crate::pages::routes::not_found_handler))
    })
    .bind((host, port))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::auth::adapter::incoming::web::routes as auth_routes;
    use crate::blog::adapter::incoming::web::routes as blog_routes;
    use crate::pages::routes as page_routes;

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Blog
    cfg.service(blog_routes::index_handler);
    cfg.service(blog_routes::create_post_form_handler);
    cfg.service(blog_routes::create_post_handler);
    cfg.service(blog_routes::post_detail_handler);
    cfg.service(blog_routes::edit_post_form_handler);
    cfg.service(blog_routes::edit_post_handler);
    cfg.service(blog_routes::delete_post_form_handler);
    cfg.service(blog_routes::delete_post_handler);
    cfg.service(blog_routes::add_comment_handler);
    cfg.service(blog_routes::edit_comment_form_handler);
    cfg.service(blog_routes::edit_comment_handler);
    cfg.service(blog_routes::delete_comment_form_handler);
    cfg.service(blog_routes::delete_comment_handler);
    cfg.service(blog_routes::category_posts_handler);
    cfg.service(blog_routes::profile_handler);
    // Auth
    cfg.service(auth_routes::edit_profile_form_handler);
    cfg.service(auth_routes::edit_profile_handler);
    cfg.service(auth_routes::login_form_handler);
    cfg.service(auth_routes::login_handler);
    cfg.service(auth_routes::logout_handler);
    cfg.service(auth_routes::registration_form_handler);
    cfg.service(auth_routes::registration_handler);
    // Pages
    cfg.service(page_routes::about_handler);
    cfg.service(page_routes::rules_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
