pub mod category_query_postgres;
pub mod comment_query_postgres;
pub mod comment_repository_postgres;
pub mod local_media_storage;
pub mod location_query_postgres;
mod mapping;
pub mod post_query_postgres;
pub mod post_repository_postgres;
pub mod sea_orm_entity;

pub use category_query_postgres::CategoryQueryPostgres;
pub use comment_query_postgres::CommentQueryPostgres;
pub use comment_repository_postgres::CommentRepositoryPostgres;
pub use local_media_storage::LocalMediaStorage;
pub use location_query_postgres::LocationQueryPostgres;
pub use post_query_postgres::PostQueryPostgres;
pub use post_repository_postgres::PostRepositoryPostgres;
