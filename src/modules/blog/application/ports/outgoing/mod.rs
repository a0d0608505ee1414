pub mod category_query;
pub mod comment_query;
pub mod comment_repository;
pub mod location_query;
pub mod media_storage;
pub mod post_query;
pub mod post_repository;

pub use category_query::{CategoryQuery, CategoryQueryError};
pub use comment_query::{CommentQuery, CommentQueryError};
pub use comment_repository::{CommentRepository, CommentRepositoryError, NewComment};
pub use location_query::{LocationQuery, LocationQueryError};
pub use media_storage::{MediaStorage, MediaStorageError};
pub use post_query::{PostQuery, PostQueryError};
pub use post_repository::{PostData, PostRepository, PostRepositoryError};
