pub mod add_comment;
pub mod comment_form;
pub mod create_post;
pub mod delete_comment;
pub mod delete_post;
pub mod edit_comment;
pub mod edit_post;
pub mod get_post_detail;
pub mod list_posts;
pub mod post_form;

pub use add_comment::{AddCommentError, AddCommentUseCase};
pub use comment_form::{CommentCommand, CommentForm};
pub use create_post::{CreatePostError, CreatePostUseCase};
pub use delete_comment::{DeleteCommentError, DeleteCommentUseCase};
pub use delete_post::{DeletePostError, DeletePostUseCase};
pub use edit_comment::{EditCommentError, EditCommentUseCase};
pub use edit_post::{EditPostError, EditPostUseCase};
pub use get_post_detail::{GetPostDetailError, GetPostDetailUseCase, PostDetail};
pub use list_posts::{CategoryPosts, ListPostsError, ListPostsUseCase};
pub use post_form::{Choice, EditablePost, ImageChange, PostChoices, PostCommand, PostForm};
