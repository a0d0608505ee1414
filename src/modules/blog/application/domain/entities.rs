use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::UserId;

/// Length of the short label shown for records in lists and logs.
pub const LABEL_LENGTH: usize = 30;

pub fn short_label(value: &str) -> String {
    value.chars().take(LABEL_LENGTH).collect()
}

//
// ──────────────────────────────────────────────────────────
// Taxonomy
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.title))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Location {
    pub id: i32,
    pub name: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.name))
    }
}

//
// ──────────────────────────────────────────────────────────
// Posts
// ──────────────────────────────────────────────────────────
//

/// Author fields that listings and detail pages show.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthorRef {
    pub id: UserId,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// A post with its related rows loaded and its comment count annotated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostView {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    /// Path relative to the media root, e.g. `post_images/<uuid>.png`.
    pub image: Option<String>,
    pub image_url: Option<String>,
    pub author: AuthorRef,
    pub category: Option<Category>,
    pub location: Option<Location>,
    pub comment_count: u64,
}

impl PostView {
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author.id == user
    }

    pub fn with_image_url(mut self, media_url: &str) -> Self {
        self.image_url = self
            .image
            .as_deref()
            .map(|path| format!("{}/{}", media_url.trim_end_matches('/'), path));
        self
    }
}

impl fmt::Display for PostView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&short_label(&self.title))
    }
}

//
// ──────────────────────────────────────────────────────────
// Comments
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub post_id: i32,
    pub text: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub author: AuthorRef,
}

impl CommentView {
    pub fn is_authored_by(&self, user: UserId) -> bool {
        self.author.id == user
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn author() -> AuthorRef {
        AuthorRef {
            id: UserId::from(Uuid::new_v4()),
            username: "anna".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        }
    }

    fn post(title: &str, image: Option<&str>) -> PostView {
        PostView {
            id: 1,
            title: title.to_string(),
            text: "text".to_string(),
            pub_date: Utc::now(),
            is_published: true,
            created_at: Utc::now(),
            image: image.map(str::to_string),
            image_url: None,
            author: author(),
            category: None,
            location: None,
            comment_count: 0,
        }
    }

    #[test]
    fn labels_are_cut_to_thirty_characters() {
        let long = "Очень длинный заголовок поста про путешествия";
        let view = post(long, None);

        assert_eq!(view.to_string().chars().count(), LABEL_LENGTH);
        assert!(long.starts_with(&view.to_string()));
        assert_eq!(post("Short", None).to_string(), "Short");
    }

    #[test]
    fn image_url_joins_media_prefix() {
        let with = post("t", Some("post_images/a.png")).with_image_url("/media/");
        assert_eq!(with.image_url.as_deref(), Some("/media/post_images/a.png"));

        let without = post("t", None).with_image_url("/media");
        assert_eq!(without.image_url, None);
    }
}
