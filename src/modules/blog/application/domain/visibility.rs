//! Which posts a requester may see.
//!
//! A post is publicly visible when it is published, its category is
//! published and its publication date is not in the future. Authors see all
//! of their own posts.

use chrono::{DateTime, Utc};

use super::entities::PostView;
use crate::auth::application::domain::entities::UserId;

/// Filter applied to a post listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostVisibility {
    Public { now: DateTime<Utc> },
    Unrestricted,
}

impl PostVisibility {
    pub fn public(now: DateTime<Utc>) -> Self {
        Self::Public { now }
    }

    /// Profile pages drop the filter only when the owner looks at them.
    pub fn for_profile(author: UserId, viewer: Option<UserId>, now: DateTime<Utc>) -> Self {
        if viewer == Some(author) {
            Self::Unrestricted
        } else {
            Self::Public { now }
        }
    }
}

/// Which posts a listing draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostScope {
    All,
    Category(i32),
    Author(UserId),
}

pub fn is_publicly_visible(post: &PostView, now: DateTime<Utc>) -> bool {
    post.is_published
        && post.category.as_ref().is_some_and(|c| c.is_published)
        && post.pub_date <= now
}

pub fn is_visible_to(post: &PostView, viewer: Option<UserId>, now: DateTime<Utc>) -> bool {
    viewer.is_some_and(|v| post.is_authored_by(v)) || is_publicly_visible(post, now)
}
