pub mod categories;
pub mod comments;
pub mod locations;
pub mod posts;
