pub mod entities;
pub mod media;
pub mod visibility;
