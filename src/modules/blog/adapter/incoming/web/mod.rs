pub mod post_multipart;
pub mod routes;
