pub mod forms;
pub mod pagination;
pub mod web;
