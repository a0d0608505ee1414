mod edit_profile;
mod login;
mod logout;
mod registration;

pub use edit_profile::{edit_profile_form_handler, edit_profile_handler};
pub use login::{login_form_handler, login_handler};
pub use logout::logout_handler;
pub use registration::{registration_form_handler, registration_handler};
