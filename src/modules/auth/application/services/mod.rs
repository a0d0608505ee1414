pub mod fetch_profile_service;
pub mod login_user_service;
pub mod password;
pub mod register_user_service;
pub mod update_profile_service;

pub use fetch_profile_service::FetchProfileService;
pub use login_user_service::LoginUserService;
pub use register_user_service::RegisterUserService;
pub use update_profile_service::UpdateProfileService;
