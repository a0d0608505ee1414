pub mod fetch_profile;
pub mod login_user;
pub mod register_user;
pub mod update_profile;

pub use fetch_profile::{FetchProfileError, FetchProfileUseCase};
pub use login_user::{LoginCommand, LoginError, LoginForm, LoginOutput, LoginUserUseCase};
pub use register_user::{
    RegisterUserCommand, RegisterUserError, RegisterUserUseCase, RegistrationForm,
};
pub use update_profile::{
    ProfileForm, UpdateProfileCommand, UpdateProfileError, UpdateProfileOutput,
    UpdateProfileUseCase,
};
