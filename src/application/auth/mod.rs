//! Authentication use cases
//!
//! Registration, login and profile lookup, each orchestrating `AuthService`.

mod get_current_user;
mod login_user;
mod register_user;

pub use get_current_user::{GetCurrentUserUseCase, UserProfileResponse};
pub use login_user::{LoginUserCommand, LoginUserResponse, LoginUserUseCase};
pub use register_user::{RegisterUserCommand, RegisterUserResponse, RegisterUserUseCase};
