//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod current_user;
pub mod delete_account;
pub mod login;
pub mod register;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use current_user::CurrentUserUseCase;
pub use delete_account::DeleteAccountUseCase;
pub use login::{LoginInput, LoginUseCase};
pub use register::{AuthOutput, RegisterInput, RegisterUseCase};
pub use token::{Claims, IssuedToken, TokenCodec};
