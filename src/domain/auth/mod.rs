pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;
pub mod value_objects;

// Re-export commonly used types
pub use entities::{User, UserProfile};
pub use errors::{AuthError, HashError, RepositoryError, ValidationError};
pub use ports::{IssuedToken, PasswordHasher, TokenService, UserRepository};
pub use services::{AuthService, RoleRequirement};
pub use value_objects::{Email, Password, PasswordHash, UserRole, ValueObjectError};
