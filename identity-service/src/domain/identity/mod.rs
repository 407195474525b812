pub mod errors;
pub mod models;
pub mod ports;
pub mod service;

pub use errors::IdentityError;
pub use models::RegisterUserCommand;
pub use models::UserRecord;
pub use ports::IdentityPort;
pub use ports::UserDirectory;
pub use service::IdentityService;
