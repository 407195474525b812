//! Identity core: registration, authentication, and role-based
//! authorization for the surrounding platform.
//!
//! The transport layer and durable storage are external collaborators.
//! Transports call through [`domain::identity::ports::IdentityPort`];
//! storage plugs in behind [`domain::identity::ports::UserDirectory`].

pub mod config;
pub mod domain;
pub mod outbound;

pub use domain::identity;
pub use outbound::directory;
