//! Identity module: back-office users and the authenticated caller.
//!
//! Token issuance/verification and password handling live in the (out of
//! scope) auth layer; this crate only defines who a user is, the closed role
//! set, and the [`Actor`] identity every engine operation receives for
//! attribution.

pub mod actor;
pub mod role;
pub mod user;

pub use actor::{Actor, ActorId};
pub use role::Role;
pub use user::{NewUser, User, UserId};
