//! Domain primitives, ports and services.
//!
//! Purpose: define the strongly typed user model and the use-cases that
//! inbound adapters drive. Nothing here depends on HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport agnostic failure payload.
//! - User and its validated fields: the stored entity.
//! - UserResponse: the public projection returned to clients.
//! - UserService: the [`ports::UserDirectory`] implementation.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{
    AuditTrail, EMAIL_MAX, EmailAddress, NAME_MAX, NewUser, User, UserChanges, UserId, UserName,
    UserResponse, UserValidationError,
};
pub use self::user_service::UserService;
