//! User directory service library.
//!
//! A hexagonal CRUD service for users: the [`domain`] defines the model and
//! use-cases, [`inbound`] exposes them over HTTP with Actix, and [`outbound`]
//! persists them in PostgreSQL through Diesel. [`doc`] generates the OpenAPI
//! document served by Swagger UI.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
