//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed user storage using Diesel ORM.

pub mod persistence;
