//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly. Regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Registered users.
    ///
    /// `id` is a storage-internal surrogate key; clients only ever see `uuid`.
    /// Rows with a non-null `deleted_at` are soft-deleted and invisible to
    /// every repository read.
    users (id) {
        /// Primary key: auto-incrementing surrogate.
        id -> Int8,
        /// Public identifier, unique across all rows.
        uuid -> Uuid,
        /// User name (max 255 characters).
        name -> Varchar,
        /// Email address (max 100 characters), unique among live rows.
        email -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
        /// Last modification timestamp.
        updated_at -> Timestamptz,
        /// Soft-delete marker.
        deleted_at -> Nullable<Timestamptz>,
    }
}
