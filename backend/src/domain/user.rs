//! User data model.
//!
//! The stored [`User`] carries a numeric surrogate key and audit timestamps
//! that never leave the service. [`UserResponse`] is the public projection
//! exposed at the HTTP boundary.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed length for a user name.
pub const NAME_MAX: usize = 255;
/// Maximum allowed length for an email address.
pub const EMAIL_MAX: usize = 100;

/// Validation errors returned by the user field constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    /// The identifier was empty.
    EmptyId,
    /// The identifier was not a UUID.
    InvalidId,
    /// The name was blank.
    EmptyName,
    /// The name exceeded [`NAME_MAX`] characters.
    NameTooLong {
        /// Maximum accepted length.
        max: usize,
    },
    /// The email was blank.
    EmptyEmail,
    /// The email exceeded [`EMAIL_MAX`] characters.
    EmailTooLong {
        /// Maximum accepted length.
        max: usize,
    },
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NameTooLong { max } => write!(f, "name must be at most {max} characters"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmailTooLong { max } => write!(f, "email must be at most {max} characters"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable external user identifier stored as a UUID.
///
/// Assigned once when the user is created and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its textual form.
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::UserId;
    ///
    /// let id = UserId::new("3fa85f64-5717-4562-b3fc-2c963f66afa6").expect("valid UUID");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// assert!(UserId::new("42").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Generate a new random [`UserId`].
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an already-parsed UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Human readable user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if name.chars().count() > NAME_MAX {
            return Err(UserValidationError::NameTooLong { max: NAME_MAX });
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Email address, unique across live users.
///
/// Only presence and length are checked; the value is otherwise opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use user_directory::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("ada@example.com").is_ok());
    /// assert!(EmailAddress::new("").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if email.chars().count() > EMAIL_MAX {
            return Err(UserValidationError::EmailTooLong { max: EMAIL_MAX });
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Audit timestamps maintained by the persistence layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuditTrail {
    /// When the record was inserted.
    pub created_at: DateTime<Utc>,
    /// When the record was last written.
    pub updated_at: DateTime<Utc>,
    /// When the record was soft-deleted, if ever.
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Stored application user.
///
/// ## Invariants
/// - `row_id` is assigned by the database and is never exposed externally.
/// - `id` is assigned once at creation and never updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    row_id: i64,
    id: UserId,
    name: UserName,
    email: EmailAddress,
    audit: AuditTrail,
}

impl User {
    /// Build a [`User`] from validated components.
    #[must_use]
    pub const fn new(
        row_id: i64,
        id: UserId,
        name: UserName,
        email: EmailAddress,
        audit: AuditTrail,
    ) -> Self {
        Self {
            row_id,
            id,
            name,
            email,
            audit,
        }
    }

    /// Storage-internal surrogate key.
    #[must_use]
    pub const fn row_id(&self) -> i64 {
        self.row_id
    }

    /// Stable external identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// User name.
    #[must_use]
    pub const fn name(&self) -> &UserName {
        &self.name
    }

    /// Email address.
    #[must_use]
    pub const fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Audit timestamps.
    #[must_use]
    pub const fn audit(&self) -> &AuditTrail {
        &self.audit
    }

    /// Project the user onto its public representation.
    #[must_use]
    pub fn to_response(&self) -> UserResponse {
        UserResponse {
            uuid: self.id,
            name: self.name.to_string(),
            email: self.email.to_string(),
        }
    }
}

/// Validated input for creating a user; the service assigns `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Identifier assigned before insertion.
    pub id: UserId,
    /// User name.
    pub name: UserName,
    /// Email address.
    pub email: EmailAddress,
}

/// Field updates applied by a PATCH request. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    /// Replacement name.
    pub name: Option<UserName>,
    /// Replacement email address.
    pub email: Option<EmailAddress>,
}

impl UserChanges {
    /// True when the update would not change any field.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}

/// Public projection of a [`User`]: identifier, name and email only.
///
/// # Examples
/// ```
/// use user_directory::domain::{UserId, UserResponse};
///
/// let response = UserResponse::new(UserId::random(), "Ada", "ada@example.com");
/// let json = serde_json::to_value(&response).expect("serialises");
/// assert!(json.get("id").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserResponse {
    uuid: UserId,
    name: String,
    email: String,
}

impl UserResponse {
    /// Build a projection directly from its parts.
    pub fn new(uuid: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            uuid,
            name: name.into(),
            email: email.into(),
        }
    }

    /// External identifier.
    #[must_use]
    pub const fn uuid(&self) -> &UserId {
        &self.uuid
    }

    /// User name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let User {
            id, name, email, ..
        } = value;
        Self {
            uuid: id,
            name: name.into(),
            email: email.into(),
        }
    }
}

impl From<&User> for UserResponse {
    fn from(value: &User) -> Self {
        value.to_response()
    }
}
