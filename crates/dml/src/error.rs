//! Errors

use thiserror::Error;

/// Result type used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failures raised while mapping an entity instance to a statement.
///
/// Every variant is deterministic for a given entity definition and registry:
/// calling again with the same inputs produces the same error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No metadata has been registered for the entity's type.
    #[error("entity `{entity}` is not registered")]
    EntityNotRegistered {
        /// Type name of the unregistered entity.
        entity: &'static str,
    },

    /// A declared field could not be read from the instance.
    #[error("cannot read field `{field}` of entity `{entity}`")]
    FieldAccess {
        /// Type name of the entity being introspected.
        entity: &'static str,
        /// Declared field that did not yield a value.
        field: &'static str,
    },

    /// The serializer has no SQL literal rule for a value.
    #[error(
        "no SQL literal rule for value of type `{type_name}`{}",
        .field.map_or_else(String::new, |name| format!(" in field `{name}`"))
    )]
    UnsupportedLiteralType {
        /// Kind of the offending value.
        type_name: String,
        /// Field holding the value, when serialized as part of an entity.
        field: Option<&'static str>,
    },

    /// The entity definition violates a mapping invariant.
    #[error("invalid entity `{entity}`: {reason}")]
    InvalidEntity {
        /// Type name of the offending entity.
        entity: &'static str,
        /// Human readable description of the violation.
        reason: String,
    },

    /// An identifier-keyed statement was requested for an entity without a
    /// usable identifier.
    #[error("entity `{entity}` has no identifier value")]
    MissingIdentifier {
        /// Type name of the entity.
        entity: &'static str,
    },
}

/// Pipeline stage an [`Error`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Entity definition checks, at registration or against a registered
    /// model.
    Register,
    /// Registry lookup.
    Resolve,
    /// Reading field values from an instance.
    Introspect,
    /// Converting a value into SQL literal text.
    Serialize,
    /// Joining clauses into the final statement.
    Assemble,
}

impl Error {
    /// Returns the pipeline stage that produced the error.
    #[must_use]
    pub const fn stage(&self) -> Stage {
        match self {
            Self::EntityNotRegistered { .. } => Stage::Resolve,
            Self::FieldAccess { .. } => Stage::Introspect,
            Self::UnsupportedLiteralType { .. } => Stage::Serialize,
            Self::InvalidEntity { .. } => Stage::Register,
            Self::MissingIdentifier { .. } => Stage::Assemble,
        }
    }

    pub(crate) fn invalid(entity: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidEntity {
            entity,
            reason: reason.into(),
        }
    }

    // Attaches the offending field to a literal failure.
    pub(crate) fn in_field(self, name: &'static str) -> Self {
        match self {
            Self::UnsupportedLiteralType { type_name, .. } => Self::UnsupportedLiteralType {
                type_name,
                field: Some(name),
            },
            other => other,
        }
    }
}
