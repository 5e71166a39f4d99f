use std::any::TypeId;

use sea_query::Value;

use crate::entity::{Entity, FieldMeta};
use crate::error::{Error, Result};
use crate::literal::{NULL, to_literal};

/// Object-safe view of an entity instance.
///
/// Implemented for every [`Entity`], letting builders accept any registered
/// instance as `&dyn Introspect`.
pub trait Introspect {
    /// Runtime type used for registry lookup.
    fn entity_type(&self) -> TypeId;

    /// Simple type name of the entity.
    fn entity_name(&self) -> &'static str;

    /// Declared fields in declaration order.
    fn field_metas(&self) -> &'static [FieldMeta];

    /// Current value of the named field. Never called for transient fields.
    fn read_field(&self, field: &str) -> Option<Value>;
}

impl<E: Entity> Introspect for E {
    fn entity_type(&self) -> TypeId {
        TypeId::of::<E>()
    }

    fn entity_name(&self) -> &'static str {
        E::NAME
    }

    fn field_metas(&self) -> &'static [FieldMeta] {
        E::fields()
    }

    fn read_field(&self, field: &str) -> Option<Value> {
        self.field_value(field)
    }
}

/// A declared field together with its markers and current value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name.
    pub name: &'static str,
    /// Marked as the entity identifier.
    pub is_identifier: bool,
    /// Marked as non-persistent.
    pub is_transient: bool,
    /// Value held by the instance at introspection time, or `None` for a
    /// transient field, which is never read.
    pub value: Option<Value>,
}

impl FieldDescriptor {
    /// Whether the field belongs in a DML value list.
    #[must_use]
    pub const fn is_persistable(&self) -> bool {
        !(self.is_identifier || self.is_transient)
    }

    /// SQL literal of the current value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedLiteralType`] naming this field when the
    /// value has no literal form.
    pub fn literal(&self) -> Result<String> {
        let Some(value) = &self.value else {
            return Ok(NULL.to_string());
        };
        to_literal(value).map_err(|err| err.in_field(self.name))
    }
}

/// Describes every declared field of `entity`, in declaration order.
///
/// Transient fields are described but not read, so they need no SQL value.
///
/// # Errors
///
/// Returns [`Error::FieldAccess`] for the first non-transient field the
/// instance cannot produce a value for.
pub fn introspect(entity: &dyn Introspect) -> Result<Vec<FieldDescriptor>> {
    entity
        .field_metas()
        .iter()
        .map(|meta| {
            let value = if meta.transient {
                None
            } else {
                let value = entity.read_field(meta.name).ok_or(Error::FieldAccess {
                    entity: entity.entity_name(),
                    field: meta.name,
                })?;
                Some(value)
            };
            Ok(FieldDescriptor {
                name: meta.name,
                is_identifier: meta.identifier,
                is_transient: meta.transient,
                value,
            })
        })
        .collect()
}
