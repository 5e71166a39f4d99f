use std::collections::HashSet;

use convert_case::{Case, Casing};

use crate::entity::{Entity, FieldMeta};
use crate::error::{Error, Result};

/// Resolved table and column description for one entity type.
///
/// Built once at registration and never mutated afterwards. Column order is
/// the declaration order of the persistable fields, which is also the order in
/// which introspection yields their values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityModel {
    entity_name: &'static str,
    table_name: String,
    column_names: Vec<&'static str>,
    identifier: Option<&'static str>,
}

impl EntityModel {
    /// Derives the model for `E` from its declared fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntity`] when the table name is empty, a field
    /// name is repeated, or more than one field is marked as identifier.
    pub fn of<E: Entity>() -> Result<Self> {
        let table_name = E::TABLE.map_or_else(|| E::NAME.to_case(Case::Snake), ToString::to_string);
        Self::from_fields(E::NAME, table_name, E::fields())
    }

    fn from_fields(
        entity_name: &'static str, table_name: String, fields: &'static [FieldMeta],
    ) -> Result<Self> {
        if table_name.trim().is_empty() {
            return Err(Error::invalid(entity_name, "table name is empty"));
        }

        let mut seen = HashSet::with_capacity(fields.len());
        let mut identifier = None;

        for field in fields {
            if !seen.insert(field.name) {
                return Err(Error::invalid(
                    entity_name,
                    format!("field `{}` is declared more than once", field.name),
                ));
            }
            if field.identifier {
                if let Some(existing) = identifier {
                    return Err(Error::invalid(
                        entity_name,
                        format!("fields `{existing}` and `{}` are both marked as identifier", field.name),
                    ));
                }
                identifier = Some(field.name);
            }
        }

        let column_names = fields
            .iter()
            .filter(|field| field.is_persistable())
            .map(|field| field.name)
            .collect();

        Ok(Self {
            entity_name,
            table_name,
            column_names,
            identifier,
        })
    }

    /// Type name of the mapped entity.
    #[must_use]
    pub const fn entity_name(&self) -> &'static str {
        self.entity_name
    }

    /// Target table.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Persistable columns, excluding the identifier and transient fields.
    #[must_use]
    pub fn column_names(&self) -> &[&'static str] {
        &self.column_names
    }

    /// Identifier column, if the entity declares one.
    #[must_use]
    pub const fn identifier(&self) -> Option<&'static str> {
        self.identifier
    }
}
