use crate::error::{Error, Result};
use crate::introspect::Introspect;
use crate::registry::EntityRegistry;
use crate::statement::{Bound, SEPARATOR, StatementBuilder};

/// Builder for constructing UPDATE statements keyed on the entity identifier.
#[derive(Debug, Clone, Copy)]
pub struct UpdateBuilder<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> UpdateBuilder<'r> {
    /// Creates an UPDATE builder resolving entities against `registry`.
    #[must_use]
    pub const fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Build the UPDATE statement writing every persistable field of `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type is not registered, it has no
    /// persistable columns or no identifier value, a field cannot be read, or a
    /// value has no SQL literal form.
    pub fn build(&self, entity: &dyn Introspect) -> Result<String> {
        let bound = Bound::new(self.registry, entity)?;
        let (id_column, id_literal) = bound.identifier()?;
        let literals = bound.column_literals()?;

        if literals.is_empty() {
            return Err(Error::invalid(
                bound.model.entity_name(),
                "no persistable columns to update",
            ));
        }

        let assignments = literals
            .iter()
            .map(|(column, literal)| format!("{column} = {literal}"))
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        let sql = format!(
            "update {} set {assignments} where {id_column} = {id_literal}",
            bound.model.table_name()
        );

        tracing::debug!(
            table = bound.model.table_name(),
            sql = %sql,
            value_count = literals.len(),
            "UpdateBuilder generated SQL"
        );

        Ok(sql)
    }
}

impl StatementBuilder for UpdateBuilder<'_> {
    fn build(&self, entity: &dyn Introspect) -> Result<String> {
        UpdateBuilder::build(self, entity)
    }
}
