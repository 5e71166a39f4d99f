use crate::error::Result;
use crate::introspect::Introspect;
use crate::registry::EntityRegistry;
use crate::statement::{Bound, StatementBuilder};

/// Builder for constructing DELETE statements keyed on the entity identifier.
#[derive(Debug, Clone, Copy)]
pub struct DeleteBuilder<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> DeleteBuilder<'r> {
    /// Creates a DELETE builder resolving entities against `registry`.
    #[must_use]
    pub const fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Build the DELETE statement for the row identified by `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type is not registered or it has no
    /// identifier value.
    pub fn build(&self, entity: &dyn Introspect) -> Result<String> {
        let bound = Bound::new(self.registry, entity)?;
        let (id_column, id_literal) = bound.identifier()?;

        let sql =
            format!("delete from {} where {id_column} = {id_literal}", bound.model.table_name());

        tracing::debug!(table = bound.model.table_name(), sql = %sql, "DeleteBuilder generated SQL");

        Ok(sql)
    }
}

impl StatementBuilder for DeleteBuilder<'_> {
    fn build(&self, entity: &dyn Introspect) -> Result<String> {
        DeleteBuilder::build(self, entity)
    }
}
