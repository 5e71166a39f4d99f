use crate::error::Result;
use crate::introspect::Introspect;
use crate::registry::EntityRegistry;
use crate::statement::{Bound, SEPARATOR, StatementBuilder};

/// Builder for constructing INSERT statements from entity instances.
///
/// Produces `insert into <table> (<columns>) values (<literals>)`. Identifier
/// and transient fields are left out of both lists.
#[derive(Debug, Clone, Copy)]
pub struct InsertBuilder<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> InsertBuilder<'r> {
    /// Creates an INSERT builder resolving entities against `registry`.
    #[must_use]
    pub const fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Build the INSERT statement for `entity`.
    ///
    /// An entity without persistable fields yields empty `()` clauses.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type is not registered, a field cannot
    /// be read, or a value has no SQL literal form.
    pub fn build(&self, entity: &dyn Introspect) -> Result<String> {
        let bound = Bound::new(self.registry, entity)?;
        let literals = bound.column_literals()?;

        let columns = bound.model.column_names().join(SEPARATOR);
        let values =
            literals.iter().map(|(_, literal)| literal.as_str()).collect::<Vec<_>>().join(SEPARATOR);

        let sql = format!(
            "insert into {} ({columns}) values ({values})",
            bound.model.table_name()
        );

        tracing::debug!(
            table = bound.model.table_name(),
            sql = %sql,
            value_count = literals.len(),
            "InsertBuilder generated SQL"
        );

        Ok(sql)
    }
}

impl StatementBuilder for InsertBuilder<'_> {
    fn build(&self, entity: &dyn Introspect) -> Result<String> {
        InsertBuilder::build(self, entity)
    }
}
