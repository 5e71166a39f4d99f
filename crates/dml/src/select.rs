use crate::entity::Entity;
use crate::error::Result;
use crate::introspect::Introspect;
use crate::model::EntityModel;
use crate::registry::EntityRegistry;
use crate::statement::{Bound, SEPARATOR, StatementBuilder};

/// Builder for constructing SELECT statements.
///
/// The projection lists the identifier followed by the persistable columns.
#[derive(Debug, Clone, Copy)]
pub struct SelectBuilder<'r> {
    registry: &'r EntityRegistry,
}

impl<'r> SelectBuilder<'r> {
    /// Creates a SELECT builder resolving entities against `registry`.
    #[must_use]
    pub const fn new(registry: &'r EntityRegistry) -> Self {
        Self { registry }
    }

    /// Build a SELECT for the row identified by `entity`'s identifier value.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type is not registered, it has no
    /// identifier value, or the identifier has no SQL literal form.
    pub fn build(&self, entity: &dyn Introspect) -> Result<String> {
        let bound = Bound::new(self.registry, entity)?;
        let (id_column, id_literal) = bound.identifier()?;

        let sql = format!(
            "select {} from {} where {id_column} = {id_literal}",
            projection(bound.model),
            bound.model.table_name()
        );

        tracing::debug!(table = bound.model.table_name(), sql = %sql, "SelectBuilder generated SQL");

        Ok(sql)
    }

    /// Build a SELECT over every row of `E`'s table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::EntityNotRegistered`] when `E` is unknown.
    pub fn build_all<E: Entity>(&self) -> Result<String> {
        let model = self.registry.resolve_type::<E>()?;
        let sql = format!("select {} from {}", projection(model), model.table_name());

        tracing::debug!(table = model.table_name(), sql = %sql, "SelectBuilder generated SQL");

        Ok(sql)
    }
}

impl StatementBuilder for SelectBuilder<'_> {
    fn build(&self, entity: &dyn Introspect) -> Result<String> {
        SelectBuilder::build(self, entity)
    }
}

fn projection(model: &EntityModel) -> String {
    let columns: Vec<&str> =
        model.identifier().into_iter().chain(model.column_names().iter().copied()).collect();

    if columns.is_empty() {
        return "*".to_string();
    }
    columns.join(SEPARATOR)
}
