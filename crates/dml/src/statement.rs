use crate::error::{Error, Result};
use crate::introspect::{FieldDescriptor, Introspect, introspect};
use crate::literal;
use crate::model::EntityModel;
use crate::registry::EntityRegistry;

pub const SEPARATOR: &str = ", ";

/// Produces one DML statement string from an entity instance.
///
/// Implemented by every statement builder so callers can hold them as
/// `&dyn StatementBuilder`.
pub trait StatementBuilder {
    /// Builds the statement for `entity`.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity's type is not registered, a field cannot
    /// be read, or a value has no SQL literal form.
    fn build(&self, entity: &dyn Introspect) -> Result<String>;
}

/// An instance paired with its resolved model and freshly read fields.
pub struct Bound<'r> {
    pub model: &'r EntityModel,
    fields: Vec<FieldDescriptor>,
}

impl<'r> Bound<'r> {
    pub fn new(registry: &'r EntityRegistry, entity: &dyn Introspect) -> Result<Self> {
        let model = registry.resolve(entity)?;
        let fields = introspect(entity)?;
        Ok(Self { model, fields })
    }

    /// Literal for each registered column, in column order.
    pub fn column_literals(&self) -> Result<Vec<(&'static str, String)>> {
        let persistable: Vec<&FieldDescriptor> =
            self.fields.iter().filter(|field| field.is_persistable()).collect();
        let columns = self.model.column_names();

        // values must line up with the registered column clause
        if persistable.len() != columns.len()
            || persistable.iter().zip(columns).any(|(field, column)| field.name != *column)
        {
            return Err(Error::invalid(
                self.model.entity_name(),
                "field order diverges from registered columns",
            ));
        }

        persistable.into_iter().map(|field| Ok((field.name, field.literal()?))).collect()
    }

    /// Identifier column and the literal of its current value.
    pub fn identifier(&self) -> Result<(&'static str, String)> {
        let missing = || Error::MissingIdentifier {
            entity: self.model.entity_name(),
        };

        let column = self.model.identifier().ok_or_else(missing)?;
        let field = self.fields.iter().find(|field| field.name == column).ok_or_else(missing)?;
        let key = field.literal()?;
        if key == literal::NULL {
            return Err(missing());
        }

        Ok((column, key))
    }
}
