use std::any::TypeId;
use std::collections::HashMap;
use std::sync::OnceLock;

use crate::entity::Entity;
use crate::error::{Error, Result};
use crate::introspect::Introspect;
use crate::model::EntityModel;

static GLOBAL: OnceLock<EntityRegistry> = OnceLock::new();

/// Lookup from entity type to its [`EntityModel`].
///
/// Populated up front and read-only afterwards. Registries are plain values so
/// tests can build isolated ones; a single registry may also be published
/// process-wide with [`EntityRegistry::install`].
#[derive(Debug, Default)]
pub struct EntityRegistry {
    models: HashMap<TypeId, EntityModel>,
}

impl EntityRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives and stores the model for `E`, replacing any earlier model for
    /// the same type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntity`] if the entity definition is invalid.
    pub fn register<E: Entity>(mut self) -> Result<Self> {
        let model = EntityModel::of::<E>()?;

        if model.column_names().is_empty() {
            tracing::warn!(
                entity = E::NAME,
                table = %model.table_name(),
                "entity has no persistable columns"
            );
        }

        tracing::debug!(
            entity = E::NAME,
            table = %model.table_name(),
            columns = model.column_names().len(),
            identifier = model.identifier(),
            "registered entity"
        );

        self.models.insert(TypeId::of::<E>(), model);
        Ok(self)
    }

    /// Resolves the model for the runtime type of `entity`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntityNotRegistered`] when the type is unknown.
    pub fn resolve(&self, entity: &dyn Introspect) -> Result<&EntityModel> {
        self.lookup(entity.entity_type(), entity.entity_name())
    }

    /// Resolves the model for `E` without an instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EntityNotRegistered`] when `E` is unknown.
    pub fn resolve_type<E: Entity>(&self) -> Result<&EntityModel> {
        self.lookup(TypeId::of::<E>(), E::NAME)
    }

    fn lookup(&self, type_id: TypeId, entity: &'static str) -> Result<&EntityModel> {
        self.models.get(&type_id).ok_or(Error::EntityNotRegistered { entity })
    }

    /// Whether `E` has been registered.
    #[must_use]
    pub fn contains<E: Entity>(&self) -> bool {
        self.models.contains_key(&TypeId::of::<E>())
    }

    /// Number of registered entity types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether no entity has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Publishes the registry for process-wide use.
    ///
    /// # Errors
    ///
    /// Gives the registry back if one has already been installed.
    pub fn install(self) -> Result<&'static Self, Self> {
        let mut pending = Some(self);
        let installed = GLOBAL.get_or_init(|| pending.take().unwrap_or_default());

        // still pending when another registry won the race
        if let Some(rejected) = pending {
            return Err(rejected);
        }

        tracing::debug!(entities = installed.len(), "installed global entity registry");
        Ok(installed)
    }

    /// The process-wide registry, if one has been installed.
    #[must_use]
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }
}
