use sea_query::Value;

/// Persistence markers for a single declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldMeta {
    /// Field (and column) name.
    pub name: &'static str,
    /// The field holds the entity's primary key.
    pub identifier: bool,
    /// The field is never persisted.
    pub transient: bool,
}

impl FieldMeta {
    /// A plain persistable column.
    #[must_use]
    pub const fn column(name: &'static str) -> Self {
        Self {
            name,
            identifier: false,
            transient: false,
        }
    }

    /// Marks the field as the entity identifier.
    #[must_use]
    pub const fn with_identifier(mut self) -> Self {
        self.identifier = true;
        self
    }

    /// Marks the field as transient.
    #[must_use]
    pub const fn with_transient(mut self) -> Self {
        self.transient = true;
        self
    }

    /// Whether the field takes part in DML column and value lists.
    ///
    /// Either marker alone excludes the field.
    #[must_use]
    pub const fn is_persistable(&self) -> bool {
        !(self.identifier || self.transient)
    }
}

/// Trait for persistable record types.
///
/// Typically implemented via the `entity!` macro rather than manually.
pub trait Entity: 'static {
    /// Simple type name, used for diagnostics and the default table name.
    const NAME: &'static str;

    /// Explicit table name. When `None` the snake-cased [`Entity::NAME`] is
    /// used.
    const TABLE: Option<&'static str> = None;

    /// Declared fields in declaration order.
    fn fields() -> &'static [FieldMeta];

    /// Current value of the named field, or `None` when the field cannot be
    /// read.
    fn field_value(&self, field: &str) -> Option<Value>;
}

/// Declares an entity struct with an automatic `Entity` implementation.
///
/// Fields may carry the `#[id]` and `#[transient]` markers. Every field type
/// except transient ones must be `Clone` and convert into a SQL value.
///
/// # Examples
///
/// ```ignore
/// entity! {
///     table = "person",
///     #[derive(Debug, Clone)]
///     pub struct Person {
///         #[id]
///         pub id: i64,
///         pub name: String,
///         pub age: i32,
///         #[transient]
///         pub nickname: Option<String>,
///     }
/// }
/// ```
#[macro_export]
macro_rules! entity {
    (
        table = $table:literal,
        $(#[$meta:meta])*
        pub struct $struct_name:ident {
            $(
                $(#[$marker:ident])*
                pub $field_name:ident : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $crate::entity! {
            @emit (::core::option::Option::Some($table)),
            $(#[$meta])*
            pub struct $struct_name {
                $(
                    $(#[$marker])*
                    pub $field_name : $field_type
                ),*
            }
        }
    };

    (
        $(#[$meta:meta])*
        pub struct $struct_name:ident {
            $(
                $(#[$marker:ident])*
                pub $field_name:ident : $field_type:ty
            ),* $(,)?
        }
    ) => {
        $crate::entity! {
            @emit (::core::option::Option::None),
            $(#[$meta])*
            pub struct $struct_name {
                $(
                    $(#[$marker])*
                    pub $field_name : $field_type
                ),*
            }
        }
    };

    (
        @emit ($table:expr),
        $(#[$meta:meta])*
        pub struct $struct_name:ident {
            $(
                $(#[$marker:ident])*
                pub $field_name:ident : $field_type:ty
            ),*
        }
    ) => {
        #[allow(missing_docs)]
        $(#[$meta])*
        pub struct $struct_name {
            $(
                pub $field_name : $field_type
            ),*
        }

        impl $crate::Entity for $struct_name {
            const NAME: &'static str = stringify!($struct_name);
            const TABLE: ::core::option::Option<&'static str> = $table;

            fn fields() -> &'static [$crate::FieldMeta] {
                const FIELDS: &[$crate::FieldMeta] = &[
                    $(
                        $crate::__field_meta!(stringify!($field_name) $(, $marker)*),
                    )*
                ];
                FIELDS
            }

            fn field_value(&self, field: &str) -> ::core::option::Option<$crate::Value> {
                $(
                    if field == stringify!($field_name) {
                        return $crate::__field_value!(self.$field_name $(, $marker)*);
                    }
                )*
                ::core::option::Option::None
            }
        }
    };
}

/// Folds field markers into a `FieldMeta`. Used by `entity!` only.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_meta {
    ($name:expr) => {
        $crate::FieldMeta::column($name)
    };
    ($name:expr, id $(, $rest:ident)*) => {
        $crate::__field_meta!($name $(, $rest)*).with_identifier()
    };
    ($name:expr, transient $(, $rest:ident)*) => {
        $crate::__field_meta!($name $(, $rest)*).with_transient()
    };
}

/// Reads a field as a SQL value, skipping transient fields. Used by `entity!`
/// only.
#[doc(hidden)]
#[macro_export]
macro_rules! __field_value {
    ($field:expr) => {
        ::core::option::Option::Some(::core::clone::Clone::clone(&$field).into())
    };
    ($field:expr, transient $(, $rest:ident)*) => {
        ::core::option::Option::None
    };
    ($field:expr, id $(, $rest:ident)*) => {
        $crate::__field_value!($field $(, $rest)*)
    };
}
