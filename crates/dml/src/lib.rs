//! Entity-to-SQL mapping for data-manipulation statements.
//!
//! Resolves the table and columns an entity type maps to, reads the current
//! field values of an instance, and renders them as literal SQL text.
//!
//! # Quick Start
//!
//! ## Define an Entity
//!
//! ```ignore
//! entity! {
//!     #[derive(Debug, Clone)]
//!     pub struct Person {
//!         #[id]
//!         pub id: i64,
//!         pub name: String,
//!         pub age: i32,
//!     }
//! }
//! ```
//!
//! Without `table = "..."` the table name is the snake-cased struct name
//! (`person` here). Fields marked `#[id]` or `#[transient]` never appear in
//! column or value lists.
//!
//! ## Register and Build
//!
//! ```ignore
//! let registry = EntityRegistry::new().register::<Person>()?;
//!
//! let person = Person { id: 1, name: "O'Brien".to_string(), age: 30 };
//! let sql = InsertBuilder::new(&registry).build(&person)?;
//! assert_eq!(sql, "insert into person (name, age) values ('O''Brien', 30)");
//!
//! UpdateBuilder::new(&registry).build(&person)?;
//! // update person set name = 'O''Brien', age = 30 where id = 1
//!
//! DeleteBuilder::new(&registry).build(&person)?;
//! // delete from person where id = 1
//!
//! SelectBuilder::new(&registry).build_all::<Person>()?;
//! // select id, name, age from person
//! ```
//!
//! ## Process-wide Registry
//!
//! ```ignore
//! EntityRegistry::new().register::<Person>()?.install().ok();
//! let registry = EntityRegistry::global().expect("installed at startup");
//! ```
//!
//! Statements embed values as literals; they carry no bind parameters.

mod delete;
mod entity;
mod error;
mod insert;
mod introspect;
pub mod literal;
mod model;
mod registry;
mod select;
mod statement;
mod update;

pub use delete::DeleteBuilder;
pub use entity::{Entity, FieldMeta};
pub use error::{Error, Result, Stage};
pub use insert::InsertBuilder;
pub use introspect::{FieldDescriptor, Introspect, introspect};
pub use model::EntityModel;
pub use registry::EntityRegistry;
pub use select::SelectBuilder;
pub use statement::StatementBuilder;
pub use update::UpdateBuilder;
pub use sea_query::Value;
