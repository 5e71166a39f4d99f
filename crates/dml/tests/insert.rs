//! Integration tests for INSERT statement assembly.
//!
//! Tests the public API as users would interact with it.

#![allow(missing_docs)]

mod common;

use std::collections::HashMap;

use chrono::NaiveDate;
use common::{AuditEntry, Marker, Order, OrderLine, Person, init_tracing, registry, value_literals};
use entity_dml::{Entity, EntityRegistry, Error, FieldMeta, InsertBuilder, Stage, entity};

#[test]
fn insert_person() {
    init_tracing();
    let registry = registry();

    let person = Person {
        id: 7,
        name: "O'Brien".to_string(),
        age: 30,
    };

    let sql = InsertBuilder::new(&registry).build(&person).unwrap();
    assert_eq!(sql, "insert into person (name, age) values ('O''Brien', 30)");
}

#[test]
fn insert_order_with_null() {
    let registry = registry();

    let order = Order {
        id: 1,
        note: None,
        total: 19.99,
    };

    let sql = InsertBuilder::new(&registry).build(&order).unwrap();
    assert_eq!(sql, "insert into order (note, total) values (NULL, 19.99)");
}

#[test]
fn insert_skips_identifier_and_transient() {
    let registry = registry();

    let line = OrderLine {
        id: None,
        order_id: 1,
        display_label: "never persisted".to_string(),
        shipped_on: NaiveDate::from_ymd_opt(2024, 3, 9),
        quantity: 3,
        gift: true,
    };

    let sql = InsertBuilder::new(&registry).build(&line).unwrap();
    assert_eq!(
        sql,
        "insert into order_line (order_id, shipped_on, quantity, gift) \
         values (1, '2024-03-09', 3, TRUE)"
    );
    assert!(!sql.contains("display_label"));
    assert!(!sql.contains("never persisted"));
}

#[test]
fn insert_without_identifier() {
    let registry = registry();

    let entry = AuditEntry {
        message: "login, then logout".to_string(),
        payload: vec![0xDE, 0xAD],
    };

    let sql = InsertBuilder::new(&registry).build(&entry).unwrap();
    assert_eq!(
        sql,
        "insert into audit_log (message, payload) values ('login, then logout', X'DEAD')"
    );
}

#[test]
fn insert_no_persistable_fields() {
    let registry = registry();

    let marker = Marker {
        id: 1,
        scratch: "tmp".to_string(),
    };

    let sql = InsertBuilder::new(&registry).build(&marker).unwrap();
    assert_eq!(sql, "insert into marker () values ()");
}

#[test]
fn insert_reads_current_values() {
    let registry = registry();
    let builder = InsertBuilder::new(&registry);

    let mut person = Person {
        id: 1,
        name: "Ada".to_string(),
        age: 36,
    };
    let first = builder.build(&person).unwrap();

    person.age = 37;
    let second = builder.build(&person).unwrap();

    assert_eq!(first, "insert into person (name, age) values ('Ada', 36)");
    assert_eq!(second, "insert into person (name, age) values ('Ada', 37)");
}

#[test]
fn value_count_matches_columns() {
    let registry = registry();
    let builder = InsertBuilder::new(&registry);

    let person = Person {
        id: 1,
        name: "Smith, John".to_string(),
        age: 40,
    };
    let order = Order {
        id: 2,
        note: Some("it's fragile, handle with care".to_string()),
        total: 5.0,
    };

    let person_sql = builder.build(&person).unwrap();
    let columns = registry.resolve_type::<Person>().unwrap().column_names();
    assert_eq!(value_literals(&person_sql), vec!["'Smith, John'", "40"]);
    assert_eq!(value_literals(&person_sql).len(), columns.len());

    let order_sql = builder.build(&order).unwrap();
    let columns = registry.resolve_type::<Order>().unwrap().column_names();
    assert_eq!(value_literals(&order_sql), vec!["'it''s fragile, handle with care'", "5"]);
    assert_eq!(value_literals(&order_sql).len(), columns.len());
}

#[test]
fn quote_cannot_terminate_statement() {
    let registry = registry();

    let person = Person {
        id: 1,
        name: "x'); delete from person; --".to_string(),
        age: 1,
    };

    let sql = InsertBuilder::new(&registry).build(&person).unwrap();
    assert_eq!(
        sql,
        "insert into person (name, age) values ('x''); delete from person; --', 1)"
    );
    assert_eq!(value_literals(&sql), vec!["'x''); delete from person; --'", "1"]);
}

#[test]
fn unregistered_entity() {
    let registry = EntityRegistry::new().register::<Order>().unwrap();

    let person = Person {
        id: 1,
        name: "Ada".to_string(),
        age: 36,
    };

    let err = InsertBuilder::new(&registry).build(&person).unwrap_err();
    assert_eq!(err, Error::EntityNotRegistered { entity: Person::NAME });
    assert_eq!(err.stage(), Stage::Resolve);
}

#[test]
fn unsupported_value_aborts_statement() {
    let registry = registry();

    let order = Order {
        id: 1,
        note: None,
        total: f64::INFINITY,
    };

    let err = InsertBuilder::new(&registry).build(&order).unwrap_err();
    assert_eq!(
        err,
        Error::UnsupportedLiteralType {
            type_name: "f64 (inf)".to_string(),
            field: Some("total"),
        }
    );
    assert_eq!(err.stage(), Stage::Serialize);
    assert!(err.to_string().ends_with("in field `total`"));
}

#[test]
fn transient_field_needs_no_sql_type() {
    entity! {
        #[derive(Debug, Default)]
        pub struct Session {
            pub user: String,
            #[transient]
            pub cache: HashMap<String, Vec<u8>>,
        }
    }

    let registry = EntityRegistry::new().register::<Session>().unwrap();
    let mut session = Session {
        user: "a".to_string(),
        ..Session::default()
    };
    session.cache.insert("token".to_string(), vec![1, 2]);

    assert_eq!(Session::fields()[1], FieldMeta::column("cache").with_transient());
    assert!(session.field_value("cache").is_none());

    let sql = InsertBuilder::new(&registry).build(&session).unwrap();
    assert_eq!(sql, "insert into session (user) values ('a')");
}
