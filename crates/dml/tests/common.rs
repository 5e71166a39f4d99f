//! Common test helpers shared across integration tests.
#![allow(dead_code)]

use chrono::NaiveDate;
use entity_dml::{EntityRegistry, entity};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

// Common test entities used across multiple test files

entity! {
    table = "person",
    #[derive(Debug, Clone)]
    pub struct Person {
        #[id]
        pub id: i64,
        pub name: String,
        pub age: i32,
    }
}

entity! {
    #[derive(Debug, Clone)]
    pub struct Order {
        #[id]
        pub id: i64,
        pub note: Option<String>,
        pub total: f64,
    }
}

entity! {
    #[derive(Debug, Clone)]
    pub struct OrderLine {
        #[id]
        pub id: Option<i64>,
        pub order_id: i64,
        #[transient]
        pub display_label: String,
        pub shipped_on: Option<NaiveDate>,
        pub quantity: u32,
        pub gift: bool,
    }
}

entity! {
    table = "audit_log",
    #[derive(Debug, Clone)]
    pub struct AuditEntry {
        pub message: String,
        pub payload: Vec<u8>,
    }
}

entity! {
    #[derive(Debug, Clone)]
    pub struct Marker {
        #[id]
        pub id: i32,
        #[transient]
        pub scratch: String,
    }
}

/// Registry holding every fixture entity.
#[allow(clippy::missing_panics_doc)]
pub fn registry() -> EntityRegistry {
    EntityRegistry::new()
        .register::<Person>()
        .and_then(EntityRegistry::register::<Order>)
        .and_then(EntityRegistry::register::<OrderLine>)
        .and_then(EntityRegistry::register::<AuditEntry>)
        .and_then(EntityRegistry::register::<Marker>)
        .expect("fixture entities should register")
}

/// Installs a debug-level subscriber once per test binary.
pub fn init_tracing() {
    let _ = Registry::default()
        .with(EnvFilter::new("debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}

/// Splits the parenthesised value list of an INSERT into its literals.
///
/// Commas inside quoted text do not split; a doubled quote stays inside the
/// literal it escapes.
#[allow(clippy::missing_panics_doc)]
pub fn value_literals(sql: &str) -> Vec<String> {
    let start = sql.find(" values (").expect("statement should have a value clause") + " values (".len();
    let body = sql[start..].strip_suffix(')').expect("value clause should close");

    let mut literals = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for ch in body.chars() {
        match ch {
            '\'' => {
                in_quote = !in_quote;
                current.push(ch);
            }
            ',' if !in_quote => {
                literals.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    assert!(!in_quote, "unterminated literal in `{sql}`");

    if !current.trim().is_empty() {
        literals.push(current.trim().to_string());
    }
    literals
}
