//! Setting change demonstration.
//!
//! This example shows:
//! 1. Validating `pgaudit.log` values without touching live state
//! 2. Committing a candidate, and suppressing a withdrawn one
//! 3. Rejections and their diagnostics
//! 4. Audit decisions reading the live value
//!
//! Run with: `cargo run --example settings_flow`

use audit_config::{validate, AuditSettings, LogClass};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(true)
        .init();

    let settings = AuditSettings::global();

    println!("=== Audit Settings Flow Example ===\n");

    // Scenario 1: Validate, then commit
    println!("--- Scenario 1: Validate and Commit ---");
    match validate("read, write, ddl") {
        Ok(candidate) => {
            println!("Validated: {}", candidate.classes());
            println!("Live before commit: {}", settings.log_classes());
            settings.commit(Some(candidate));
            println!("Live after commit: {}", settings.log_classes());
        }
        Err(e) => println!("Unexpected rejection: {}", e),
    }

    // Scenario 2: A superseded change is withdrawn
    println!("\n--- Scenario 2: Withdrawn Change ---");
    let _superseded = validate("all");
    settings.commit(None);
    println!("Live after suppressed commit: {}", settings.log_classes());

    // Scenario 3: Rejected values
    println!("\n--- Scenario 3: Rejected Values ---");
    for raw in ["read,bogus", "\"read", "", "read write"] {
        match settings.set("pgaudit.log", raw) {
            Ok(()) => println!("{:?}: unexpectedly accepted", raw),
            Err(e) => println!("{:?}: rejected ({}), fault: {:?}", raw, e, e.fault()),
        }
    }
    println!("Live value unchanged: {}", settings.show("pgaudit.log").unwrap_or_default());

    // Scenario 4: Audit decisions
    println!("\n--- Scenario 4: Audit Decisions ---");
    if let Err(e) = settings.set("pgaudit.log", "all, -misc") {
        println!("Unexpected rejection: {}", e);
    }
    if let Err(e) = settings.set("pgaudit.log_catalog", "off") {
        println!("Unexpected rejection: {}", e);
    }
    for (statement, class) in [
        ("SELECT * FROM accounts", LogClass::READ),
        ("SET search_path = app", LogClass::MISC_SET),
        ("CREATE TABLE t (id int)", LogClass::DDL),
    ] {
        println!(
            "{:<28} logged: {}",
            statement,
            settings.logs(class)
        );
    }
    println!("Catalog-only statements logged: {}", settings.log_catalog());
}
