use audit_config::{
    registry, validate, AuditSettings, LogClass, SyntaxFault, ValidationError,
};

#[test]
fn every_name_in_any_case_sets_only_its_bits() {
    let expected = [
        ("ddl", LogClass::DDL),
        ("function", LogClass::FUNCTION),
        ("misc", LogClass::MISC | LogClass::MISC_SET),
        ("misc_set", LogClass::MISC_SET),
        ("read", LogClass::READ),
        ("role", LogClass::ROLE),
        ("write", LogClass::WRITE),
    ];

    for (name, classes) in expected {
        for spelling in [name.to_string(), name.to_uppercase()] {
            let candidate = validate(&spelling).expect("known class");
            assert_eq!(candidate.classes(), classes, "spelling {:?}", spelling);
        }
    }
}

#[test]
fn documented_examples() {
    assert_eq!(validate("ALL").unwrap().classes().bits(), u32::MAX);
    assert_eq!(validate("NONE").unwrap().classes().bits(), 0);
    assert_eq!(
        validate("ALL,-WRITE").unwrap().classes(),
        LogClass::ALL.difference(LogClass::WRITE)
    );
    assert_eq!(validate("READ,WRITE,-READ").unwrap().classes(), LogClass::WRITE);
    assert_eq!(validate("DDL,NONE").unwrap().classes(), LogClass::DDL);
}

#[test]
fn rejections_carry_diagnostics() {
    let err = validate("").unwrap_err();
    assert_eq!(err.fault(), Some(SyntaxFault::EmptyInput));
    assert_eq!(err.to_string(), "List syntax is invalid");

    let err = validate("bogus").unwrap_err();
    assert_eq!(
        err,
        ValidationError::UnknownClass {
            token: "bogus".to_string()
        }
    );
    assert!(err.to_string().contains("bogus"));
}

#[test]
fn host_change_flow() {
    let settings = AuditSettings::new();

    // The host validates when the operator issues the change...
    let candidate = validate("read, write").expect("valid");
    assert_eq!(settings.log_classes(), LogClass::NONE);

    // ...and commits it later.
    settings.commit(Some(candidate));
    assert!(settings.logs(LogClass::WRITE));

    // A superseded change is committed as None.
    let _superseded = validate("all").expect("valid");
    settings.commit(None);
    assert_eq!(settings.log_classes(), LogClass::READ | LogClass::WRITE);
}

#[test]
fn validation_is_repeatable_and_side_effect_free() {
    let settings = AuditSettings::new();
    settings.commit(Some(validate("role").unwrap()));

    let first = validate("all,-misc,ddl").unwrap();
    let second = validate("all,-misc,ddl").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.classes().bits(), second.classes().bits());
    assert_eq!(settings.log_classes(), LogClass::ROLE);
}

#[test]
fn registry_round_trip() {
    let settings = AuditSettings::new();

    for def in registry::DEFINITIONS {
        assert_eq!(settings.show(def.name).unwrap(), def.boot_value);
    }

    settings.set("pgaudit.log", "misc, -misc_set, read").unwrap();
    let shown = settings.show("pgaudit.log").unwrap();
    assert_eq!(shown, "misc,-misc_set,read");
    assert_eq!(validate(&shown).unwrap().classes(), settings.log_classes());
}

#[test]
fn global_settings_start_at_defaults() {
    // Only this test touches the process-wide instance.
    let settings = AuditSettings::global();
    assert_eq!(settings.log_classes(), audit_config::DEFAULT_LOG_CLASSES);
    assert_eq!(settings.log_catalog(), audit_config::DEFAULT_LOG_CATALOG);

    settings.set("pgaudit.log", "ddl").unwrap();
    assert!(AuditSettings::global().logs(LogClass::DDL));
    settings.reset();
}
