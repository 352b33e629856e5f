//! Integration property tests for audit-config.
//!
//! These tests check the validate/commit protocol end to end through the
//! public API using property-based testing.

use audit_config::{validate, AuditSettings, LogClass, ValidationError};
use proptest::prelude::*;

// Strategy: a recognized name, optionally negated
fn arb_element() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop_oneof![
            Just("none"),
            Just("all"),
            Just("ddl"),
            Just("function"),
            Just("misc"),
            Just("misc_set"),
            Just("read"),
            Just("role"),
            Just("write"),
        ],
    )
        .prop_map(|(subtract, name)| {
            if subtract {
                format!("-{}", name)
            } else {
                name.to_string()
            }
        })
}

fn arb_list() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_element(), 1..10).prop_map(|elements| elements.join(","))
}

proptest! {
    /// Property: rejected values never reach the live setting
    #[test]
    fn proptest_rejection_preserves_live_value(
        valid in arb_list(),
        junk in prop::string::string_regex("[a-z_]{1,12}").unwrap()
    ) {
        let settings = AuditSettings::new();
        settings.commit(Some(validate(&valid).expect("generated list is valid")));
        let before = settings.log_classes();

        let result = settings.set("pgaudit.log", &format!("{},{}", valid, junk));

        match result {
            Ok(()) => {
                // junk happened to be a class name
                prop_assert!(audit_config::resolve(&junk) != audit_config::ClassToken::Unrecognized);
            }
            Err(err) => {
                prop_assert_eq!(err, ValidationError::UnknownClass { token: junk });
                prop_assert_eq!(settings.log_classes(), before);
            }
        }
    }

    /// Property: the last element decides for the bits it names
    #[test]
    fn proptest_last_element_wins(prefix in arb_list(), last in arb_element()) {
        let classes = validate(&format!("{},{}", prefix, last)).unwrap().classes();
        let (name, subtract) = match last.strip_prefix('-') {
            Some(name) => (name, true),
            None => (last.as_str(), false),
        };
        let bits = validate(name).unwrap().classes();

        if subtract {
            prop_assert!(!classes.intersects(bits));
        } else {
            prop_assert!(classes.contains(bits));
        }
    }

    /// Property: committing publishes exactly the candidate's bits
    #[test]
    fn proptest_commit_publishes_candidate(list in arb_list()) {
        let settings = AuditSettings::new();
        let candidate = validate(&list).unwrap();

        settings.commit(Some(candidate));
        prop_assert_eq!(settings.log_classes().bits(), candidate.classes().bits());

        settings.commit(None);
        prop_assert_eq!(settings.log_classes().bits(), candidate.classes().bits());
    }

    /// Property: undeclared bits are either all set or all clear
    #[test]
    fn proptest_undeclared_bits_are_all_or_nothing(list in arb_list()) {
        let classes = validate(&list).unwrap().classes();
        let undeclared = classes.difference(LogClass::all());

        prop_assert!(
            undeclared.is_empty() || undeclared == LogClass::ALL.difference(LogClass::all())
        );
    }

    /// Property: shown values validate back to the live value
    #[test]
    fn proptest_show_round_trips(list in arb_list()) {
        let settings = AuditSettings::new();
        settings.set("pgaudit.log", &list).unwrap();

        let shown = settings.show("pgaudit.log").unwrap();
        prop_assert_eq!(validate(&shown).unwrap().classes(), settings.log_classes());
    }
}
