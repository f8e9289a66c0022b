//! Variant queries, equality, and option conversions.

use outcome::{err, ok, Outcome};

// ============================================================================
// VARIANT QUERIES
// ============================================================================

#[test]
fn ok_reports_ok() {
    assert!(ok::<i32, i32>(1).is_ok());
    assert!(!ok::<i32, i32>(1).is_err());
}

#[test]
fn err_reports_err() {
    assert!(!err::<i32, i32>(1).is_ok());
    assert!(err::<i32, i32>(1).is_err());
}

#[test]
fn queries_do_not_consume() {
    let outcome = ok::<String, ()>("kept".to_string());
    assert!(outcome.is_ok());
    assert!(outcome.is_ok());
    assert_eq!(outcome, ok("kept".to_string()));
}

#[test]
fn variant_constructors_match_factories() {
    assert_eq!(Outcome::<u8, ()>::Ok(1), ok(1));
    assert_eq!(Outcome::<(), u8>::Err(1), err(1));
}

// ============================================================================
// EQUALITY
// ============================================================================

#[test]
fn equality_follows_variant_and_contents() {
    let ok1 = ok::<i32, i32>(1);
    let err1 = err::<i32, i32>(1);

    assert_eq!(ok1, ok(1));
    assert_ne!(ok1, ok(2));
    assert_ne!(ok1, err1);

    assert_eq!(err1, err(1));
    assert_ne!(err1, err(2));
    assert_ne!(err1, ok1);
}

#[test]
fn equality_uses_contained_type_equality() {
    assert_eq!(err::<(), &str>("x"), err("x"));
    assert_eq!(err::<(), String>("x".to_string()), err(String::from("x")));

    let nan = ok::<f64, ()>(f64::NAN);
    let same_nan = nan;
    assert_ne!(nan, same_nan);
}

// ============================================================================
// OPTION CONVERSIONS
// ============================================================================

#[test]
fn ok_and_err_project_to_option() {
    assert_eq!(ok::<i32, &str>(3).ok(), Some(3));
    assert_eq!(ok::<i32, &str>(3).err(), None);
    assert_eq!(err::<i32, &str>("e").ok(), None);
    assert_eq!(err::<i32, &str>("e").err(), Some("e"));
}

#[test]
fn as_ref_borrows_contents() {
    let outcome = ok::<String, String>("value".to_string());
    let borrowed: Outcome<&String, &String> = outcome.as_ref();

    assert_eq!(borrowed.map(String::len), ok(5));
    assert_eq!(outcome, ok("value".to_string()));
}
