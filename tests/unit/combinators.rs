//! Tests for map, map_err, and_then, and, or, or_else, inspect, match_with.

use super::common::{halve, non_negative, CallCounter};
use outcome::{err, ok, Outcome};

// ============================================================================
// MAP
// ============================================================================

#[test]
fn map_transforms_ok() {
    assert_eq!(ok::<&str, &str>("foo").map(str::len), ok(3));
}

#[test]
fn map_passes_err_through() {
    assert_eq!(err::<&str, &str>("foo").map(str::len), err("foo"));
}

#[test]
fn map_never_calls_f_on_err() {
    let counter = CallCounter::new();
    let _ = err::<i32, &str>("e").map(counter.wrap(|x: i32| x + 1));
    assert_eq!(counter.calls(), 0);

    let _ = ok::<i32, &str>(1).map(counter.wrap(|x: i32| x + 1));
    assert_eq!(counter.calls(), 1);
}

#[test]
fn map_err_transforms_err() {
    assert_eq!(ok::<&str, &str>("foo").map_err(str::len), ok("foo"));
    assert_eq!(err::<&str, &str>("foo").map_err(str::len), err(3));
}

#[test]
fn map_err_never_calls_op_on_ok() {
    let counter = CallCounter::new();
    let _ = ok::<i32, i32>(1).map_err(counter.wrap(|e: i32| e * 2));
    assert_eq!(counter.calls(), 0);
}

#[test]
fn map_or_and_map_or_else() {
    assert_eq!(ok::<&str, &str>("foo").map_or(42, str::len), 3);
    assert_eq!(err::<&str, &str>("bar").map_or(42, str::len), 42);

    assert_eq!(ok::<i32, &str>(2).map_or_else(str::len, |v| v as usize * 10), 20);
    assert_eq!(err::<i32, &str>("four").map_or_else(str::len, |v| v as usize * 10), 4);
}

// ============================================================================
// AND_THEN
// ============================================================================

#[test]
fn and_then_chains_on_ok() {
    assert_eq!(
        ok::<String, String>("foo".into()).and_then(|s| ok(s + "bar")),
        ok("foobar".to_string())
    );
    assert_eq!(
        ok::<String, String>("foo".into()).and_then(|s| err::<String, String>(s + "bar")),
        err("foobar".to_string())
    );
}

#[test]
fn and_then_short_circuits_on_err() {
    assert_eq!(
        err::<String, String>("foo".into()).and_then(|s| ok(s + "bar")),
        err("foo".to_string())
    );
    assert_eq!(
        err::<String, String>("foo".into()).and_then(|s| err::<String, String>(s + "bar")),
        err("foo".to_string())
    );
}

#[test]
fn and_then_stops_at_first_failure() {
    let later = CallCounter::new();
    let chained = ok(12)
        .and_then(halve)
        .and_then(halve)
        .and_then(halve)
        .and_then(later.wrap(non_negative));

    assert_eq!(chained, err("3 is odd".to_string()));
    assert_eq!(later.calls(), 0);
}

// ============================================================================
// AND / OR / OR_ELSE
// ============================================================================

#[test]
fn and_takes_other_only_on_ok() {
    assert_eq!(ok::<i32, i32>(2).and(ok::<&str, i32>("seven")), ok("seven"));
    assert_eq!(ok::<i32, i32>(2).and(err::<&str, i32>(7)), err(7));
    assert_eq!(err::<i32, i32>(2).and(ok::<&str, i32>("seven")), err(2));
    assert_eq!(err::<i32, i32>(2).and(err::<&str, i32>(7)), err(2));
}

#[test]
fn or_takes_other_only_on_err() {
    assert_eq!(ok::<i32, i32>(2).or(ok::<i32, &str>(7)), ok(2));
    assert_eq!(ok::<i32, i32>(2).or(err::<i32, &str>("seven")), ok(2));
    assert_eq!(err::<i32, i32>(2).or(ok::<i32, &str>(7)), ok(7));
    assert_eq!(err::<i32, i32>(2).or(err::<i32, &str>("seven")), err("seven"));
}

#[test]
fn or_else_recovers() {
    assert_eq!(ok::<i32, i32>(2).or_else(|e| ok::<i32, i32>(e * 2)), ok(2));
    assert_eq!(err::<i32, i32>(3).or_else(|e| ok::<i32, i32>(e * 2)), ok(6));
    assert_eq!(err::<i32, i32>(3).or_else(|e| err::<i32, String>(e.to_string())), err("3".to_string()));
}

// ============================================================================
// INSPECT
// ============================================================================

#[test]
fn inspect_sees_only_its_variant() {
    let mut log = vec!["ok: ".to_string(), "err: ".to_string()];

    let inspected_ok = ok::<i32, i32>(2)
        .inspect(|v| log[0].push_str(&v.to_string()))
        .inspect_err(|e| log[1].push_str(&e.to_string()));
    let inspected_err = err::<i32, i32>(5)
        .inspect(|v| log[0].push_str(&v.to_string()))
        .inspect_err(|e| log[1].push_str(&e.to_string()));

    assert_eq!(inspected_ok, ok(2));
    assert_eq!(inspected_err, err(5));
    assert_eq!(log, vec!["ok: 2".to_string(), "err: 5".to_string()]);
}

// ============================================================================
// MATCH_WITH
// ============================================================================

#[test]
fn match_with_runs_exactly_one_branch() {
    let on_ok = CallCounter::new();
    let on_err = CallCounter::new();

    let result = ok::<i32, i32>(5).match_with(on_ok.wrap(|x: i32| x + 1), on_err.wrap(|_: i32| -1));

    assert_eq!(result, 6);
    assert_eq!((on_ok.calls(), on_err.calls()), (1, 0));
}

#[test]
fn match_with_err_branch() {
    let outcome: Outcome<i32, &str> = err("nope");
    assert_eq!(outcome.match_with(|x| x.to_string(), |e| e.to_uppercase()), "NOPE");
}

// ============================================================================
// ITERATION
// ============================================================================

#[test]
fn for_loop_visits_ok_value() {
    let mut seen = Vec::new();
    for value in &ok::<i32, ()>(9) {
        seen.push(*value);
    }
    for value in err::<i32, ()>(()) {
        seen.push(value);
    }
    assert_eq!(seen, vec![9]);
}

#[test]
fn collect_gathers_all_ok_values() {
    let parsed: Outcome<Vec<u8>, String> = ["1", "2", "3"]
        .iter()
        .map(|raw| Outcome::from(raw.parse::<u8>().map_err(|e| e.to_string())))
        .collect();
    assert_eq!(parsed, ok(vec![1, 2, 3]));
}
