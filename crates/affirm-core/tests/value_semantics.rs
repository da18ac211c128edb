use affirm_core::{Instance, Value};
use proptest::prelude::*;

#[test]
fn kind_names_match_the_message_vocabulary() {
    assert_eq!(Value::Null.kind(), "NULL");
    assert_eq!(Value::from(true).kind(), "boolean");
    assert_eq!(Value::from(1).kind(), "integer");
    assert_eq!(Value::from(1.5).kind(), "double");
    assert_eq!(Value::from("x").kind(), "string");
    assert_eq!(Value::from(vec![1, 2]).kind(), "array");
    assert_eq!(Value::from(Instance::new("Widget")).kind(), "object");
}

#[test]
fn identity_does_not_coerce() {
    assert!(Value::from(1).identical(&Value::from(1)));
    assert!(!Value::from(1).identical(&Value::from(1.0)));
    assert!(!Value::from(1).identical(&Value::from("1")));
    assert!(!Value::Null.identical(&Value::from(false)));
    assert!(Value::from(vec!["a", "b"]).identical(&Value::from(vec!["a", "b"])));
}

#[test]
fn objects_are_identical_only_to_themselves() {
    let widget = Instance::with_properties("Widget", [("size", 3)]);
    let twin = Instance::with_properties("Widget", [("size", 3)]);
    assert!(Value::from(widget.clone()).identical(&Value::from(widget.clone())));
    assert!(!Value::from(widget.clone()).identical(&Value::from(twin.clone())));
    assert!(Value::from(widget).loosely_equals(&Value::from(twin)));
}

#[test]
fn loose_equality_coerces_scalars() {
    let pairs: Vec<(Value, Value)> = vec![
        (1.into(), "1".into()),
        (1.into(), 1.0.into()),
        ("10".into(), "1e1".into()),
        (" 5".into(), 5.into()),
        (Value::Null, false.into()),
        (Value::Null, "".into()),
        (Value::Null, 0.into()),
        (Value::Null, Value::Array(Vec::new())),
        (true.into(), "yes".into()),
        (false.into(), "0".into()),
        (true.into(), Instance::new("Widget").into()),
    ];
    for (left, right) in pairs {
        assert!(left.loosely_equals(&right), "{left:?} == {right:?}");
        assert!(right.loosely_equals(&left), "{right:?} == {left:?}");
    }
}

#[test]
fn loose_equality_rejects_mismatches() {
    let pairs: Vec<(Value, Value)> = vec![
        (0.into(), "a".into()),
        ("abc".into(), "ABC".into()),
        (Value::Null, "0".into()),
        (Value::Null, Instance::new("Widget").into()),
        (1.into(), vec![1].into()),
        (Instance::new("Widget").into(), "Widget".into()),
        (Instance::new("Widget").into(), Instance::new("Gadget").into()),
    ];
    for (left, right) in pairs {
        assert!(!left.loosely_equals(&right), "{left:?} != {right:?}");
    }
}

#[test]
fn optional_values_map_to_null() {
    assert!(Value::from(None::<i64>).is_null());
    assert!(Value::from(Some("x")).identical(&Value::from("x")));
    assert!(Value::from(()).is_null());
}

proptest! {
    #[test]
    fn integers_are_identical_iff_equal(a in any::<i64>(), b in any::<i64>()) {
        prop_assert_eq!(Value::from(a).identical(&Value::from(b)), a == b);
    }

    #[test]
    fn integers_loosely_equal_their_decimal_strings(a in any::<i64>()) {
        prop_assert!(Value::from(a).loosely_equals(&Value::from(a.to_string())));
    }

    #[test]
    fn strings_are_identical_to_themselves(text in ".*") {
        let value = Value::from(text.clone());
        prop_assert!(value.identical(&Value::from(text)));
        prop_assert!(!value.identical(&Value::Null));
    }
}
