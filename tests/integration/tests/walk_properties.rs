//! End-to-end traversal behaviour of `walk` over every shape.

use std::collections::HashMap;
use std::thread;

use leafwalk_value::{Channel, Function, Record, Value, walk};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn profile(age: i64, city: &str) -> Record {
    Record::named("Profile").field("Age", age).field("City", city)
}

fn person() -> Record {
    Record::named("Person")
        .field("Name", "Scott")
        .field("Profile", profile(27, "Leeds"))
}

fn calls(value: &Value) -> Vec<String> {
    let mut got = Vec::new();
    walk(value, |input| got.push(input.to_string()));
    got
}

#[rstest]
#[case::struct_with_one_string_field(
    Value::from(Record::new().field("Name", "Scott")),
    vec!["Scott"],
)]
#[case::struct_with_two_string_fields(
    Value::from(Record::new().field("Name", "Scott").field("City", "Leeds")),
    vec!["Scott", "Leeds"],
)]
#[case::struct_with_non_string_field(
    Value::from(Record::new().field("Name", "Scott").field("Age", 27)),
    vec!["Scott"],
)]
#[case::nested_fields(Value::from(person()), vec!["Scott", "Leeds"])]
#[case::pointers_to_things(Value::pointer(person()), vec!["Scott", "Leeds"])]
#[case::slices(
    Value::from(vec![profile(27, "Leeds"), profile(55, "Manchester")]),
    vec!["Leeds", "Manchester"],
)]
#[case::arrays(
    Value::from([profile(27, "Leeds"), profile(55, "Manchester")]),
    vec!["Leeds", "Manchester"],
)]
#[case::nil_pointer(Value::nil(), vec![])]
#[case::bare_string(Value::from("alone"), vec!["alone"])]
#[case::bare_integer(Value::from(27), vec![])]
fn walk_yields_expected_calls(#[case] input: Value, #[case] expected: Vec<&str>) {
    assert_eq!(calls(&input), expected);
}

#[test]
fn with_maps() {
    let mut animals = HashMap::new();
    animals.insert("Cow", "Moo");
    animals.insert("Sheep", "Baa");

    let got = calls(&Value::from(animals));

    assert_eq!(got.len(), 2);
    assert!(got.contains(&"Moo".to_string()), "{got:?} should contain Moo");
    assert!(got.contains(&"Baa".to_string()), "{got:?} should contain Baa");
}

#[test]
fn with_channels() {
    let (tx, channel) = Channel::bounded(0);

    let producer = thread::spawn(move || {
        tx.send(Value::from(profile(27, "Manchester"))).unwrap();
        tx.send(Value::from(profile(28, "Leeds"))).unwrap();
    });

    let got = calls(&Value::from(channel));
    producer.join().unwrap();

    assert_eq!(got, vec!["Manchester", "Leeds"]);
}

#[test]
fn with_function() {
    let f = Function::nullary(|| {
        vec![
            Value::from(profile(27, "Manchester")),
            Value::from(profile(28, "Leeds")),
        ]
    });

    assert_eq!(calls(&Value::from(f)), vec!["Manchester", "Leeds"]);
}

#[test]
fn walking_twice_yields_identical_sequences() {
    let value = Value::from(vec![
        Value::from(person()),
        Value::pointer(profile(55, "Manchester")),
        Value::from(["x", "y"]),
    ]);

    assert_eq!(calls(&value), calls(&value));
}

#[test]
fn mixed_shapes_keep_relative_order() {
    let value = Value::from(
        Record::new()
            .field("a", "first")
            .field("b", Value::pointer(vec!["second", "third"]))
            .field("c", Function::nullary(|| vec![Value::from("fourth")]))
            .field("d", 0.5)
            .field("e", ["fifth"]),
    );

    assert_eq!(
        calls(&value),
        vec!["first", "second", "third", "fourth", "fifth"]
    );
}

#[test]
fn walks_share_nothing_across_threads() {
    let value = Value::from(vec![person(), profile(55, "Manchester")]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let value = value.clone();
            thread::spawn(move || calls(&value))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec!["Scott", "Leeds", "Manchester"]);
    }
}
