/* Runtime Discipline Tests
 *
 * These tests exercise the JSON object reader/writer that generated
 * adapters run against: write order, typed-read mismatches naming the
 * offending field, skip semantics, and cursor discipline.
 */

use adapter_gen::runtime::{CodecError, JsonObjectReader, JsonObjectWriter};

#[test]
fn writer_emits_fields_in_emission_order() {
    let mut out = JsonObjectWriter::new();
    out.begin_object();
    out.name("b").value_i32(2);
    out.name("a").value_i32(1);
    out.name("text").value_str("hi");
    out.end_object();

    assert_eq!(out.into_string(), r#"{"b":2,"a":1,"text":"hi"}"#);
}

#[test]
fn begin_object_resets_the_writer() {
    let mut out = JsonObjectWriter::new();
    out.begin_object();
    out.name("stale").value_bool(true);

    out.begin_object();
    out.name("fresh").value_i64(9);
    out.end_object();

    assert_eq!(out.into_string(), r#"{"fresh":9}"#);
}

#[test]
fn reader_walks_entries_in_input_order() {
    let mut input = JsonObjectReader::new(r#"{"second":2,"first":1}"#).expect("parse");
    input.begin_object().unwrap();

    assert!(input.has_next());
    assert_eq!(input.next_name().unwrap(), "second");
    assert_eq!(input.next_i32().unwrap(), 2);
    assert_eq!(input.next_name().unwrap(), "first");
    assert_eq!(input.next_i32().unwrap(), 1);
    assert!(!input.has_next());
    input.end_object().unwrap();
}

#[test]
fn type_mismatch_names_the_field() {
    let mut input = JsonObjectReader::new(r#"{"accountId":"nope"}"#).expect("parse");
    input.begin_object().unwrap();
    input.next_name().unwrap();

    let err = input.next_i32().expect_err("must fail");
    match &err {
        CodecError::UnexpectedValue { field, expected, found } => {
            assert_eq!(field, "accountId");
            assert_eq!(*expected, "i32 number");
            assert_eq!(*found, "string");
        }
        other => panic!("unexpected error: {:?}", other),
    }
    assert!(err.to_string().contains("accountId"));
}

#[test]
fn narrow_reads_report_out_of_range_numbers() {
    let mut input = JsonObjectReader::new(r#"{"accountId":999999999999}"#).expect("parse");
    input.begin_object().unwrap();
    input.next_name().unwrap();

    let err = input.next_i32().expect_err("must fail");
    assert!(matches!(err, CodecError::NumberOutOfRange { .. }));
    assert!(err.to_string().contains("accountId"));
    assert!(err.to_string().contains("i32"));
}

#[test]
fn double_path_accepts_integer_numbers() {
    let mut input = JsonObjectReader::new(r#"{"ratio":3}"#).expect("parse");
    input.begin_object().unwrap();
    input.next_name().unwrap();
    assert_eq!(input.next_f64().unwrap(), 3.0);
}

#[test]
fn skip_value_steps_over_arbitrary_values() {
    let text = r#"{"junk":{"nested":[1,2,3]},"kept":true}"#;
    let mut input = JsonObjectReader::new(text).expect("parse");
    input.begin_object().unwrap();

    assert_eq!(input.next_name().unwrap(), "junk");
    input.skip_value().unwrap();

    assert_eq!(input.next_name().unwrap(), "kept");
    assert!(input.next_bool().unwrap());
    input.end_object().unwrap();
}

#[test]
fn end_object_rejects_unread_entries() {
    let mut input = JsonObjectReader::new(r#"{"a":1,"b":2}"#).expect("parse");
    input.begin_object().unwrap();
    input.next_name().unwrap();
    input.next_i32().unwrap();

    let err = input.end_object().expect_err("must fail");
    assert!(matches!(err, CodecError::UnreadEntries { remaining: 1 }));
}

#[test]
fn value_read_before_name_is_an_error() {
    let mut input = JsonObjectReader::new(r#"{"a":1}"#).expect("parse");
    input.begin_object().unwrap();

    let err = input.next_i32().expect_err("must fail");
    assert!(matches!(err, CodecError::ValueBeforeName));
}

#[test]
fn non_object_input_is_rejected() {
    let err = JsonObjectReader::new("[1,2,3]").expect_err("must fail");
    assert!(matches!(err, CodecError::NotAnObject));

    let err = JsonObjectReader::new("{not json").expect_err("must fail");
    assert!(matches!(err, CodecError::Malformed(_)));
}
