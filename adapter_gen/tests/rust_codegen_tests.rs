/* Rust Adapter Generation Tests
 *
 * These tests verify that the generator produces the expected write
 * and read procedures for planned targets, that field order follows
 * accessor declaration order, and that unsupported shapes fail without
 * taking the rest of the batch down.
 */

use adapter_gen::codegen::{AdapterPlanner, plan_target};
use adapter_gen::codegen::rust::{
    RustAdapterGenerator, RustAdapterGeneratorOptions, emit_adapter, runtime_module_content,
};
use adapter_loader::AdapterFile;
use std::fs;

/* Helper to parse targets from a descriptor file and plan each one */
fn parse_file(yaml: &str) -> AdapterFile {
    serde_yml::from_str(yaml).expect("descriptor file should parse")
}

const ACCOUNT_FILE: &str = r#"
adapter:
  package: "sample.model2"
  adapter-version: 1
  package-version: "1.0.0"
  description: "Account descriptors"

targets:
  - name: "Account"
    methods:
      - name: "accountId"
        result: i32
      - name: "apiKey"
        result: str
      - name: "ratio"
        result: f32
      - name: "balance"
        result: f64
      - name: "active"
        result: bool
      - name: "price"
        result:
          named:
            name: "Money"
      - name: "revision"
        result: i64
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Account.Builder"
    nested-types:
      - name: "Account.Builder"
        methods:
          - name: "accountId"
            params: [i32]
            result:
              named:
                name: "Account.Builder"
          - name: "apiKey"
            params: [str]
            result:
              named:
                name: "Account.Builder"
          - name: "ratio"
            params: [f32]
            result:
              named:
                name: "Account.Builder"
          - name: "balance"
            params: [f64]
            result:
              named:
                name: "Account.Builder"
          - name: "active"
            params: [bool]
            result:
              named:
                name: "Account.Builder"
          - name: "price"
            params:
              - named:
                  name: "Money"
            result:
              named:
                name: "Account.Builder"
          - name: "build"
            result:
              named:
                name: "Account"
"#;

#[test]
fn write_method_covers_every_accessor_in_order() {
    let file = parse_file(ACCOUNT_FILE);
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");
    let code = emit_adapter(&plan);

    assert!(code.contains("pub struct AccountAdapter;"));
    assert!(code.contains("pub fn write(out: &mut JsonObjectWriter, value: &Account)"));
    assert!(code.contains("out.name(\"accountId\").value_i32(value.accountId());"));
    assert!(code.contains("out.name(\"apiKey\").value_str(value.apiKey());"));
    assert!(code.contains("out.name(\"balance\").value_f64(value.balance());"));
    assert!(code.contains("out.name(\"active\").value_bool(value.active());"));
    assert!(code.contains("out.name(\"revision\").value_i64(value.revision());"));

    /* Declaration order is the emission order */
    let account_id = code.find("out.name(\"accountId\")").unwrap();
    let api_key = code.find("out.name(\"apiKey\")").unwrap();
    let ratio = code.find("out.name(\"ratio\")").unwrap();
    let revision = code.find("out.name(\"revision\")").unwrap();
    assert!(account_id < api_key);
    assert!(api_key < ratio);
    assert!(ratio < revision);
}

#[test]
fn read_method_uses_builder_and_skips_unknown_keys() {
    let file = parse_file(ACCOUNT_FILE);
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");
    let code = emit_adapter(&plan);

    assert!(code.contains("pub fn read(input: &mut JsonObjectReader) -> Result<Account, CodecError>"));
    assert!(code.contains("let mut builder = Account::builder();"));
    assert!(code.contains("\"accountId\" => { builder = builder.accountId(input.next_i32()?); }"));
    assert!(code.contains("\"apiKey\" => { builder = builder.apiKey(input.next_string()?); }"));
    assert!(code.contains("\"active\" => { builder = builder.active(input.next_bool()?); }"));
    assert!(code.contains("_ => input.skip_value()?,"));
    assert!(code.contains("Ok(builder.build())"));
}

#[test]
fn float_widths_share_the_double_path() {
    let file = parse_file(ACCOUNT_FILE);
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");
    let code = emit_adapter(&plan);

    /* f32 accessors widen on write and narrow on read */
    assert!(code.contains("out.name(\"ratio\").value_f64(f64::from(value.ratio()));"));
    assert!(code.contains("\"ratio\" => { builder = builder.ratio(input.next_f64()? as f32); }"));

    /* f64 fields pass through untouched */
    assert!(code.contains("out.name(\"balance\").value_f64(value.balance());"));
    assert!(code.contains("\"balance\" => { builder = builder.balance(input.next_f64()?); }"));
}

#[test]
fn declared_types_round_trip_through_their_text_form() {
    let file = parse_file(ACCOUNT_FILE);
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");
    let code = emit_adapter(&plan);

    assert!(code.contains("out.name(\"price\").value_str(&value.price().to_string());"));
    assert!(code.contains("\"price\" => { builder = builder.price(Money::from(input.next_string()?)); }"));
}

#[test]
fn write_only_fields_have_no_read_arm() {
    let file = parse_file(
        r#"
adapter:
  package: "sample.model2"
  adapter-version: 1
  package-version: "1.0.0"
  description: "Session descriptors"

targets:
  - name: "Session"
    methods:
      - name: "token"
        result: str
      - name: "createdAt"
        result: i64
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Session.Builder"
    nested-types:
      - name: "Session.Builder"
        methods:
          - name: "token"
            params: [str]
            result:
              named:
                name: "Session.Builder"
          - name: "build"
            result:
              named:
                name: "Session"
"#,
    );
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");
    let code = emit_adapter(&plan);

    /* Written always, read back never */
    assert!(code.contains("out.name(\"createdAt\").value_i64(value.createdAt());"));
    assert!(!code.contains("\"createdAt\" =>"));
}

#[test]
fn unsupported_field_fails_generation_naming_the_field() {
    let file = parse_file(
        r#"
adapter:
  package: "sample.model2"
  adapter-version: 1
  package-version: "1.0.0"
  description: "Broken descriptors"

targets:
  - name: "Bag"
    methods:
      - name: "entries"
        result:
          named:
            name: "List"
            type-args: [str]
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Bag.Builder"
    nested-types:
      - name: "Bag.Builder"
        methods:
          - name: "build"
            result:
              named:
                name: "Bag"
"#,
    );

    let err = plan_target(&file.get_targets()[0]).expect_err("must fail");
    let message = err.to_string();
    assert!(message.contains("Bag"));
    assert!(message.contains("entries"));
}

#[test]
fn fields_typed_as_other_targets_are_rejected() {
    let file = parse_file(
        r#"
adapter:
  package: "sample.model2"
  adapter-version: 1
  package-version: "1.0.0"
  description: "Nested target"

targets:
  - name: "Wallet"
    methods:
      - name: "price"
        result:
          named:
            name: "Money"
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Wallet.Builder"
    nested-types:
      - name: "Wallet.Builder"
        methods:
          - name: "price"
            params:
              - named:
                  name: "Money"
            result:
              named:
                name: "Wallet.Builder"
          - name: "build"
            result:
              named:
                name: "Wallet"
"#,
    );
    let target = &file.get_targets()[0];

    /* Alone, Money passes as text-constructible */
    assert!(plan_target(target).is_ok());

    /* In a batch where Money is itself a target, the field is rejected
       and the error names it */
    let planner = AdapterPlanner::with_known_targets(
        ["Wallet".to_string(), "Money".to_string()],
    );
    let err = planner.plan_target(target).expect_err("must fail");
    let message = err.to_string();
    assert!(message.contains("Wallet"));
    assert!(message.contains("price"));
    assert!(message.contains("Money"));
}

#[test]
fn one_failing_target_does_not_suppress_the_others() {
    let file = parse_file(
        r#"
adapter:
  package: "sample.model2"
  adapter-version: 1
  package-version: "1.0.0"
  description: "Mixed batch"

targets:
  - name: "Broken"
    methods:
      - name: "data"
        result:
          array:
            element-type: i32
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Broken.Builder"
    nested-types:
      - name: "Broken.Builder"
        methods:
          - name: "build"
            result:
              named:
                name: "Broken"
  - name: "Fine"
    methods:
      - name: "value"
        result: i32
      - name: "builder"
        is-static: true
        result:
          named:
            name: "Fine.Builder"
    nested-types:
      - name: "Fine.Builder"
        methods:
          - name: "value"
            params: [i32]
            result:
              named:
                name: "Fine.Builder"
          - name: "build"
            result:
              named:
                name: "Fine"
"#,
    );

    let results: Vec<_> = file.get_targets().iter().map(plan_target).collect();
    assert!(results[0].is_err());
    let plan = results[1].as_ref().expect("second target should plan");
    assert_eq!(plan.target.name, "Fine");
}

#[test]
fn emit_code_writes_adapters_and_runtime_files() {
    let file = parse_file(ACCOUNT_FILE);
    let plan = plan_target(&file.get_targets()[0]).expect("should plan");

    let out_dir = tempfile::tempdir().expect("tempdir");
    let options = RustAdapterGeneratorOptions {
        output_dir: out_dir.path().to_string_lossy().to_string(),
        emit_runtime: true,
    };
    let generator = RustAdapterGenerator::new(options);
    let code = generator.emit_code(&[&plan]);

    assert!(code.contains("use super::runtime::{CodecError, JsonObjectReader, JsonObjectWriter};"));

    let adapters = fs::read_to_string(out_dir.path().join("adapters.rs")).expect("adapters.rs");
    assert_eq!(adapters, code);

    let runtime = fs::read_to_string(out_dir.path().join("runtime.rs")).expect("runtime.rs");
    assert_eq!(runtime, runtime_module_content());
    assert!(runtime.contains("pub struct JsonObjectReader"));
    assert!(runtime.contains("pub struct JsonObjectWriter"));
}
