use crate::classify::FieldCodec;
use crate::codegen::{AdapterPlan, DecodeStep, PlannedField};
use adapter_types::TypeTag;
use std::fs;

pub struct RustAdapterGenerator {
  options: RustAdapterGeneratorOptions,
}

pub struct RustAdapterGeneratorOptions {
  pub output_dir: String,
  pub emit_runtime: bool,
}

impl Default for RustAdapterGeneratorOptions {
  fn default() -> Self {
    Self { output_dir: ".".to_string(), emit_runtime: true }
  }
}

/* Runtime module embedded verbatim next to the generated adapters */
pub fn runtime_module_content() -> &'static str {
  include_str!("../runtime.rs")
}

impl RustAdapterGenerator {
  pub fn new(options: RustAdapterGeneratorOptions) -> Self {
    Self { options }
  }

  /* Render adapters.rs (and runtime.rs) for one package directory;
     returns the adapters source. */
  pub fn emit_code(&self, plans: &[&AdapterPlan]) -> String {
    let mut output = String::new();

    output.push_str("#![allow(non_snake_case, unused_mut)]\n\n");
    output.push_str("/* Generated adapters. Target types are expected in the parent\n");
    output.push_str(" * module; builders chain by value (setters take and return the\n");
    output.push_str(" * builder). */\n\n");
    output.push_str("use super::*;\n");
    output.push_str("use super::runtime::{CodecError, JsonObjectReader, JsonObjectWriter};\n\n");

    for plan in plans {
      output.push_str(&emit_adapter(plan));
      output.push('\n');
    }

    /* Write adapters to file */
    let adapters_path = format!("{}/adapters.rs", self.options.output_dir);
    if let Err(e) = fs::write(&adapters_path, &output) {
      eprintln!("Warning: Failed to write adapters to {}: {}", adapters_path, e);
    }

    /* Write the runtime module alongside */
    if self.options.emit_runtime {
      let runtime_path = format!("{}/runtime.rs", self.options.output_dir);
      if let Err(e) = fs::write(&runtime_path, runtime_module_content()) {
        eprintln!("Warning: Failed to write runtime to {}: {}", runtime_path, e);
      }
    }

    output
  }
}

/* Generate the adapter type for a single planned target */
pub fn emit_adapter(plan: &AdapterPlan) -> String {
  let mut output = String::new();
  let target_name = &plan.target.name;

  output.push_str(&format!("/* Adapter for: {} */\n", target_name));
  output.push_str(&format!("pub struct {}Adapter;\n\n", target_name));
  output.push_str(&format!("impl {}Adapter {{\n", target_name));
  output.push_str(&emit_write_method(plan));
  output.push('\n');
  output.push_str(&emit_read_method(plan));
  output.push_str("}\n");

  output
}

/* Writing loops over every accessor in declaration order, bound or
   not: the encoding is driven by the target's surface. */
fn emit_write_method(plan: &AdapterPlan) -> String {
  let mut output = String::new();

  output.push_str(&format!(
    "    pub fn write(out: &mut JsonObjectWriter, value: &{}) {{\n",
    plan.target.name
  ));
  output.push_str("        out.begin_object();\n");
  for field in &plan.fields {
    output.push_str(&format!(
      "        out.name(\"{}\").{};\n",
      field.name,
      encode_call(field)
    ));
  }
  output.push_str("        out.end_object();\n");
  output.push_str("    }\n");

  output
}

/* Reading is driven by the input's key order; only bound fields have
   match arms, and every unbound key is skipped explicitly so the
   cursor stays aligned with the next entry. */
fn emit_read_method(plan: &AdapterPlan) -> String {
  let mut output = String::new();
  let target = &plan.target;

  output.push_str(&format!(
    "    pub fn read(input: &mut JsonObjectReader) -> Result<{}, CodecError> {{\n",
    target.name
  ));
  output.push_str(&format!(
    "        let mut builder = {}::{}();\n",
    target.name, target.factory_name
  ));
  output.push_str("        input.begin_object()?;\n");
  output.push_str("        while input.has_next() {\n");
  output.push_str("            match input.next_name()?.as_str() {\n");
  for field in &plan.fields {
    if let Some(decode) = &field.decode {
      output.push_str(&format!(
        "                \"{}\" => {{ builder = builder.{}({}); }}\n",
        field.name,
        field.name,
        decode_expr(decode)
      ));
    }
  }
  output.push_str("                _ => input.skip_value()?,\n");
  output.push_str("            }\n");
  output.push_str("        }\n");
  output.push_str("        input.end_object()?;\n");
  output.push_str(&format!("        Ok(builder.{}())\n", target.builder.build_method));
  output.push_str("    }\n");

  output
}

/* Encode expression for one field, per its classification. f32
   accessors widen to f64; text-constructible types render through
   Display. */
fn encode_call(field: &PlannedField) -> String {
  let accessor = format!("value.{}()", field.name);
  match &field.encode {
    FieldCodec::Int => format!("value_i32({})", accessor),
    FieldCodec::Long => format!("value_i64({})", accessor),
    FieldCodec::Double => {
      if field.accessor_result == TypeTag::F32 {
        format!("value_f64(f64::from({}))", accessor)
      } else {
        format!("value_f64({})", accessor)
      }
    }
    FieldCodec::Bool => format!("value_bool({})", accessor),
    FieldCodec::Text => format!("value_str({})", accessor),
    FieldCodec::FromText { .. } => format!("value_str(&{}.to_string())", accessor),
  }
}

/* Decode expression for one bound field. The double path narrows into
   f32 setters; text-constructible types go through From<String>. */
fn decode_expr(step: &DecodeStep) -> String {
  match &step.codec {
    FieldCodec::Int => "input.next_i32()?".to_string(),
    FieldCodec::Long => "input.next_i64()?".to_string(),
    FieldCodec::Double => {
      if step.setter_param == TypeTag::F32 {
        "input.next_f64()? as f32".to_string()
      } else {
        "input.next_f64()?".to_string()
      }
    }
    FieldCodec::Bool => "input.next_bool()?".to_string(),
    FieldCodec::Text => "input.next_string()?".to_string(),
    FieldCodec::FromText { type_name } => {
      format!("{}::from(input.next_string()?)", type_name)
    }
  }
}
