/* Analyze command - show discovered shapes, bindings, and
   classifications without generating code */

use super::common::load_targets;
use crate::classify::FieldCodec;
use crate::codegen::AdapterPlanner;
use std::path::PathBuf;

/* Execute the analyze command */
pub fn run(files: Vec<PathBuf>, include_dirs: Vec<PathBuf>, verbose: bool) -> anyhow::Result<()> {
  let resolver = load_targets(&files, include_dirs, verbose)?;

  let planner = AdapterPlanner::with_known_targets(
    resolver.get_all_targets().iter().map(|t| t.name.clone()),
  );
  let mut failures = 0usize;
  for target in resolver.get_all_targets() {
    let package = resolver
      .get_package_for_target(&target.name)
      .unwrap_or_default();
    println!("Target: {} (package {})", target.name, package);

    match planner.plan_target(target) {
      Ok(plan) => {
        println!("  Factory: {}()", plan.target.factory_name);
        println!(
          "  Builder: {} (build: {}())",
          plan.target.builder.type_name, plan.target.builder.build_method
        );
        println!("  Fields:");
        for field in &plan.fields {
          let decode = match &field.decode {
            Some(step) => codec_label(&step.codec),
            None => "write-only".to_string(),
          };
          println!(
            "    - {}: {} (encode {}, decode {})",
            field.name,
            field.accessor_result.render(),
            codec_label(&field.encode),
            decode
          );
        }
      }
      Err(e) => {
        eprintln!("error: {}", e);
        failures += 1;
      }
    }
    println!();
  }

  if failures > 0 {
    anyhow::bail!("{} target(s) failed; see errors above", failures);
  }

  Ok(())
}

fn codec_label(codec: &FieldCodec) -> String {
  match codec {
    FieldCodec::Int => "int".to_string(),
    FieldCodec::Long => "long".to_string(),
    FieldCodec::Double => "double".to_string(),
    FieldCodec::Bool => "bool".to_string(),
    FieldCodec::Text => "text".to_string(),
    FieldCodec::FromText { type_name } => format!("from-text({})", type_name),
  }
}
