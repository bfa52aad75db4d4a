/* Codegen command - generate adapters from descriptor files */

use super::common::load_targets;
use crate::codegen::rust::{RustAdapterGenerator, RustAdapterGeneratorOptions};
use crate::codegen::{AdapterPlan, AdapterPlanner};
use std::collections::HashMap;
use std::path::PathBuf;

/* Execute the codegen command. A failing target is reported and the
   batch continues; the command fails afterwards if anything failed. */
pub fn run(
  files: Vec<PathBuf>,
  include_dirs: Vec<PathBuf>,
  output_dir: PathBuf,
  verbose: bool,
) -> anyhow::Result<()> {
  if verbose {
    println!("Adapter Generator - Code Generation Tool");
    println!("========================================\n");
    println!("[~] Configuration:");
    println!("  Output directory: {}", output_dir.display());
    println!("  Input files: {}", files.len());
    for file in &files {
      println!("    - {}", file.display());
    }
    if !include_dirs.is_empty() {
      println!("  Include directories: {}", include_dirs.len());
      for dir in &include_dirs {
        println!("    - {}", dir.display());
      }
    }
    println!();
  }

  let resolver = load_targets(&files, include_dirs, verbose)?;

  /* Run the discovery pipeline per target; one failure must not take
     the other targets down with it */
  let planner = AdapterPlanner::with_known_targets(
    resolver.get_all_targets().iter().map(|t| t.name.clone()),
  );
  let mut failures = 0usize;
  let mut plans_by_package: HashMap<String, Vec<AdapterPlan>> = HashMap::new();
  for target in resolver.get_all_targets() {
    match planner.plan_target(target) {
      Ok(plan) => {
        let package = resolver
          .get_package_for_target(&target.name)
          .unwrap_or_default();
        plans_by_package.entry(package).or_default().push(plan);
      }
      Err(e) => {
        eprintln!("error: {}", e);
        failures += 1;
      }
    }
  }

  /* Generate adapters for each package in its own directory */
  std::fs::create_dir_all(&output_dir)?;
  for (package, plans) in &plans_by_package {
    let package_dir = package.replace('.', "/");
    let full_output_dir = output_dir.join(&package_dir);

    std::fs::create_dir_all(&full_output_dir)?;

    if verbose {
      println!(
        "[~] Generating adapters for package '{}' in {}",
        package,
        full_output_dir.display()
      );
    }

    let options = RustAdapterGeneratorOptions {
      output_dir: full_output_dir.to_string_lossy().to_string(),
      emit_runtime: true,
    };
    let generator = RustAdapterGenerator::new(options);
    let plan_refs: Vec<&AdapterPlan> = plans.iter().collect();
    generator.emit_code(&plan_refs);
  }

  /* Generate mod.rs files for the package directory tree */
  generate_mod_files(&output_dir, &plans_by_package)?;

  if verbose {
    println!("[✓] Generated adapters in package directories:");
    for package in plans_by_package.keys() {
      let package_dir = package.replace('.', "/");
      println!(
        "    - {}/{}/{{adapters.rs, runtime.rs}}",
        output_dir.display(),
        package_dir
      );
    }
  }

  if failures > 0 {
    anyhow::bail!("{} target(s) failed; see errors above", failures);
  }

  println!("[✓] Adapter generation complete!");
  Ok(())
}

/* Generate mod.rs files mirroring the package structure */
fn generate_mod_files(
  output_dir: &PathBuf,
  plans_by_package: &HashMap<String, Vec<AdapterPlan>>,
) -> anyhow::Result<()> {
  use std::collections::{BTreeMap, BTreeSet};

  /* Build a tree of package components */
  let mut package_tree: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();

  for package in plans_by_package.keys() {
    let parts: Vec<&str> = package.split('.').collect();

    /* For each level, register the child module */
    for i in 0..parts.len() {
      let parent_path = if i == 0 { String::new() } else { parts[0..i].join(".") };
      package_tree
        .entry(parent_path)
        .or_default()
        .insert(parts[i].to_string());
    }
  }

  /* Generate mod.rs at the root and for each intermediate directory */
  for (parent_pkg, children) in &package_tree {
    let parent_dir = if parent_pkg.is_empty() {
      output_dir.clone()
    } else {
      output_dir.join(parent_pkg.replace('.', "/"))
    };

    let mut mod_content = String::new();
    for child in children {
      mod_content.push_str(&format!("pub mod {};\n", child));
    }

    std::fs::write(parent_dir.join("mod.rs"), mod_content)?;
  }

  /* Generate mod.rs for leaf packages; a package that also has
     sub-packages keeps its child modules listed */
  for package in plans_by_package.keys() {
    let package_dir = output_dir.join(package.replace('.', "/"));

    let mut mod_content = String::new();
    if let Some(children) = package_tree.get(package) {
      for child in children {
        mod_content.push_str(&format!("pub mod {};\n", child));
      }
      mod_content.push('\n');
    }
    mod_content.push_str("pub mod adapters;\npub mod runtime;\npub use adapters::*;\n");

    std::fs::write(package_dir.join("mod.rs"), mod_content)?;
  }

  Ok(())
}
