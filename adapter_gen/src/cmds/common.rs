/* Common utilities shared between analyze and codegen commands */

use adapter_loader::ImportResolver;
use std::path::PathBuf;

/* Load all descriptor files (and their path imports) into a resolver */
pub fn load_targets(
  files: &[PathBuf],
  include_dirs: Vec<PathBuf>,
  verbose: bool,
) -> anyhow::Result<ImportResolver> {
  let mut resolver = ImportResolver::new(include_dirs);

  if verbose {
    println!("[~] Loading descriptor files and resolving imports...");
  }

  for file in files {
    resolver.load_file_with_imports(file, verbose)?;
  }

  if verbose {
    println!(
      "\n[~] Loaded {} file(s) total (including imports)",
      resolver.loaded_file_count()
    );
    println!("[~] Packages loaded:");
    for package in resolver.get_packages() {
      println!("    - {}", package);
    }
    println!();
  }

  Ok(resolver)
}
