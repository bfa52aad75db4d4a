use adapter_types::TargetDescriptor;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use crate::file::{AdapterFile, ImportSource};

/* Import resolver for loading and merging imported descriptor files */
pub struct ImportResolver {
    /* Track loaded files to detect circular imports */
    loaded_files: HashSet<PathBuf>,

    /* Include directories for searching imports */
    include_dirs: Vec<PathBuf>,

    /* All collected target descriptors */
    all_targets: Vec<TargetDescriptor>,

    /* All loaded descriptor files */
    all_files: Vec<AdapterFile>,

    /* Map from package name to list of targets in that package */
    package_targets: HashMap<String, Vec<String>>,

    /* Map from target name to the package that declared it first */
    target_origins: HashMap<String, String>,
}

impl ImportResolver {
    /* Create a new import resolver with the given include directories */
    pub fn new(include_dirs: Vec<PathBuf>) -> Self {
        Self {
            loaded_files: HashSet::new(),
            include_dirs,
            all_targets: Vec::new(),
            all_files: Vec::new(),
            package_targets: HashMap::new(),
            target_origins: HashMap::new(),
        }
    }

    /* Resolve an import path relative to a base file or include directories */
    fn resolve_import_path(&self, import_path: &str, base_file: &Path) -> anyhow::Result<PathBuf> {
        /* First try relative to the base file's directory */
        if let Some(parent) = base_file.parent() {
            let relative_path = parent.join(import_path);
            if relative_path.exists() {
                return Ok(relative_path.canonicalize()?);
            }
        }

        /* Then try each include directory */
        for include_dir in &self.include_dirs {
            let include_path = include_dir.join(import_path);
            if include_path.exists() {
                return Ok(include_path.canonicalize()?);
            }
        }

        anyhow::bail!(
            "Import '{}' not found relative to '{}' or in include directories",
            import_path,
            base_file.display()
        )
    }

    /* Load a descriptor file and recursively load its imports */
    pub fn load_file_with_imports(
        &mut self,
        file_path: &Path,
        verbose: bool,
    ) -> anyhow::Result<()> {
        /* Canonicalize the path to detect duplicates */
        let canonical_path = file_path.canonicalize()?;

        /* Skip if already loaded */
        if self.loaded_files.contains(&canonical_path) {
            if verbose {
                println!(
                    "    [~] Skipping already loaded file: {}",
                    file_path.display()
                );
            }
            return Ok(());
        }

        /* Mark as loaded before processing imports to detect circular imports */
        self.loaded_files.insert(canonical_path.clone());

        if verbose {
            println!("[~] Loading descriptor file: {}", file_path.display());
        }

        /* Read and parse the descriptor file */
        let file = std::fs::File::open(file_path)?;
        let contents = std::io::read_to_string(file)?;
        let adapter_file: AdapterFile = serde_yml::from_str(&contents)?;

        if verbose {
            println!("    Package: {}", adapter_file.package());
            println!("    Version: {}", adapter_file.package_version());
            if !adapter_file.imports().is_empty() {
                println!("    Imports: {}", adapter_file.imports().len());
            }
        }

        /* Recursively load path imports */
        let imports = adapter_file.imports().to_vec();
        for import in &imports {
            let ImportSource::Path { path } = import;
            if verbose {
                println!("    [~] Resolving path import: {}", path);
            }

            let import_path = self.resolve_import_path(path, file_path)?;
            self.load_file_with_imports(&import_path, verbose)?;
        }

        /* Register targets with their package; a target name must be
           unique across everything loaded so that every later
           diagnostic points at exactly one declaration */
        let package_name = adapter_file.package().to_string();
        for target in adapter_file.get_targets() {
            if let Some(existing) = self.target_origins.get(&target.name) {
                anyhow::bail!(
                    "Target '{}' in package '{}' is already declared by package '{}'",
                    target.name,
                    package_name,
                    existing
                );
            }
            self.target_origins
                .insert(target.name.clone(), package_name.clone());
            self.package_targets
                .entry(package_name.clone())
                .or_default()
                .push(target.name.clone());
        }

        self.all_targets.extend(adapter_file.get_targets().to_vec());
        self.all_files.push(adapter_file);

        Ok(())
    }

    /* Get all collected target descriptors */
    pub fn get_all_targets(&self) -> &[TargetDescriptor] {
        &self.all_targets
    }

    /* Get all loaded descriptor files */
    pub fn get_all_files(&self) -> &[AdapterFile] {
        &self.all_files
    }

    /* Get the number of loaded files */
    pub fn loaded_file_count(&self) -> usize {
        self.loaded_files.len()
    }

    /* Get the package name for a given target */
    pub fn get_package_for_target(&self, target_name: &str) -> Option<String> {
        self.target_origins.get(target_name).cloned()
    }

    /* Get all packages */
    pub fn get_packages(&self) -> Vec<String> {
        self.package_targets.keys().cloned().collect()
    }
}
