use adapter_types::TargetDescriptor;
use serde_derive::{Deserialize, Serialize};

/* Import source specification */
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ImportSource {
    /* Local file path import */
    Path {
        /* Relative or absolute path to the descriptor file */
        path: String,
    },
}

impl ImportSource {
    /* Get the path for path imports */
    pub fn path(&self) -> &str {
        match self {
            ImportSource::Path { path } => path,
        }
    }

    /* Get a canonical identifier for this import source */
    pub fn canonical_id(&self) -> String {
        match self {
            ImportSource::Path { path } => format!("path:{}", path),
        }
    }
}

/* Metadata for an adapter descriptor file */
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AdapterMetadata {
    /* Fully qualified package identifier (e.g., "sample.model2") */
    pub package: String,

    /* Optional human-readable display name */
    #[serde(default)]
    pub name: Option<String>,

    /* Descriptor format version */
    pub adapter_version: u32,

    /* This package's semantic version */
    pub package_version: String,

    /* File description */
    pub description: String,

    /* List of imported descriptor files */
    #[serde(default)]
    pub imports: Vec<ImportSource>,
}

/* Complete descriptor file structure with metadata and targets */
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct AdapterFile {
    /* File metadata */
    pub adapter: AdapterMetadata,

    /* Target type descriptors */
    #[serde(default)]
    pub targets: Vec<TargetDescriptor>,
}

impl AdapterFile {
    /* Create a new descriptor file with the given metadata */
    pub fn new(metadata: AdapterMetadata) -> Self {
        Self {
            adapter: metadata,
            targets: Vec::new(),
        }
    }

    /* Add a target descriptor to this file */
    pub fn add_target(&mut self, target: TargetDescriptor) {
        self.targets.push(target);
    }

    /* Get all target descriptors */
    pub fn get_targets(&self) -> &[TargetDescriptor] {
        &self.targets
    }

    /* Get the package identifier */
    pub fn package(&self) -> &str {
        &self.adapter.package
    }

    /* Get the human-readable display name */
    pub fn name(&self) -> Option<&str> {
        self.adapter.name.as_deref()
    }

    /* Get the imports */
    pub fn imports(&self) -> &[ImportSource] {
        &self.adapter.imports
    }

    /* Get the descriptor format version */
    pub fn adapter_version(&self) -> u32 {
        self.adapter.adapter_version
    }

    /* Get the package version */
    pub fn package_version(&self) -> &str {
        &self.adapter.package_version
    }

    /* Get the description */
    pub fn description(&self) -> &str {
        &self.adapter.description
    }
}
