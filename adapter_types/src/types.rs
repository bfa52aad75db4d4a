use serde_derive::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct NamedType {
    pub name: String,
    /// Generic containers carry their arguments here; a plain declared
    /// type has none.
    #[serde(default)]
    pub type_args: Vec<TypeTag>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct ArrayType {
    pub element_type: Box<TypeTag>,
}

/// Declared type of a member result or parameter.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub enum TypeTag {
    I32,
    I64,
    F32,
    F64,
    Bool,
    Str,
    Named(NamedType),
    Array(ArrayType),
}

impl TypeTag {
    /* Shorthand for an argument-free declared type */
    pub fn named(name: impl Into<String>) -> Self {
        TypeTag::Named(NamedType {
            name: name.into(),
            type_args: Vec::new(),
        })
    }

    /* Human-readable rendering used in diagnostics */
    pub fn render(&self) -> String {
        match self {
            TypeTag::I32 => "i32".to_string(),
            TypeTag::I64 => "i64".to_string(),
            TypeTag::F32 => "f32".to_string(),
            TypeTag::F64 => "f64".to_string(),
            TypeTag::Bool => "bool".to_string(),
            TypeTag::Str => "str".to_string(),
            TypeTag::Named(named) => {
                if named.type_args.is_empty() {
                    named.name.clone()
                } else {
                    let args: Vec<String> =
                        named.type_args.iter().map(TypeTag::render).collect();
                    format!("{}<{}>", named.name, args.join(", "))
                }
            }
            TypeTag::Array(array) => format!("[{}]", array.element_type.render()),
        }
    }
}

/// One member of a target or builder type. `result: None` means the
/// member returns nothing.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct MethodDescriptor {
    pub name: String,

    #[serde(default)]
    pub is_static: bool,

    #[serde(default = "default_is_public")]
    pub is_public: bool,

    #[serde(default)]
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub params: Vec<TypeTag>,

    #[serde(default)]
    #[serde(with = "serde_yml::with::singleton_map_recursive")]
    pub result: Option<TypeTag>,
}

fn default_is_public() -> bool {
    true
}

/// Description of a declared type reachable from a factory result
/// (the surface inspected when checking a candidate builder).
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TypeDescriptor {
    pub name: String,
    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    #[default]
    Class,
    Interface,
}

/// A value type an adapter is generated for: its ordered members plus
/// descriptions of the declared types its factories can return.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct TargetDescriptor {
    pub name: String,

    #[serde(default)]
    pub kind: TargetKind,

    #[serde(default = "default_is_public")]
    pub is_public: bool,

    #[serde(default)]
    pub methods: Vec<MethodDescriptor>,

    #[serde(default)]
    pub nested_types: Vec<TypeDescriptor>,
}

impl TargetDescriptor {
    /* Look up a nested type description by name */
    pub fn nested_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.nested_types.iter().find(|t| t.name == name)
    }
}
