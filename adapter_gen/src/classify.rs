use adapter_types::TypeTag;
use thiserror::Error;

/// Conversion strategy assigned to one field of the JSON encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldCodec {
  Int,
  Long,
  Double,
  Bool,
  Text,
  /// Declared type reconstructed from, and rendered to, its string
  /// form.
  FromText { type_name: String },
}

#[derive(Debug, Error)]
pub enum ClassifyError {
  #[error("unsupported field type '{type_name}'")]
  UnsupportedType { type_name: String },

  #[error("nested target type '{type_name}' is not supported as a field")]
  NestedTarget { type_name: String },
}

/* Both float widths share the double path. Any argument-free declared
   type is provisionally treated as text-constructible; whether it
   really is surfaces when the generated code is compiled, never as a
   silent coercion at decode time. Arrays and generic containers are
   rejected here. */
pub fn classify(tag: &TypeTag) -> Result<FieldCodec, ClassifyError> {
  match tag {
    TypeTag::I32 => Ok(FieldCodec::Int),
    TypeTag::I64 => Ok(FieldCodec::Long),
    TypeTag::F32 | TypeTag::F64 => Ok(FieldCodec::Double),
    TypeTag::Bool => Ok(FieldCodec::Bool),
    TypeTag::Str => Ok(FieldCodec::Text),
    TypeTag::Named(named) if named.type_args.is_empty() => {
      Ok(FieldCodec::FromText { type_name: named.name.clone() })
    }
    other => Err(ClassifyError::UnsupportedType { type_name: other.render() }),
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use adapter_types::{ArrayType, NamedType};

  #[test]
  fn scalar_dispatch() {
    assert_eq!(classify(&TypeTag::I32).unwrap(), FieldCodec::Int);
    assert_eq!(classify(&TypeTag::I64).unwrap(), FieldCodec::Long);
    assert_eq!(classify(&TypeTag::F32).unwrap(), FieldCodec::Double);
    assert_eq!(classify(&TypeTag::F64).unwrap(), FieldCodec::Double);
    assert_eq!(classify(&TypeTag::Bool).unwrap(), FieldCodec::Bool);
    assert_eq!(classify(&TypeTag::Str).unwrap(), FieldCodec::Text);
  }

  #[test]
  fn declared_types_fall_back_to_text_construction() {
    assert_eq!(
      classify(&TypeTag::named("Money")).unwrap(),
      FieldCodec::FromText { type_name: "Money".to_string() }
    );
  }

  #[test]
  fn containers_are_rejected() {
    let array = TypeTag::Array(ArrayType { element_type: Box::new(TypeTag::I32) });
    let err = classify(&array).unwrap_err();
    assert!(err.to_string().contains("[i32]"));

    let list = TypeTag::Named(NamedType {
      name: "List".to_string(),
      type_args: vec![TypeTag::Str],
    });
    let err = classify(&list).unwrap_err();
    assert!(err.to_string().contains("List<str>"));
  }
}
