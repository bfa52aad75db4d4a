use adapter_types::{TargetDescriptor, TargetKind, TypeDescriptor, TypeTag};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
  pub name: String,
  pub result: TypeTag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Setter {
  pub name: String,
  pub param: TypeTag,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedBuilder {
  pub type_name: String,
  pub setters: Vec<Setter>,
  pub build_method: String,
}

/// Resolved view of a target: its readable fields plus the builder
/// that reconstructs it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTarget {
  pub name: String,
  pub accessors: Vec<Accessor>,
  pub factory_name: String,
  pub builder: ResolvedBuilder,
}

#[derive(Debug, Error)]
pub enum ShapeError {
  #[error("target '{target}' must be a class, not an interface")]
  NotAClass { target: String },

  #[error("target '{target}' must be public")]
  NotPublic { target: String },

  #[error("no builder found for target '{target}'")]
  NoBuilderFound { target: String },

  #[error(
    "target '{target}' has ambiguous builders: factories '{first}' and '{second}' both qualify"
  )]
  AmbiguousBuilder {
    target: String,
    first: String,
    second: String,
  },
}

/// Resolve the builder shape of a target by pure inspection of its
/// descriptor. Fails only for this target; the caller decides what to
/// do with the rest of the batch.
pub fn resolve_target(target: &TargetDescriptor) -> Result<ResolvedTarget, ShapeError> {
  if target.kind != TargetKind::Class {
    return Err(ShapeError::NotAClass { target: target.name.clone() });
  }
  if !target.is_public {
    return Err(ShapeError::NotPublic { target: target.name.clone() });
  }

  let accessors = collect_accessors(target);
  let (factory_name, builder) = find_builder(target)?;

  Ok(ResolvedTarget { name: target.name.clone(), accessors, factory_name, builder })
}

/* Every public, non-static, zero-argument member with a result is a
   readable field; declaration order is preserved and later fixes the
   emitted field order. */
fn collect_accessors(target: &TargetDescriptor) -> Vec<Accessor> {
  target
    .methods
    .iter()
    .filter(|m| m.is_public && !m.is_static && m.params.is_empty())
    .filter_map(|m| {
      m.result.as_ref().map(|result| Accessor { name: m.name.clone(), result: result.clone() })
    })
    .collect()
}

/* Find the factory method and builder type. A candidate is any static
   zero-argument member returning a declared type; it qualifies when
   that type is described and carries a build method. More than one
   qualifying factory is rejected rather than silently picking the
   first. */
fn find_builder(target: &TargetDescriptor) -> Result<(String, ResolvedBuilder), ShapeError> {
  let mut found: Option<(String, ResolvedBuilder)> = None;

  for method in &target.methods {
    if !method.is_static || !method.params.is_empty() {
      continue;
    }
    let Some(TypeTag::Named(named)) = &method.result else {
      continue;
    };
    if !named.type_args.is_empty() {
      continue;
    }
    let Some(builder_type) = target.nested_type(&named.name) else {
      continue;
    };
    let Some(build_method) = find_build_method(builder_type, &target.name) else {
      continue;
    };

    if let Some((first, _)) = &found {
      return Err(ShapeError::AmbiguousBuilder {
        target: target.name.clone(),
        first: first.clone(),
        second: method.name.clone(),
      });
    }

    found = Some((
      method.name.clone(),
      ResolvedBuilder {
        type_name: builder_type.name.clone(),
        setters: collect_setters(builder_type),
        build_method,
      },
    ));
  }

  found.ok_or_else(|| ShapeError::NoBuilderFound { target: target.name.clone() })
}

/* First zero-argument, non-static member whose result type is exactly
   the target type. Identity, not assignability. */
fn find_build_method(builder_type: &TypeDescriptor, target_name: &str) -> Option<String> {
  builder_type
    .methods
    .iter()
    .find(|m| {
      !m.is_static
        && m.params.is_empty()
        && matches!(
          &m.result,
          Some(TypeTag::Named(named)) if named.name == target_name && named.type_args.is_empty()
        )
    })
    .map(|m| m.name.clone())
}

/* All non-static members taking exactly one parameter, in declaration
   order. The result type is irrelevant: chaining is conventional, not
   required. */
fn collect_setters(builder_type: &TypeDescriptor) -> Vec<Setter> {
  builder_type
    .methods
    .iter()
    .filter(|m| !m.is_static && m.params.len() == 1)
    .map(|m| Setter { name: m.name.clone(), param: m.params[0].clone() })
    .collect()
}
