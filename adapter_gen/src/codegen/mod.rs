pub mod rust;

use crate::binder::bind_fields;
use crate::classify::{ClassifyError, FieldCodec, classify};
use crate::shape::resolved::{ResolvedTarget, ShapeError, resolve_target};
use adapter_types::{TargetDescriptor, TypeTag};
use std::collections::HashSet;
use thiserror::Error;

/// A target with every field's conversion strategy decided. Encode
/// strategies cover all accessors; decode strategies exist only for
/// fields the builder can set.
#[derive(Debug, Clone)]
pub struct AdapterPlan {
  pub target: ResolvedTarget,
  pub fields: Vec<PlannedField>,
}

#[derive(Debug, Clone)]
pub struct PlannedField {
  pub name: String,
  pub accessor_result: TypeTag,
  pub encode: FieldCodec,
  pub decode: Option<DecodeStep>,
}

#[derive(Debug, Clone)]
pub struct DecodeStep {
  pub setter_param: TypeTag,
  pub codec: FieldCodec,
}

#[derive(Debug, Error)]
pub enum PlanError {
  #[error("target '{target}' field '{field}': {source}")]
  UnsupportedField {
    target: String,
    field: String,
    #[source]
    source: ClassifyError,
  },
}

#[derive(Debug, Error)]
pub enum GenerateError {
  #[error(transparent)]
  Shape(#[from] ShapeError),

  #[error(transparent)]
  Plan(#[from] PlanError),
}

/// Plans adapters for a batch of targets. The planner knows every
/// target name in the batch so that a field typed as another target is
/// rejected instead of being mistaken for a text-constructible type.
#[derive(Debug, Default)]
pub struct AdapterPlanner {
  known_targets: HashSet<String>,
}

impl AdapterPlanner {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_known_targets(names: impl IntoIterator<Item = String>) -> Self {
    Self { known_targets: names.into_iter().collect() }
  }

  /* Classify every binding of a resolved target. A single unsupported
     field fails the whole target; no adapter is emitted for it. */
  pub fn plan_adapter(&self, resolved: &ResolvedTarget) -> Result<AdapterPlan, PlanError> {
    let bindings = bind_fields(resolved);
    let mut fields = Vec::with_capacity(bindings.len());

    for binding in bindings {
      let unsupported = |source| PlanError::UnsupportedField {
        target: resolved.name.clone(),
        field: binding.name.clone(),
        source,
      };

      let encode = self
        .classify_field(&binding.accessor_result)
        .map_err(&unsupported)?;
      let decode = match &binding.setter_param {
        Some(param) => Some(DecodeStep {
          setter_param: param.clone(),
          codec: self.classify_field(param).map_err(&unsupported)?,
        }),
        None => None,
      };

      fields.push(PlannedField {
        name: binding.name,
        accessor_result: binding.accessor_result,
        encode,
        decode,
      });
    }

    Ok(AdapterPlan { target: resolved.clone(), fields })
  }

  /// Full discovery pipeline for one target descriptor. Failure is
  /// local to this target.
  pub fn plan_target(&self, target: &TargetDescriptor) -> Result<AdapterPlan, GenerateError> {
    let resolved = resolve_target(target)?;
    Ok(self.plan_adapter(&resolved)?)
  }

  fn classify_field(&self, tag: &TypeTag) -> Result<FieldCodec, ClassifyError> {
    let codec = classify(tag)?;
    if let FieldCodec::FromText { type_name } = &codec {
      if self.known_targets.contains(type_name) {
        return Err(ClassifyError::NestedTarget { type_name: type_name.clone() });
      }
    }
    Ok(codec)
  }
}

/// Plan a single target outside a batch.
pub fn plan_target(target: &TargetDescriptor) -> Result<AdapterPlan, GenerateError> {
  AdapterPlanner::new().plan_target(target)
}
