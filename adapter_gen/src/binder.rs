use crate::shape::resolved::ResolvedTarget;
use adapter_types::TypeTag;

/// One serializable field: always written, read back only when the
/// builder exposes a setter of the identical name.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldBinding {
  pub name: String,
  pub accessor_result: TypeTag,
  pub setter_param: Option<TypeTag>,
}

impl FieldBinding {
  pub fn is_write_only(&self) -> bool {
    self.setter_param.is_none()
  }
}

/* Pair each accessor with the setter of the identical name. Accessor
   declaration order fixes the binding order; setters matching no
   accessor are left unused. Binding never fails: writing is complete
   over the accessors, reading partial over the setters. */
pub fn bind_fields(resolved: &ResolvedTarget) -> Vec<FieldBinding> {
  resolved
    .accessors
    .iter()
    .map(|accessor| {
      let setter_param = resolved
        .builder
        .setters
        .iter()
        .find(|setter| setter.name == accessor.name)
        .map(|setter| setter.param.clone());
      FieldBinding {
        name: accessor.name.clone(),
        accessor_result: accessor.result.clone(),
        setter_param,
      }
    })
    .collect()
}
