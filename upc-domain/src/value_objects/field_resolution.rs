// How an exposed Item field finds its value in the upstream body

use crate::entities::{scalar_text, UpcItem};
use crate::services::{resolve_validity, to_snake_case, ItemError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldResolution {
    /// The exposed name is the upstream key.
    Direct,
    /// The `valid` check: invalid lookups become field errors.
    Validity,
    /// The exposed name is converted to snake_case first.
    SnakeCase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemFieldSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub resolution: FieldResolution,
}

impl ItemFieldSpec {
    pub fn upstream_key(&self) -> String {
        match self.resolution {
            FieldResolution::Direct => self.name.to_string(),
            FieldResolution::Validity | FieldResolution::SnakeCase => to_snake_case(self.name),
        }
    }

    pub fn bind(&self) -> ItemFieldBinding {
        ItemFieldBinding {
            spec: *self,
            upstream_key: self.upstream_key(),
        }
    }
}

/// A field spec with its upstream key computed once, at schema build time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFieldBinding {
    pub spec: ItemFieldSpec,
    pub upstream_key: String,
}

impl ItemFieldBinding {
    pub fn resolve(&self, item: &UpcItem) -> Result<Option<String>, ItemError> {
        match self.spec.resolution {
            FieldResolution::Validity => {
                Ok(resolve_validity(item)?.as_ref().and_then(scalar_text))
            }
            FieldResolution::Direct | FieldResolution::SnakeCase => {
                Ok(item.lookup(&self.upstream_key))
            }
        }
    }
}
