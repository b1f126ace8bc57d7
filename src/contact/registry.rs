//! Field registry: which fields exist, how to read them, how to judge them

use super::field::{FieldId, RawValue};
use super::validator::{rule_for, Rule};

/// Read access to the live form at the moment of a submission attempt
#[cfg_attr(test, mockall::automock)]
pub trait FieldSource {
    /// Current raw value of `field`
    fn raw_value(&self, field: FieldId) -> RawValue;
}

/// Where a field's error text is placed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayTarget {
    /// Directly beneath the input
    Inline,
    /// Beneath a group of inputs (checkbox sets)
    Group,
}

/// Immutable description of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub id: FieldId,
    pub rule: Rule,
    pub message: &'static str,
    pub display: DisplayTarget,
}

impl FieldSpec {
    /// Spec with the built-in rule for `id`
    pub fn standard(id: FieldId) -> Self {
        let (rule, message) = rule_for(id);
        let display = match id {
            FieldId::Interests => DisplayTarget::Group,
            _ => DisplayTarget::Inline,
        };
        Self {
            id,
            rule,
            message,
            display,
        }
    }

    /// Read this field from `source`
    pub fn read(&self, source: &dyn FieldSource) -> RawValue {
        source.raw_value(self.id)
    }
}

/// Ordered set of field specs consumed by the orchestrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
}

impl FieldRegistry {
    /// The six contact form fields in declaration order
    pub fn contact() -> Self {
        Self {
            specs: FieldId::ALL.iter().copied().map(FieldSpec::standard).collect(),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

impl Default for FieldRegistry {
    fn default() -> Self {
        Self::contact()
    }
}
