//! Individual modules of a fabrication model.
//!
//! A [`Module`] groups assembly elements (breps) that are built together,
//! tagged with a sub-sequence identifier and a step in the full assembly.

use hashbrown::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::step::Step;
use crate::vector::AssemblyVector;

/// A group of assembly elements within a model.
///
/// The brep payload `B` is opaque; any geometry type can be carried.
///
/// # Example
///
/// ```
/// use mesh_modules::{AssemblyVector, Module, Step};
///
/// let module = Module::new(vec!["plate_a", "plate_b"])
///     .with_sequence("[0, 1]")
///     .with_step(Step::Index(2))
///     .with_assembly_vector(AssemblyVector::Gravity);
///
/// assert_eq!(module.brep_count(), 2);
/// assert_eq!(module.step(), Step::Index(2));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Module<B> {
    /// Geometric solids of this module.
    breps: Vec<B>,

    /// Sub-sequence identifier.
    #[cfg_attr(feature = "serde", serde(default))]
    sequence: String,

    /// Position in the full assembly sequence.
    #[cfg_attr(feature = "serde", serde(default))]
    step: Step,

    /// Insertion directions, one per element.
    #[cfg_attr(feature = "serde", serde(default))]
    assembly_vectors: Vec<AssemblyVector>,

    /// Free-form metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: HashMap<String, String>,
}

impl<B> Module<B> {
    /// Create a module from its breps, at step 0 with an empty sequence.
    #[must_use]
    pub fn new(breps: Vec<B>) -> Self {
        Self {
            breps,
            sequence: String::new(),
            step: Step::default(),
            assembly_vectors: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Get the breps.
    #[must_use]
    pub fn breps(&self) -> &[B] {
        &self.breps
    }

    /// Get a mutable reference to the breps.
    pub fn breps_mut(&mut self) -> &mut Vec<B> {
        &mut self.breps
    }

    /// Get the number of breps.
    #[must_use]
    pub fn brep_count(&self) -> usize {
        self.breps.len()
    }

    /// Get the sub-sequence identifier.
    #[must_use]
    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    /// Get the step tag.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Get the raw assembly vectors, placeholders included.
    #[must_use]
    pub fn assembly_vectors(&self) -> &[AssemblyVector] {
        &self.assembly_vectors
    }

    /// Get the metadata map.
    #[must_use]
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Get a mutable reference to the metadata map.
    pub fn metadata_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.metadata
    }

    /// Set the sub-sequence identifier (builder pattern).
    #[must_use]
    pub fn with_sequence(mut self, sequence: impl ToString) -> Self {
        self.sequence = sequence.to_string();
        self
    }

    /// Set the step tag (builder pattern).
    #[must_use]
    pub fn with_step(mut self, step: impl Into<Step>) -> Self {
        self.step = step.into();
        self
    }

    /// Replace all assembly vectors (builder pattern).
    #[must_use]
    pub fn with_assembly_vectors(mut self, vectors: Vec<AssemblyVector>) -> Self {
        self.assembly_vectors = vectors;
        self
    }

    /// Append one assembly vector (builder pattern).
    #[must_use]
    pub fn with_assembly_vector(mut self, vector: impl Into<AssemblyVector>) -> Self {
        self.assembly_vectors.push(vector.into());
        self
    }

    /// Add metadata (builder pattern).
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Set the step tag.
    pub fn set_step(&mut self, step: Step) {
        self.step = step;
    }

    /// Set the sub-sequence identifier.
    pub fn set_sequence(&mut self, sequence: impl ToString) {
        self.sequence = sequence.to_string();
    }
}

impl<B> Default for Module<B> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_new() {
        let module = Module::new(vec![1_u32, 2, 3]);

        assert_eq!(module.breps(), &[1, 2, 3]);
        assert_eq!(module.sequence(), "");
        assert_eq!(module.step(), Step::Index(0));
        assert!(module.assembly_vectors().is_empty());
    }

    #[test]
    fn test_module_builder() {
        let module = Module::new(vec!["a"])
            .with_sequence(7)
            .with_step(Step::Final)
            .with_assembly_vector([0.0, 1.0, 0.0])
            .with_assembly_vector(AssemblyVector::Gravity)
            .with_metadata("layer", "2");

        assert_eq!(module.sequence(), "7");
        assert!(module.step().is_final());
        assert_eq!(module.assembly_vectors().len(), 2);
        assert!(module.assembly_vectors()[1].is_gravity());
        assert_eq!(module.metadata().get("layer"), Some(&"2".to_string()));
    }

    #[test]
    fn test_module_setters() {
        let mut module: Module<()> = Module::default();

        module.set_step(Step::Index(4));
        module.set_sequence("sub_0");
        module.breps_mut().push(());

        assert_eq!(module.step(), Step::Index(4));
        assert_eq!(module.sequence(), "sub_0");
        assert_eq!(module.brep_count(), 1);
    }
}
