//! Fabrication models.
//!
//! The [`Model`] is the container modules are read from. It keeps modules
//! in insertion order, which is the order retrieval reports them in.

use hashbrown::HashMap;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::module::Module;
use crate::step::Step;

/// An ordered collection of modules.
///
/// # Example
///
/// ```
/// use mesh_modules::{Model, Module, Step};
///
/// let mut model = Model::new("timber_vault");
/// model.add_module(Module::new(vec!["plate_0"]).with_step(0_usize));
/// model.add_module(Module::new(vec!["plate_1"]).with_step(Step::Final));
///
/// assert_eq!(model.module_count(), 2);
/// assert!(model.module(1).unwrap().step().is_final());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Model<B> {
    /// Model name.
    #[cfg_attr(feature = "serde", serde(default))]
    name: String,

    /// Modules in assembly order.
    modules: Vec<Module<B>>,

    /// Model-level metadata.
    #[cfg_attr(feature = "serde", serde(default))]
    metadata: HashMap<String, String>,
}

impl<B> Model<B> {
    /// Create a new empty model.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modules: Vec::new(),
            metadata: HashMap::new(),
        }
    }

    /// Create a model from existing modules.
    #[must_use]
    pub fn from_modules(name: impl Into<String>, modules: Vec<Module<B>>) -> Self {
        Self {
            name: name.into(),
            modules,
            metadata: HashMap::new(),
        }
    }

    /// Get the model name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get model metadata.
    #[must_use]
    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    /// Get mutable model metadata.
    pub fn metadata_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.metadata
    }

    /// Append a module.
    pub fn add_module(&mut self, module: Module<B>) {
        self.modules.push(module);
    }

    /// Get all modules in order.
    #[must_use]
    pub fn modules(&self) -> &[Module<B>] {
        &self.modules
    }

    /// Get a module by position.
    #[must_use]
    pub fn module(&self, index: usize) -> Option<&Module<B>> {
        self.modules.get(index)
    }

    /// Get the number of modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Check if the model has no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Get the modules tagged with `step`, in order.
    #[must_use]
    pub fn modules_at_step(&self, step: Step) -> Vec<&Module<B>> {
        self.modules.iter().filter(|m| m.step() == step).collect()
    }
}

impl<B> Default for Model<B> {
    fn default() -> Self {
        Self::new("Untitled Model")
    }
}
