//! Module retrieval for fabrication models.
//!
//! A fabrication [`Model`] is split into [`Module`]s: groups of elements
//! (breps) assembled together, each tagged with a sub-sequence and a
//! [`Step`] in the global assembly order. This crate reads those modules
//! back out for display or downstream processing.
//!
//! # Brep Payload
//!
//! Breps are opaque to this crate. [`Model`] and [`Module`] are generic over
//! the brep type, and retrieval only hands out references to it, so any
//! geometry representation can be carried without copying.
//!
//! # Overview
//!
//! - [`get_modules`] - Select one module (wrapped index) or all modules
//! - [`ModuleSelection`] - `Single` or `Batch` result, chosen by the request
//! - [`AssemblyVector`] - Insertion direction or the `"gravity"` placeholder
//! - [`normalize_vectors`] - Resolve gravity to `(0, 0, -1)` and round
//! - [`Groups`] - One ordered group per module, for per-module display
//!
//! # Quick Start
//!
//! ```
//! use mesh_modules::{get_modules, AssemblyVector, Model, Module, ModuleSelection, RetrievalParams, Step};
//!
//! let mut model = Model::new("vault");
//! model.add_module(
//!     Module::new(vec!["plate_0", "plate_1"])
//!         .with_sequence("[0, 1]")
//!         .with_step(0_usize)
//!         .with_assembly_vector(AssemblyVector::Gravity),
//! );
//! model.add_module(
//!     Module::new(vec!["plate_2"])
//!         .with_sequence("[2]")
//!         .with_step(Step::Final)
//!         .with_assembly_vector([1.0, 2.0, 3.123_456_7]),
//! );
//!
//! let params = RetrievalParams::default();
//!
//! // All modules
//! let Some(ModuleSelection::Batch { steps, brep_groups, .. }) =
//!     get_modules(Some(&model), None, &params).unwrap()
//! else {
//!     unreachable!()
//! };
//! assert_eq!(steps, vec!["0", "M"]);
//! assert_eq!(brep_groups.len(), 2);
//!
//! // One module; ids wrap around the module count
//! let Some(ModuleSelection::Single { index, assembly_vectors, .. }) =
//!     get_modules(Some(&model), Some(3), &params).unwrap()
//! else {
//!     unreachable!()
//! };
//! assert_eq!(index, 1);
//! assert!((assembly_vectors[0].z - 3.123_457).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! - `serde` - Serialize/deserialize models, modules, steps and vectors

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

mod error;
mod groups;
mod model;
mod module;
mod params;
mod retrieve;
mod step;
mod vector;

pub use error::{ModuleError, ModuleResult};
pub use groups::{Groups, group_ragged};
pub use model::Model;
pub use module::Module;
pub use params::{RETRIEVAL_PRECISION, RetrievalParams};
pub use retrieve::{ModuleSelection, get_modules, wrap_index};
pub use step::{FINAL_STEP_TAG, Step};
pub use vector::{
    AssemblyVector, DEFAULT_ROUND_DECIMALS, GRAVITY_TOKEN, MAX_PRECISION, gravity,
    normalize_vector, normalize_vectors, round_to, round_vector,
};

// Re-export commonly used types for convenience
pub use nalgebra::Vector3;
