//! Module retrieval.
//!
//! [`get_modules`] reads either one module or every module out of a model
//! and returns their fields ready for display: sequences and steps as
//! strings, assembly vectors with gravity resolved and components rounded.

// The module count always fits an i128 and the wrapped index is below it.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use nalgebra::Vector3;
use tracing::{debug, warn};

use crate::error::{ModuleError, ModuleResult};
use crate::groups::{Groups, group_ragged};
use crate::model::Model;
use crate::module::Module;
use crate::params::RetrievalParams;
use crate::vector::normalize_vectors;

/// Fields read out of a model.
///
/// The shape is decided by whether a module index was requested, never by
/// the data itself.
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleSelection<'a, B> {
    /// One module, selected by (wrapped) index.
    Single {
        /// Index the request resolved to.
        index: usize,
        /// The selected module.
        module: &'a Module<B>,
        /// Stringified sub-sequence.
        sequence: String,
        /// Stringified step tag.
        step: String,
        /// The module's breps.
        breps: &'a [B],
        /// Normalized assembly vectors.
        assembly_vectors: Vec<Vector3<f64>>,
    },
    /// Every module, as parallel lists in model order.
    Batch {
        /// All modules.
        modules: Vec<&'a Module<B>>,
        /// Stringified sub-sequences.
        sequences: Vec<String>,
        /// Stringified step tags.
        steps: Vec<String>,
        /// Breps, one group per module.
        brep_groups: Groups<&'a B>,
        /// Normalized assembly vectors, one group per module.
        vector_groups: Groups<Vector3<f64>>,
    },
}

impl<'a, B> ModuleSelection<'a, B> {
    /// Number of modules in the selection.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single { .. } => 1,
            Self::Batch { modules, .. } => modules.len(),
        }
    }

    /// Check if the selection holds no modules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if this is a batch selection.
    #[must_use]
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch { .. })
    }

    /// The selected modules, in order.
    #[must_use]
    pub fn modules(&self) -> Vec<&'a Module<B>> {
        match self {
            Self::Single { module, .. } => vec![*module],
            Self::Batch { modules, .. } => modules.clone(),
        }
    }
}

/// Reduce `module_id` into `0..count`.
///
/// Negative ids wrap from the end, so `-1` is the last module.
///
/// # Errors
///
/// Returns [`ModuleError::EmptyModel`] if `count` is zero.
///
/// # Example
///
/// ```
/// use mesh_modules::wrap_index;
///
/// assert_eq!(wrap_index(4, 3).unwrap(), 1);
/// assert_eq!(wrap_index(-1, 3).unwrap(), 2);
/// assert!(wrap_index(0, 0).is_err());
/// ```
pub fn wrap_index(module_id: i64, count: usize) -> ModuleResult<usize> {
    if count == 0 {
        return Err(ModuleError::EmptyModel);
    }
    Ok(i128::from(module_id).rem_euclid(count as i128) as usize)
}

/// Read modules out of a model.
///
/// - No model: `Ok(None)`.
/// - `module_id` given: [`ModuleSelection::Single`] for the module at
///   `module_id mod module_count`.
/// - `module_id` absent: [`ModuleSelection::Batch`] over all modules.
///
/// # Errors
///
/// - [`ModuleError::EmptyModel`] if an index is requested from a model
///   without modules
/// - [`ModuleError::MalformedVector`] if an assembly vector is not finite
/// - [`ModuleError::InvalidPrecision`] if `params` is invalid
///
/// # Example
///
/// ```
/// use mesh_modules::{get_modules, Model, Module, ModuleSelection, RetrievalParams};
///
/// let model = Model::from_modules(
///     "demo",
///     vec![Module::new(vec!["a"]), Module::new(vec!["b"]), Module::new(vec!["c"])],
/// );
///
/// let selection = get_modules(Some(&model), Some(4), &RetrievalParams::default())
///     .unwrap()
///     .unwrap();
///
/// match selection {
///     ModuleSelection::Single { index, breps, .. } => {
///         assert_eq!(index, 1);
///         assert_eq!(breps, &["b"]);
///     }
///     ModuleSelection::Batch { .. } => unreachable!(),
/// }
/// ```
pub fn get_modules<'a, B>(
    model: Option<&'a Model<B>>,
    module_id: Option<i64>,
    params: &RetrievalParams,
) -> ModuleResult<Option<ModuleSelection<'a, B>>> {
    params.validate()?;

    let Some(model) = model else {
        debug!("No model supplied, nothing to retrieve");
        return Ok(None);
    };

    let selection = match module_id {
        Some(id) => select_single(model, id, params)?,
        None => select_all(model, params)?,
    };

    Ok(Some(selection))
}

fn select_single<'a, B>(
    model: &'a Model<B>,
    module_id: i64,
    params: &RetrievalParams,
) -> ModuleResult<ModuleSelection<'a, B>> {
    let count = model.module_count();
    let index = wrap_index(module_id, count)?;

    if usize::try_from(module_id).ok() != Some(index) {
        warn!(
            requested = module_id,
            resolved = index,
            modules = count,
            "Module id wrapped around"
        );
    }

    let module = &model.modules()[index];
    let assembly_vectors = normalize_vectors(module.assembly_vectors(), params.precision)
        .map_err(|e| e.in_module(index))?;

    debug!(
        model = model.name(),
        index,
        breps = module.brep_count(),
        "Retrieved single module"
    );

    Ok(ModuleSelection::Single {
        index,
        module,
        sequence: module.sequence().to_string(),
        step: module.step().to_string(),
        breps: module.breps(),
        assembly_vectors,
    })
}

fn select_all<'a, B>(
    model: &'a Model<B>,
    params: &RetrievalParams,
) -> ModuleResult<ModuleSelection<'a, B>> {
    let all = model.modules();

    let vector_groups = all
        .iter()
        .enumerate()
        .map(|(i, m)| {
            normalize_vectors(m.assembly_vectors(), params.precision)
                .map_err(|e| e.in_module(i))
                .inspect_err(|e| {
                    warn!(module = i, error = %e, "Cannot normalize assembly vectors");
                })
        })
        .collect::<ModuleResult<Vec<_>>>()?;

    let selection = ModuleSelection::Batch {
        modules: all.iter().collect(),
        sequences: all.iter().map(|m| m.sequence().to_string()).collect(),
        steps: all.iter().map(|m| m.step().to_string()).collect(),
        brep_groups: group_ragged(all.iter().map(Module::breps)),
        vector_groups: Groups::from(vector_groups),
    };

    debug!(
        model = model.name(),
        modules = selection.len(),
        "Retrieved all modules"
    );

    Ok(selection)
}
