//! End-to-end retrieval scenarios.

use approx::assert_relative_eq;
use mesh_modules::{
    AssemblyVector, Model, Module, ModuleError, ModuleSelection, RetrievalParams, Step, Vector3,
    get_modules,
};

fn three_modules() -> Model<String> {
    let mut model = Model::new("three");
    for i in 0..3_usize {
        model.add_module(
            Module::new(vec![format!("brep_{i}_a"), format!("brep_{i}_b")])
                .with_sequence(format!("[{i}]"))
                .with_step(if i == 2 { Step::Final } else { Step::Index(i) }),
        );
    }
    model
}

#[test]
fn all_modules_produce_parallel_outputs() {
    let model = three_modules();
    let selection = get_modules(Some(&model), None, &RetrievalParams::default())
        .unwrap()
        .unwrap();

    let ModuleSelection::Batch {
        modules,
        sequences,
        steps,
        brep_groups,
        ..
    } = selection
    else {
        panic!("expected a batch selection");
    };

    assert_eq!(modules.len(), 3);
    assert_eq!(sequences.len(), 3);
    assert_eq!(steps.len(), 3);
    assert_eq!(brep_groups.len(), 3);

    for (i, module) in modules.iter().enumerate() {
        assert!(std::ptr::eq(*module, &model.modules()[i]));
        assert_eq!(sequences[i], format!("[{i}]"));
        assert_eq!(brep_groups.group(i).map(<[_]>::len), Some(2));
    }
    assert_eq!(steps, vec!["0", "1", "M"]);
}

#[test]
fn module_id_four_selects_index_one() {
    let model = three_modules();
    let selection = get_modules(Some(&model), Some(4), &RetrievalParams::default())
        .unwrap()
        .unwrap();

    let ModuleSelection::Single {
        index,
        sequence,
        breps,
        ..
    } = selection
    else {
        panic!("expected a single selection");
    };

    assert_eq!(index, 1);
    assert_eq!(sequence, "[1]");
    assert_eq!(breps, ["brep_1_a".to_string(), "brep_1_b".to_string()]);
}

#[test]
fn negative_module_id_selects_last() {
    let model = three_modules();
    let selection = get_modules(Some(&model), Some(-1), &RetrievalParams::default())
        .unwrap()
        .unwrap();

    assert!(matches!(
        selection,
        ModuleSelection::Single { index: 2, ref step, .. } if step == "M"
    ));
}

#[test]
fn gravity_and_rounding() {
    let model = Model::from_modules(
        "vectors",
        vec![Module::new(vec![0_u8]).with_assembly_vectors(vec![
            AssemblyVector::Gravity,
            AssemblyVector::new(1.0, 2.0, 3.123_456_7),
        ])],
    );
    let params = RetrievalParams::default();

    let Some(ModuleSelection::Single {
        assembly_vectors, ..
    }) = get_modules(Some(&model), Some(0), &params).unwrap()
    else {
        panic!("expected a single selection");
    };
    assert_relative_eq!(assembly_vectors[0], Vector3::new(0.0, 0.0, -1.0));
    assert_relative_eq!(assembly_vectors[1], Vector3::new(1.0, 2.0, 3.123_457), epsilon = 1e-12);

    let Some(ModuleSelection::Batch { vector_groups, .. }) =
        get_modules(Some(&model), None, &params).unwrap()
    else {
        panic!("expected a batch selection");
    };
    let group = vector_groups.group(0).unwrap();
    assert_relative_eq!(group[0], Vector3::new(0.0, 0.0, -1.0));
    assert_relative_eq!(group[1], Vector3::new(1.0, 2.0, 3.123_457), epsilon = 1e-12);
}

#[test]
fn empty_model_with_index_is_reported() {
    let model: Model<String> = Model::new("empty");
    let result = get_modules(Some(&model), Some(0), &RetrievalParams::default());

    assert_eq!(result, Err(ModuleError::EmptyModel));
}

#[test]
fn missing_model_is_silent() {
    let result = get_modules::<String>(None, Some(0), &RetrievalParams::default());
    assert_eq!(result, Ok(None));
}
