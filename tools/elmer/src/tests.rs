use serde_json::{json, Map, Value};

use crate::error::Error;
use crate::{
    CapacitanceSolution, CrossSectionSolution, ElmerSolution, LinearSystemMethod, MeshSize,
    SweepType, WaveEquationSolution,
};

fn params(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        _ => panic!("expected a JSON object"),
    }
}

#[test]
fn every_registered_tool_tag_selects_its_schema() {
    for tool in [
        WaveEquationSolution::TOOL,
        CapacitanceSolution::TOOL,
        CrossSectionSolution::TOOL,
    ] {
        let solution = ElmerSolution::from_tool(tool).unwrap();
        assert_eq!(solution.tool(), tool);
    }
}

#[test]
fn unregistered_tool_tag_is_rejected() {
    let err = ElmerSolution::from_tool("eigenmode").unwrap_err();
    assert!(matches!(err, Error::UnknownTool(tool) if tool == "eigenmode"));
}

#[test]
fn scalar_frequency_is_normalized_to_a_list() {
    let solution = ElmerSolution::from_params(
        WaveEquationSolution::TOOL,
        params(json!({ "frequency": 6.5 })),
    )
    .unwrap();
    let ElmerSolution::WaveEquation(wave) = solution else {
        panic!("wrong variant");
    };
    assert_eq!(wave.frequency, vec![6.5]);
}

#[test]
fn frequency_lists_pass_through() {
    let solution = ElmerSolution::from_params(
        WaveEquationSolution::TOOL,
        params(json!({ "frequency": [4.0, 5.0, 6.0], "sweep_type": "interpolating" })),
    )
    .unwrap();
    let ElmerSolution::WaveEquation(wave) = solution else {
        panic!("wrong variant");
    };
    assert_eq!(wave.frequency, vec![4.0, 5.0, 6.0]);
    assert_eq!(wave.sweep_type, SweepType::Interpolating);
}

#[test]
fn defaults_match_the_documented_values() {
    let wave = WaveEquationSolution::default();
    assert_eq!(wave.base.p_element_order, 3);
    assert_eq!(wave.base.percent_error, 0.005);
    assert_eq!(wave.base.max_error_scale, 2.0);
    assert_eq!(wave.base.maximum_passes, 1);
    assert_eq!(wave.frequency, vec![5.]);
    assert_eq!(wave.frequency_batch, 3);
    assert_eq!(wave.sweep_type, SweepType::Explicit);
    assert_eq!(wave.max_delta_s, 0.01);
    assert_eq!(wave.max_iterations, 2000);

    let cap = CapacitanceSolution::default();
    assert_eq!(cap.linear_system_method, LinearSystemMethod::Bicgstab);
    assert!(!cap.integrate_energies);
}

#[test]
fn unknown_parameter_names_are_rejected() {
    let err = ElmerSolution::from_params(
        CapacitanceSolution::TOOL,
        params(json!({ "linear_system_methd": "mg" })),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::UnknownField { field, .. } if field == "linear_system_methd"
    ));
}

#[test]
fn mistyped_parameter_values_are_rejected() {
    let err = ElmerSolution::from_params(
        WaveEquationSolution::TOOL,
        params(json!({ "max_iterations": "many" })),
    )
    .unwrap_err();
    assert!(matches!(err, Error::InvalidParams(_)));
}

#[test]
fn mesh_size_accepts_scalars_and_graded_terms() {
    let solution = ElmerSolution::from_params(
        CapacitanceSolution::TOOL,
        params(json!({
            "mesh_size": {
                "substrate": 10.0,
                "substrate&vacuum": [2.0, 5.0],
                "global_max": 100.0,
            }
        })),
    )
    .unwrap();
    let ElmerSolution::Capacitance(cap) = solution else {
        panic!("wrong variant");
    };
    assert_eq!(cap.base.mesh_size["substrate"], MeshSize::Max(10.0));
    assert_eq!(
        cap.base.mesh_size["substrate&vacuum"],
        MeshSize::Graded(vec![2.0, 5.0])
    );
}

#[test]
fn boundary_conditions_parse_per_edge() {
    let solution = ElmerSolution::from_params(
        CrossSectionSolution::TOOL,
        params(json!({
            "boundary_conditions": { "xmin": { "potential": 0.0 } }
        })),
    )
    .unwrap();
    let ElmerSolution::CrossSection(xsection) = solution else {
        panic!("wrong variant");
    };
    assert_eq!(xsection.boundary_conditions["xmin"].potential, 0.0);
}

#[test]
fn solution_data_renames_the_reserved_name_field() {
    let solution = ElmerSolution::from_params(
        CapacitanceSolution::TOOL,
        params(json!({ "name": "cap_sweep", "integrate_energies": true })),
    )
    .unwrap();
    let data = solution.solution_data().unwrap();

    assert_eq!(data["tool"], json!("capacitance"));
    assert_eq!(data["solution_name"], json!("cap_sweep"));
    assert!(!data.contains_key("name"));
    assert_eq!(data["integrate_energies"], json!(true));
    assert_eq!(data["p_element_order"], json!(3));
}

#[test]
fn tagged_serialization_round_trips() {
    let solution = ElmerSolution::from_params(
        WaveEquationSolution::TOOL,
        params(json!({ "frequency": [1.0, 2.0], "use_av": true })),
    )
    .unwrap();
    let value = serde_json::to_value(&solution).unwrap();
    assert_eq!(value["tool"], json!("wave_equation"));
    let back: ElmerSolution = serde_json::from_value(value).unwrap();
    assert_eq!(back, solution);
}
