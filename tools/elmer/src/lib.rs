//! Elmer solver solution schemas.
//!
//! Value objects describing the numerical-solver parameter sets handed to an
//! external Elmer finite-element run. Each parameter set conforms to exactly
//! one schema, selected by its `tool` discriminator tag; construction
//! validates field names and types, and a finished set serializes to a flat
//! mapping consumed by the solver-configuration writer.
#![warn(missing_docs)]

pub mod error;

#[cfg(test)]
mod tests;

use arcstr::ArcStr;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// Mesh sizing for one material or `&`-joined interface key.
///
/// The key `global_max` is reserved for the global maximal element length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MeshSize {
    /// Maximal mesh element length inside the entity.
    Max(f64),
    /// Graded refinement: maximal element length at the entity, the
    /// expansion distance over which it stays constant, and the slope of the
    /// increase outside the entity.
    Graded(Vec<f64>),
}

/// Parameters shared by all Elmer solution types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolutionBase {
    /// Name of the solution; renamed to `solution_name` on export.
    pub name: ArcStr,
    /// Polynomial order of p-elements.
    pub p_element_order: u32,
    /// Stopping criterion in adaptive meshing.
    pub percent_error: f64,
    /// Maximum element error, relative to `percent_error`, allowed in
    /// individual elements.
    pub max_error_scale: f64,
    /// Maximum fraction of outliers from the total number of elements.
    pub max_outlier_fraction: f64,
    /// Maximum number of adaptive meshing iterations.
    pub maximum_passes: u32,
    /// Minimum number of adaptive meshing iterations.
    pub minimum_passes: u32,
    /// Simulate with axisymmetric coordinates along the y-axis at `x = 0`.
    pub is_axisymmetric: bool,
    /// If larger than 1, the mesh is refined by dividing each element into
    /// `2^dim` elements this many times.
    pub mesh_levels: u32,
    /// Maximal mesh element length per material or interface key.
    pub mesh_size: IndexMap<String, MeshSize>,
}

impl Default for SolutionBase {
    fn default() -> Self {
        Self {
            name: arcstr::literal!("solution"),
            p_element_order: 3,
            percent_error: 0.005,
            max_error_scale: 2.0,
            max_outlier_fraction: 1e-3,
            maximum_passes: 1,
            minimum_passes: 1,
            is_axisymmetric: false,
            mesh_levels: 1,
            mesh_size: IndexMap::new(),
        }
    }
}

/// Type of frequency sweep.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SweepType {
    /// Solve each requested frequency directly.
    #[default]
    Explicit,
    /// Interpolating sweep with rounds of fitting.
    Interpolating,
}

/// Linear system solution method.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinearSystemMethod {
    /// Stabilized biconjugate gradient.
    #[default]
    Bicgstab,
    /// Multigrid.
    Mg,
}

/// Potential boundary condition on one edge of the simulation box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCondition {
    /// Fixed potential on the edge.
    pub potential: f64,
}

/// Wave-equation (vector Helmholtz) solution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaveEquationSolution {
    /// Parameters shared by all solution types.
    #[serde(flatten)]
    pub base: SolutionBase,
    /// Frequencies in GHz. A scalar input is normalized to a one-element
    /// list; an interpolating sweep uses the full list.
    #[serde(deserialize_with = "scalar_or_list")]
    pub frequency: Vec<f64>,
    /// Number of frequencies calculated between each round of fitting in an
    /// interpolating sweep.
    pub frequency_batch: u32,
    /// Type of frequency sweep.
    pub sweep_type: SweepType,
    /// Convergence tolerance in an interpolating sweep.
    pub max_delta_s: f64,
    /// Allows supercurrent to flow on metal boundaries within a layer of
    /// this thickness.
    pub london_penetration_depth: f64,
    /// Use edge finite elements of second degree.
    pub quadratic_approximation: bool,
    /// Use Nedelec finite elements of second kind.
    pub second_kind_basis: bool,
    /// Use the A-V potential formulation instead of the electric field E.
    pub use_av: bool,
    /// Film conductivity on metal boundaries. Applies only with `use_av`.
    pub conductivity: f64,
    /// Use the nested iterative solver. Applies only with `use_av`.
    pub nested_iteration: bool,
    /// Convergence tolerance of the iterative solver. Applies only with
    /// `use_av`.
    pub convergence_tolerance: f64,
    /// Maximum iterations of the iterative solver. Applies only with
    /// `use_av`.
    pub max_iterations: u32,
}

impl WaveEquationSolution {
    /// The tool tag selecting this schema.
    pub const TOOL: &'static str = "wave_equation";
}

impl Default for WaveEquationSolution {
    fn default() -> Self {
        Self {
            base: SolutionBase::default(),
            frequency: vec![5.],
            frequency_batch: 3,
            sweep_type: SweepType::Explicit,
            max_delta_s: 0.01,
            london_penetration_depth: 0.,
            quadratic_approximation: false,
            second_kind_basis: false,
            use_av: false,
            conductivity: 0.,
            nested_iteration: false,
            convergence_tolerance: 1e-10,
            max_iterations: 2000,
        }
    }
}

/// Electrostatic capacitance solution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapacitanceSolution {
    /// Parameters shared by all solution types.
    #[serde(flatten)]
    pub base: SolutionBase,
    /// Linear system solution method.
    pub linear_system_method: LinearSystemMethod,
    /// Calculate energy integrals over each object, for EPR simulations.
    pub integrate_energies: bool,
}

impl CapacitanceSolution {
    /// The tool tag selecting this schema.
    pub const TOOL: &'static str = "capacitance";
}

impl Default for CapacitanceSolution {
    fn default() -> Self {
        Self {
            base: SolutionBase::default(),
            linear_system_method: LinearSystemMethod::Bicgstab,
            integrate_energies: false,
        }
    }
}

/// Cross-section solution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossSectionSolution {
    /// Parameters shared by all solution types.
    #[serde(flatten)]
    pub base: SolutionBase,
    /// Linear system solution method.
    pub linear_system_method: LinearSystemMethod,
    /// Calculate energy integrals over each object, for EPR simulations.
    pub integrate_energies: bool,
    /// Potential boundary conditions on the edges of the simulation box,
    /// keyed by `xmin`, `xmax`, `ymin`, or `ymax`.
    pub boundary_conditions: IndexMap<String, BoundaryCondition>,
}

impl CrossSectionSolution {
    /// The tool tag selecting this schema.
    pub const TOOL: &'static str = "cross-section";
}

impl Default for CrossSectionSolution {
    fn default() -> Self {
        Self {
            base: SolutionBase::default(),
            linear_system_method: LinearSystemMethod::Bicgstab,
            integrate_energies: false,
            boundary_conditions: IndexMap::new(),
        }
    }
}

/// An Elmer solution parameter set.
///
/// One variant per registered schema, discriminated by the `tool` tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool")]
pub enum ElmerSolution {
    /// Wave-equation solution parameters.
    #[serde(rename = "wave_equation")]
    WaveEquation(WaveEquationSolution),
    /// Capacitance solution parameters.
    #[serde(rename = "capacitance")]
    Capacitance(CapacitanceSolution),
    /// Cross-section solution parameters.
    #[serde(rename = "cross-section")]
    CrossSection(CrossSectionSolution),
}

impl ElmerSolution {
    /// The tool tag identifying this solution's schema.
    pub fn tool(&self) -> &'static str {
        match self {
            Self::WaveEquation(_) => WaveEquationSolution::TOOL,
            Self::Capacitance(_) => CapacitanceSolution::TOOL,
            Self::CrossSection(_) => CrossSectionSolution::TOOL,
        }
    }

    /// Returns the solution with the given tool tag and default parameters.
    ///
    /// Fails with [`Error::UnknownTool`] when no registered schema matches.
    pub fn from_tool(tool: &str) -> Result<Self> {
        Self::from_params(tool, Map::new())
    }

    /// Constructs and validates a solution of the schema selected by `tool`.
    ///
    /// Parameter names must be declared by the selected schema and values
    /// must have the declared types; fields left out take their defaults.
    /// Fails with [`Error::UnknownTool`] when no registered schema matches —
    /// never by silently defaulting.
    pub fn from_params(tool: &str, params: Map<String, Value>) -> Result<Self> {
        tracing::debug!(%tool, "selecting Elmer solution schema");
        let solution = match tool {
            WaveEquationSolution::TOOL => {
                check_fields::<WaveEquationSolution>(tool, &params)?;
                Self::WaveEquation(serde_json::from_value(Value::Object(params))?)
            }
            CapacitanceSolution::TOOL => {
                check_fields::<CapacitanceSolution>(tool, &params)?;
                Self::Capacitance(serde_json::from_value(Value::Object(params))?)
            }
            CrossSectionSolution::TOOL => {
                check_fields::<CrossSectionSolution>(tool, &params)?;
                Self::CrossSection(serde_json::from_value(Value::Object(params))?)
            }
            _ => return Err(Error::UnknownTool(tool.into())),
        };
        Ok(solution)
    }

    /// Returns the solution data in flat mapping form.
    ///
    /// The mapping carries every parameter of the schema plus the `tool`
    /// discriminator, with the reserved `name` field renamed to
    /// `solution_name`, ready for the solver-configuration writer.
    pub fn solution_data(&self) -> Result<Map<String, Value>> {
        let value = match self {
            Self::WaveEquation(s) => serde_json::to_value(s)?,
            Self::Capacitance(s) => serde_json::to_value(s)?,
            Self::CrossSection(s) => serde_json::to_value(s)?,
        };
        let Value::Object(mut map) = value else {
            panic!("solution schemas serialize to objects");
        };
        if let Some(name) = map.remove("name") {
            map.insert("solution_name".into(), name);
        }
        map.insert("tool".into(), Value::String(self.tool().into()));
        Ok(map)
    }
}

/// Rejects parameter names not declared by schema `T`.
fn check_fields<T: Serialize + Default>(tool: &str, params: &Map<String, Value>) -> Result<()> {
    let template = serde_json::to_value(T::default())?;
    let known = template
        .as_object()
        .expect("solution schemas serialize to objects");
    if let Some(field) = params.keys().find(|k| !known.contains_key(k.as_str())) {
        return Err(Error::UnknownField {
            tool: tool.into(),
            field: field.clone(),
        });
    }
    Ok(())
}

/// Deserializes either a bare scalar or a list of scalars into a list.
fn scalar_or_list<'de, D>(deserializer: D) -> std::result::Result<Vec<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ScalarOrList {
        Scalar(f64),
        List(Vec<f64>),
    }

    Ok(match ScalarOrList::deserialize(deserializer)? {
        ScalarOrList::Scalar(value) => vec![value],
        ScalarOrList::List(values) => values,
    })
}
