//! Immutable snapshots of streams and unit operations.
//!
//! Snapshots are plain owned values: handing one to a plugin cannot leak a
//! path back into the live flowsheet. Values are stored as raw SI floats
//! with unit-suffixed names; typed accessors rebuild uom quantities on
//! demand.

use serde::{Deserialize, Serialize};

use fb_core::units::{kgps, k as kelvin, pa, MassRate, Pressure, Temperature};
use fb_core::{Identification, Identified};

/// A single named parameter on a stream or unit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedParameter {
    pub name: String,
    pub value: ParameterValue,
}

impl NamedParameter {
    pub fn real(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value: ParameterValue::Real(value),
        }
    }

    pub fn integer(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value: ParameterValue::Integer(value),
        }
    }

    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParameterValue::Text(value.into()),
        }
    }
}

/// Parameter payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ParameterValue {
    Real(f64),
    Integer(i64),
    Text(String),
    Boolean(bool),
}

/// Thermodynamic state carried by a material stream.
///
/// Fields are optional: a host may not have every quantity for every
/// stream (an unsolved flowsheet usually doesn't).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MaterialState {
    pub p_pa: Option<f64>,
    pub t_k: Option<f64>,
    pub mdot_kg_s: Option<f64>,
    pub h_j_per_kg: Option<f64>,
}

impl MaterialState {
    pub fn pressure(&self) -> Option<Pressure> {
        self.p_pa.map(pa)
    }

    pub fn temperature(&self) -> Option<Temperature> {
        self.t_k.map(kelvin)
    }

    pub fn mass_flow(&self) -> Option<MassRate> {
        self.mdot_kg_s.map(kgps)
    }
}

/// Capability payload distinguishing stream classes.
///
/// The split is runtime-queryable rather than a compile-time type split
/// because the concrete stream implementation comes from an external
/// collaborator: a monitoring plugin asks each snapshot what it carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum StreamKind {
    /// Material stream with a thermodynamic state.
    Material { state: MaterialState },
    /// Energy/information stream with an ordered parameter list.
    Signal { parameters: Vec<NamedParameter> },
}

/// Read-only snapshot of one stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamSnapshot {
    pub identification: Identification,
    pub kind: StreamKind,
}

impl StreamSnapshot {
    pub fn material(identification: Identification, state: MaterialState) -> Self {
        Self {
            identification,
            kind: StreamKind::Material { state },
        }
    }

    pub fn signal(identification: Identification, parameters: Vec<NamedParameter>) -> Self {
        Self {
            identification,
            kind: StreamKind::Signal { parameters },
        }
    }

    pub fn is_material(&self) -> bool {
        matches!(self.kind, StreamKind::Material { .. })
    }

    /// Material-state capability probe; `None` for signal streams.
    pub fn material_state(&self) -> Option<&MaterialState> {
        match &self.kind {
            StreamKind::Material { state } => Some(state),
            StreamKind::Signal { .. } => None,
        }
    }

    /// Parameter-list capability probe; `None` for material streams.
    pub fn parameters(&self) -> Option<&[NamedParameter]> {
        match &self.kind {
            StreamKind::Material { .. } => None,
            StreamKind::Signal { parameters } => Some(parameters),
        }
    }
}

impl Identified for StreamSnapshot {
    fn identification(&self) -> &Identification {
        &self.identification
    }
}

/// Read-only snapshot of one unit operation.
///
/// `parameters` is `None` when the unit op exposes no parameter-access
/// capability, which is different from an empty parameter list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitOperationSnapshot {
    pub identification: Identification,
    pub parameters: Option<Vec<NamedParameter>>,
}

impl UnitOperationSnapshot {
    pub fn new(identification: Identification, parameters: Option<Vec<NamedParameter>>) -> Self {
        Self {
            identification,
            parameters,
        }
    }

    /// Parameter-access capability probe.
    pub fn parameters(&self) -> Option<&[NamedParameter]> {
        self.parameters.as_deref()
    }
}

impl Identified for UnitOperationSnapshot {
    fn identification(&self) -> &Identification {
        &self.identification
    }
}
