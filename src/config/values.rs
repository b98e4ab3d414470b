//! Initial values of a two-body simulation.
//!
//! [`SimulationConfig`] holds the central body, the satellite and their
//! initial distance. It can be built from explicit values, from a YAML
//! mapping, from the 11-entry positional form, from a file (see
//! [`super::storage`]) or interactively (see [`super::prompt`]).
//!
//! The mapping form, also used for the persisted file:
//!
//! ```yaml
//! central_mass: 5.972e+24
//! central_radius: 6371000.0
//! central_v0: {x: 0.0, y: 0.0, z: 0.0}
//! sat_mass: 500.0
//! sat_radius: 2.0
//! sat_v0: {x: 0.0, y: 0.0, z: -8000.0}
//! distance: 1000000.0
//! ```

use super::errors::{ValuesError, ValuesResult};
use crate::constants::{DEFAULTS, SEQUENCE_LEN};
use crate::models::Body;
use nalgebra as na;
use serde_yaml::{Mapping, Value};
use std::fmt;

pub const CENTRAL_MASS: &str = "central_mass";
pub const CENTRAL_RADIUS: &str = "central_radius";
pub const CENTRAL_V0: &str = "central_v0";
pub const SAT_MASS: &str = "sat_mass";
pub const SAT_RADIUS: &str = "sat_radius";
pub const SAT_V0: &str = "sat_v0";
pub const DISTANCE: &str = "distance";

const AXES: [&str; 3] = ["x", "y", "z"];

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    central: Body,
    satellite: Body,
    distance: f64,
}

impl SimulationConfig {
    pub fn new(central: Body, satellite: Body, distance: f64) -> Self {
        SimulationConfig {
            central,
            satellite,
            distance,
        }
    }

    pub fn from_explicit_values(
        central_mass: f64,
        central_radius: f64,
        central_v0: na::Vector3<f64>,
        sat_mass: f64,
        sat_radius: f64,
        sat_v0: na::Vector3<f64>,
        distance: f64,
    ) -> ValuesResult<Self> {
        let central = Body::new(central_mass, central_radius, central_v0)?;
        let satellite = Body::new(sat_mass, sat_radius, sat_v0)?;
        Ok(Self::new(central, satellite, distance))
    }

    /// Builds from the positional form
    /// `[central mass, central radius, central vx, vy, vz, sat mass, sat radius, sat vx, vy, vz, distance]`.
    pub fn from_array(values: [f64; SEQUENCE_LEN]) -> ValuesResult<Self> {
        Self::from_explicit_values(
            values[0],
            values[1],
            na::Vector3::new(values[2], values[3], values[4]),
            values[5],
            values[6],
            na::Vector3::new(values[7], values[8], values[9]),
            values[10],
        )
    }

    /// Same as [`Self::from_array`] for untyped values. Entries past the
    /// eleventh are ignored.
    pub fn from_sequence(values: &[Value]) -> ValuesResult<Self> {
        if values.len() < SEQUENCE_LEN {
            return Err(ValuesError::SequenceLength {
                expected: SEQUENCE_LEN,
                found: values.len(),
            });
        }

        let mut numbers = [0.0; SEQUENCE_LEN];
        for (index, (slot, value)) in numbers.iter_mut().zip(values).enumerate() {
            *slot = number(value, &format!("values[{}]", index))?;
        }
        Self::from_array(numbers)
    }

    pub fn from_mapping(map: &Mapping) -> ValuesResult<Self> {
        Self::from_explicit_values(
            number(require(map, CENTRAL_MASS, "")?, CENTRAL_MASS)?,
            number(require(map, CENTRAL_RADIUS, "")?, CENTRAL_RADIUS)?,
            vector(require(map, CENTRAL_V0, "")?, CENTRAL_V0)?,
            number(require(map, SAT_MASS, "")?, SAT_MASS)?,
            number(require(map, SAT_RADIUS, "")?, SAT_RADIUS)?,
            vector(require(map, SAT_V0, "")?, SAT_V0)?,
            number(require(map, DISTANCE, "")?, DISTANCE)?,
        )
    }

    /// Accepts any YAML document; only a mapping is valid.
    pub fn from_value(value: &Value) -> ValuesResult<Self> {
        match value {
            Value::Mapping(map) => Self::from_mapping(map),
            _ => Err(ValuesError::InvalidType {
                field: "values".to_string(),
                expected: "a mapping",
            }),
        }
    }

    pub fn from_yaml_str(text: &str) -> ValuesResult<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(&value)
    }

    pub fn to_mapping(&self) -> Mapping {
        let mut map = Mapping::new();
        map.insert(CENTRAL_MASS.into(), self.central.mass().into());
        map.insert(CENTRAL_RADIUS.into(), self.central.radius().into());
        map.insert(CENTRAL_V0.into(), vector_mapping(self.central.velocity()));
        map.insert(SAT_MASS.into(), self.satellite.mass().into());
        map.insert(SAT_RADIUS.into(), self.satellite.radius().into());
        map.insert(SAT_V0.into(), vector_mapping(self.satellite.velocity()));
        map.insert(DISTANCE.into(), self.distance.into());
        map
    }

    pub fn to_sequence(&self) -> [f64; SEQUENCE_LEN] {
        let c = self.central.velocity();
        let s = self.satellite.velocity();
        [
            self.central.mass(),
            self.central.radius(),
            c.x,
            c.y,
            c.z,
            self.satellite.mass(),
            self.satellite.radius(),
            s.x,
            s.y,
            s.z,
            self.distance,
        ]
    }

    /// YAML text of [`Self::to_mapping`], as written by `save`.
    pub fn to_yaml_string(&self) -> ValuesResult<String> {
        Ok(serde_yaml::to_string(&self.to_mapping())?)
    }

    pub fn central(&self) -> &Body {
        &self.central
    }

    pub fn central_mut(&mut self) -> &mut Body {
        &mut self.central
    }

    pub fn satellite(&self) -> &Body {
        &self.satellite
    }

    pub fn satellite_mut(&mut self) -> &mut Body {
        &mut self.satellite
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    // No sign check: a negative distance is kept as given.
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = distance;
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let d = DEFAULTS;
        SimulationConfig {
            central: Body::new(d.central_mass, d.central_radius, d.central_v0.into())
                .expect("Default central body should be valid"),
            satellite: Body::new(d.sat_mass, d.sat_radius, d.sat_v0.into())
                .expect("Default satellite should be valid"),
            distance: d.distance,
        }
    }
}

impl fmt::Display for SimulationConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "central body:")?;
        write_body(f, &self.central)?;
        writeln!(f, "satellite / second body:")?;
        write_body(f, &self.satellite)?;
        write!(f, "initial distance: {} m", self.distance)
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, body: &Body) -> fmt::Result {
    let v = body.velocity();
    writeln!(f, "\tmass: {:e} kg", body.mass())?;
    writeln!(f, "\tradius: {} m", body.radius())?;
    writeln!(f, "\tstarting velocity: ({}, {}, {}) m/s", v.x, v.y, v.z)
}

fn require<'a>(map: &'a Mapping, key: &str, parent: &str) -> ValuesResult<&'a Value> {
    map.get(key).ok_or_else(|| {
        if parent.is_empty() {
            ValuesError::MissingKey(key.to_string())
        } else {
            ValuesError::MissingKey(format!("{}.{}", parent, key))
        }
    })
}

fn number(value: &Value, field: &str) -> ValuesResult<f64> {
    match value {
        Value::Number(n) => n.as_f64().ok_or_else(|| ValuesError::not_a_number(field)),
        _ => Err(ValuesError::not_a_number(field)),
    }
}

fn vector(value: &Value, field: &str) -> ValuesResult<na::Vector3<f64>> {
    let map = value
        .as_mapping()
        .ok_or_else(|| ValuesError::not_a_vector(field))?;

    let mut components = [0.0; 3];
    for (slot, axis) in components.iter_mut().zip(AXES) {
        let component = require(map, axis, field)?;
        *slot = number(component, &format!("{}.{}", field, axis))?;
    }
    Ok(components.into())
}

fn vector_mapping(v: &na::Vector3<f64>) -> Value {
    let mut map = Mapping::new();
    for (axis, component) in AXES.iter().zip(v.iter()) {
        map.insert((*axis).into(), (*component).into());
    }
    Value::Mapping(map)
}
