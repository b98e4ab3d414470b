pub const M_EARTH: f64 = 5.972e24; // Mass of Earth (kg)
pub const R_EARTH: f64 = 6.371e6; // Radius of Earth (m)

// Location of the default values file, relative to the user's home directory
pub const DOCUMENTS_DIR: &str = "Documents";
pub const APP_DIR: &str = "TwoBodyProblem";
pub const PROFILE_DIR: &str = "default";
pub const VALUES_FILE: &str = "values.yml";

/// Number of entries in the positional form of the values.
pub const SEQUENCE_LEN: usize = 11;

/// Initial conditions used whenever a value is not given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub central_mass: f64,
    pub central_radius: f64,
    pub central_v0: [f64; 3],
    pub sat_mass: f64,
    pub sat_radius: f64,
    pub sat_v0: [f64; 3],
    pub distance: f64,
}

impl Defaults {
    /// Positional form, in the same order as `SimulationConfig::from_sequence`.
    pub const fn as_sequence(&self) -> [f64; SEQUENCE_LEN] {
        [
            self.central_mass,
            self.central_radius,
            self.central_v0[0],
            self.central_v0[1],
            self.central_v0[2],
            self.sat_mass,
            self.sat_radius,
            self.sat_v0[0],
            self.sat_v0[1],
            self.sat_v0[2],
            self.distance,
        ]
    }
}

pub const DEFAULTS: Defaults = Defaults {
    central_mass: M_EARTH,
    central_radius: R_EARTH,
    central_v0: [0.0, 0.0, 0.0],
    sat_mass: 500.0,             // kg
    sat_radius: 2.0,             // m
    sat_v0: [0.0, 0.0, -8000.0], // m/s
    distance: 1_000_000.0,       // m
};
