use crate::config::errors::{ValuesError, ValuesResult};
use nalgebra as na;

/// One of the two bodies of the simulation.
///
/// Fields are private so every assignment goes through validation:
/// the mass must not be zero and the radius must be positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    mass: f64,
    radius: f64,
    velocity: na::Vector3<f64>,
}

impl Body {
    pub fn new(mass: f64, radius: f64, velocity: na::Vector3<f64>) -> ValuesResult<Self> {
        Ok(Body {
            mass: check_mass(mass)?,
            radius: check_radius(radius)?,
            velocity,
        })
    }

    /// A body at rest.
    pub fn at_rest(mass: f64, radius: f64) -> ValuesResult<Self> {
        Self::new(mass, radius, na::Vector3::zeros())
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn velocity(&self) -> &na::Vector3<f64> {
        &self.velocity
    }

    /// Leaves the current mass untouched when `mass` is rejected.
    pub fn set_mass(&mut self, mass: f64) -> ValuesResult<()> {
        self.mass = check_mass(mass)?;
        Ok(())
    }

    /// Leaves the current radius untouched when `radius` is rejected.
    pub fn set_radius(&mut self, radius: f64) -> ValuesResult<()> {
        self.radius = check_radius(radius)?;
        Ok(())
    }

    pub fn set_velocity(&mut self, velocity: na::Vector3<f64>) {
        self.velocity = velocity;
    }
}

// Negative masses pass; only zero is rejected.
fn check_mass(mass: f64) -> ValuesResult<f64> {
    if mass == 0.0 {
        return Err(ValuesError::OutOfRange {
            field: "mass",
            requirement: "must not be 0 (zero)",
        });
    }
    Ok(mass)
}

fn check_radius(radius: f64) -> ValuesResult<f64> {
    if radius <= 0.0 {
        return Err(ValuesError::OutOfRange {
            field: "radius",
            requirement: "must be positive",
        });
    }
    Ok(radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use test_case::test_case;

    #[test_case(0.0, 1.0; "zero mass")]
    #[test_case(-0.0, 1.0; "negative zero mass")]
    #[test_case(1.0, 0.0; "zero radius")]
    #[test_case(1.0, -1.0; "negative radius")]
    fn test_rejects_out_of_range(mass: f64, radius: f64) {
        let result = Body::at_rest(mass, radius);
        assert!(matches!(result, Err(ValuesError::OutOfRange { .. })));
    }

    #[test_case(5.972e24, 6.371e6; "earth")]
    #[test_case(-500.0, 2.0; "negative mass is accepted")]
    #[test_case(1e-30, 1e-30; "tiny values")]
    fn test_accepts_valid(mass: f64, radius: f64) {
        let body = Body::at_rest(mass, radius).unwrap();
        assert_eq!(body.mass(), mass);
        assert_eq!(body.radius(), radius);
        assert_abs_diff_eq!(*body.velocity(), na::Vector3::zeros());
    }

    #[test]
    fn test_failed_mass_update_keeps_previous_value() {
        let mut body = Body::at_rest(500.0, 2.0).unwrap();
        let err = body.set_mass(0.0).unwrap_err();
        assert!(matches!(err, ValuesError::OutOfRange { field: "mass", .. }));
        assert_eq!(body.mass(), 500.0);
    }

    #[test]
    fn test_failed_radius_update_keeps_previous_value() {
        let mut body = Body::at_rest(500.0, 2.0).unwrap();
        assert!(body.set_radius(-3.0).is_err());
        assert_eq!(body.radius(), 2.0);

        body.set_radius(3.0).unwrap();
        assert_eq!(body.radius(), 3.0);
    }

    #[test]
    fn test_set_velocity() {
        let mut body = Body::at_rest(500.0, 2.0).unwrap();
        body.set_velocity(na::Vector3::new(1.0, 2.0, 3.0));
        assert_abs_diff_eq!(*body.velocity(), na::Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_error_messages() {
        let err = Body::at_rest(0.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "mass must not be 0 (zero)");
        let err = Body::at_rest(1.0, 0.0).unwrap_err();
        assert_eq!(err.to_string(), "radius must be positive");
    }
}
