/// Weight of the vehicle under uniform gravity, N (positive, acting down).
pub fn gravity_force(mass: f64, g: f64) -> f64 {
    mass * g
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn weight_scales_with_mass() {
        assert_relative_eq!(gravity_force(0.0548, 9.81), 0.537_588, epsilon = 1e-9);
        assert_eq!(gravity_force(0.0, 9.81), 0.0);
    }
}
