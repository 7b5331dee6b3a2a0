/// Aerodynamic drag magnitude, N.
///
/// `Cd * A * v^2`, with the air density folded into the drag coefficient.
/// The result is never negative; the equations of motion subtract it on
/// every step whatever the direction of travel.
pub fn drag_force(velocity: f64, cd: f64, area: f64) -> f64 {
    cd * area * velocity * velocity
}
