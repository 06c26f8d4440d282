use crate::coordinates::CartesianCoordinate;
use crate::curves::{EllipticalCurve, LinearCurve};
use crate::numerics::{is_zero_sign, resolve_tolerance};

/// Returns the intersection points of an infinite line and an ellipse.
///
/// The line is mapped into the ellipse's local frame, where substituting
/// its parametric form into `(x/a)^2 + (y/b)^2 = 1` leaves one quadratic
/// in the line parameter. A discriminant inside the tolerance band counts
/// as tangency and yields a single point; a negative one yields none.
#[must_use]
pub fn intersection_coordinates(
    line: &LinearCurve,
    ellipse: &EllipticalCurve,
) -> Vec<CartesianCoordinate> {
    let tolerance = resolve_tolerance(line.tolerance(), ellipse.tolerance(), None);
    let origin = ellipse.local_origin();
    let section = ellipse.section();
    let local_i = section.to_local(&origin, &line.i());
    let local_j = section.to_local(&origin, &line.j());

    let a = ellipse.a();
    let b = ellipse.b();
    let dx = local_j.x() - local_i.x();
    let dy = local_j.y() - local_i.y();

    let quad_a = (dx / a).powi(2) + (dy / b).powi(2);
    let quad_b = 2.0 * (local_i.x() * dx / (a * a) + local_i.y() * dy / (b * b));
    let quad_c = (local_i.x() / a).powi(2) + (local_i.y() / b).powi(2) - 1.0;

    if is_zero_sign(quad_a, tolerance) {
        // Degenerate line (coincident control points) never intersects.
        return Vec::new();
    }

    let discriminant = quad_b * quad_b - 4.0 * quad_a * quad_c;
    let roots: Vec<f64> = if is_zero_sign(discriminant, tolerance) {
        vec![-quad_b / (2.0 * quad_a)]
    } else if discriminant < 0.0 {
        Vec::new()
    } else {
        let sqrt = discriminant.sqrt();
        vec![
            (-quad_b - sqrt) / (2.0 * quad_a),
            (-quad_b + sqrt) / (2.0 * quad_a),
        ]
    };

    roots
        .into_iter()
        .map(|t| {
            let local = CartesianCoordinate::with_tolerance(
                local_i.x() + t * dx,
                local_i.y() + t * dy,
                tolerance,
            );
            from_local(ellipse, &local)
        })
        .collect()
}

/// Maps a local-frame coordinate back to the world frame, inverting
/// [`crate::curves::ConicSection::to_local`].
fn from_local(ellipse: &EllipticalCurve, local: &CartesianCoordinate) -> CartesianCoordinate {
    let origin = ellipse.local_origin();
    let translated = CartesianCoordinate::with_tolerance(
        local.x() + origin.x(),
        local.y() + origin.y(),
        local.tolerance(),
    );
    translated.rotated_about(&origin, &ellipse.section().rotation())
}
