//! Predicates over triangle side lengths.

/// Return true if the three side lengths could form a triangle.
///
/// The triangle inequality must hold strictly for every pairing of sides;
/// a degenerate triple where one side equals the sum of the other two is
/// not a triangle.
pub fn is_triangle(side_a: f64, side_b: f64, side_c: f64) -> bool {
    side_a + side_b > side_c && side_a + side_c > side_b && side_b + side_c > side_a
}

/// Return true if the side lengths form an isoceles triangle.
///
/// The lengths must form a triangle at all; a degenerate triple with two
/// equal sides is still rejected. At least two sides must be exactly equal
/// (no epsilon tolerance), and an equilateral triangle counts as isoceles.
pub fn is_isoceles(side_a: f64, side_b: f64, side_c: f64) -> bool {
    is_triangle(side_a, side_b, side_c)
        && (side_a == side_b || side_a == side_c || side_b == side_c)
}
