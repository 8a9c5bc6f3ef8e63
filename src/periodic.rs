//! Periodic boundary handling for the square simulation box.
//!
//! Coordinates live in `[0, L)` on each axis; pair displacements follow
//! the minimum-image convention so every particle interacts with the
//! nearest periodic replica of its partner.

use ultraviolet::DVec2;

/// Map a single coordinate into `[0, L)`, wrapping negative values
/// toward zero rather than truncating.
pub fn wrap_coord(x: f64, box_length: f64) -> f64 {
    let wrapped = x.rem_euclid(box_length);
    // rem_euclid can round up to exactly L for tiny negative inputs.
    if wrapped == box_length {
        0.0
    } else {
        wrapped
    }
}

/// Wrap both components of a position into the box.
pub fn wrap(pos: DVec2, box_length: f64) -> DVec2 {
    DVec2::new(wrap_coord(pos.x, box_length), wrap_coord(pos.y, box_length))
}

/// Minimum-image displacement `a - b`, with each component reduced into
/// `[-L/2, L/2]`.
pub fn min_image(a: DVec2, b: DVec2, box_length: f64) -> DVec2 {
    let d = a - b;
    DVec2::new(
        d.x - box_length * (d.x / box_length).round(),
        d.y - box_length * (d.y / box_length).round(),
    )
}
