//! Axis-aligned bounding-box overlap.
//!
//! Both entities are read in world space: `position` is the top-left corner
//! and `size` the (width, height) extents.  Boxes that only touch along an
//! edge do not collide, and a box with zero or negative width or height never
//! collides with anything.  Whether the entities are active is the caller's
//! concern.

use crate::entities::Entity;

pub fn collides(a: &Entity, b: &Entity) -> bool {
    if is_degenerate(a) || is_degenerate(b) {
        return false;
    }
    let a_max = a.position + a.size;
    let b_max = b.position + b.size;
    a.position.x < b_max.x
        && b.position.x < a_max.x
        && a.position.y < b_max.y
        && b.position.y < a_max.y
}

fn is_degenerate(e: &Entity) -> bool {
    // `!(x > 0)` also catches NaN extents.
    !(e.size.x > 0.0 && e.size.y > 0.0)
}
