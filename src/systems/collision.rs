use crate::systems::components::Hitbox;

/// Returns true if two hitboxes overlap.
///
/// Overlap must be strict on both axes: rectangles that only share an edge do not collide.
pub fn overlaps(a: &Hitbox, b: &Hitbox) -> bool {
    let (a_max, b_max) = (a.max(), b.max());
    a.position.x < b_max.x && a_max.x > b.position.x && a.position.y < b_max.y && a_max.y > b.position.y
}

/// Returns true if `hitbox` overlaps any of `obstacles`.
pub fn overlaps_any<'a>(hitbox: &Hitbox, obstacles: impl IntoIterator<Item = &'a Hitbox>) -> bool {
    obstacles.into_iter().any(|obstacle| overlaps(hitbox, obstacle))
}
