use crate::map::direction::Direction;
use crate::systems::collision::overlaps_any;
use crate::systems::components::{Body, Hitbox};

/// Tries to step `body` in `direction`, rolling back if the step ends inside a wall.
///
/// On success the body keeps the new position and `direction` becomes its committed direction.
/// On failure both the position and the previously committed direction are restored, so the
/// body carries on as if the request never happened. Requesting the current direction is
/// re-validated like any other request.
///
/// # Returns
///
/// `true` if the step was committed.
pub fn apply_direction(body: &mut Body, direction: Direction, walls: &[Hitbox]) -> bool {
    let previous_direction = body.direction;
    let previous_position = body.hitbox.position;

    body.direction = Some(direction);
    body.hitbox.position += body.velocity();

    if overlaps_any(&body.hitbox, walls) {
        body.hitbox.position = previous_position;
        body.direction = previous_direction;
        return false;
    }

    true
}

/// Pushes `body` one step back against its velocity if it currently overlaps a wall.
///
/// # Returns
///
/// `true` if a correction was applied.
pub fn push_out_of_walls(body: &mut Body, walls: &[Hitbox]) -> bool {
    if !overlaps_any(&body.hitbox, walls) {
        return false;
    }

    body.hitbox.position -= body.velocity();
    true
}
