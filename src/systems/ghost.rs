use bevy_ecs::entity::Entity;
use bevy_ecs::query::With;
use bevy_ecs::system::{Query, ResMut};
use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::trace;

use crate::map::direction::Direction;
use crate::systems::components::{Body, GameRng, Ghost, Hitbox, Wall};
use crate::systems::movement::apply_direction;

/// Picks one of the four directions uniformly at random.
pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> Direction {
    *Direction::DIRECTIONS
        .choose(rng)
        .expect("direction list is never empty")
}

/// Advances a ghost by one step.
///
/// A ghost keeps going in its committed direction until a wall blocks it; only then does it
/// pick a new direction at random, with a single attempt per tick. A ghost boxed in on every
/// side simply stays put. Ghosts never look at the player.
///
/// # Returns
///
/// `true` if the ghost moved this tick.
pub fn advance_ghost<R: Rng + ?Sized>(body: &mut Body, walls: &[Hitbox], rng: &mut R) -> bool {
    if let Some(direction) = body.direction {
        if apply_direction(body, direction, walls) {
            return true;
        }
    }

    apply_direction(body, random_direction(rng), walls)
}

/// Gives every ghost an independent random starting direction.
///
/// Runs once at the start of each session, before the first tick.
pub fn ghost_spawn_system(
    walls: Query<&Hitbox, With<Wall>>,
    mut ghosts: Query<(Entity, &Ghost, &mut Body)>,
    mut rng: ResMut<GameRng>,
) {
    let walls: Vec<Hitbox> = walls.iter().copied().collect();

    for (entity, ghost, mut body) in ghosts.iter_mut() {
        let direction = random_direction(&mut rng.0);
        let committed = apply_direction(&mut body, direction, &walls);
        trace!(?entity, ghost = ghost.as_ref(), direction = direction.as_ref(), committed, "Ghost released");
    }
}

/// Autonomous ghost movement: continue straight, reroute at random when blocked.
pub fn ghost_movement_system(
    walls: Query<&Hitbox, With<Wall>>,
    mut ghosts: Query<(Entity, &Ghost, &mut Body)>,
    mut rng: ResMut<GameRng>,
) {
    let walls: Vec<Hitbox> = walls.iter().copied().collect();

    for (entity, ghost, mut body) in ghosts.iter_mut() {
        let before = body.direction;
        let moved = advance_ghost(&mut body, &walls, &mut rng.0);

        if body.direction != before {
            trace!(?entity, ghost = ghost.as_ref(), direction = ?body.direction, moved, "Ghost rerouted");
        } else if !moved {
            trace!(?entity, ghost = ghost.as_ref(), "Ghost blocked, holding position");
        }
    }
}
