use bevy_ecs::event::EventReader;
use bevy_ecs::query::With;
use bevy_ecs::system::Query;
use tracing::trace;

use crate::events::{GameCommand, GameEvent};
use crate::systems::components::{Body, Hitbox, PlayerControlled, Wall};
use crate::systems::movement::{apply_direction, push_out_of_walls};

/// Applies the movement commands received since the previous tick, in order.
///
/// Each accepted command advances the player by one step; commands that would end inside a
/// wall are dropped and the player keeps its previous direction.
pub fn player_control_system(
    mut events: EventReader<GameEvent>,
    walls: Query<&Hitbox, With<Wall>>,
    mut players: Query<&mut Body, With<PlayerControlled>>,
) {
    let mut body = players
        .single_mut()
        .expect("exactly one player entity must exist while playing");
    let walls: Vec<Hitbox> = walls.iter().copied().collect();

    for event in events.read() {
        if let GameEvent::Command(GameCommand::MovePlayer(direction)) = event {
            let committed = apply_direction(&mut body, *direction, &walls);
            trace!(direction = direction.as_ref(), committed, position = ?body.hitbox.position, "Player move requested");
        }
    }
}

/// Re-validates the player's committed direction, backing it out of any wall it ended up in.
pub fn player_wall_system(walls: Query<&Hitbox, With<Wall>>, mut players: Query<&mut Body, With<PlayerControlled>>) {
    let mut body = players
        .single_mut()
        .expect("exactly one player entity must exist while playing");
    let walls: Vec<Hitbox> = walls.iter().copied().collect();

    if push_out_of_walls(&mut body, &walls) {
        trace!(position = ?body.hitbox.position, "Player pushed out of wall");
    }
}
