use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::With;
use bevy_ecs::system::{Commands, Query, ResMut};
use smallvec::SmallVec;
use tracing::trace;

use crate::constants::PELLET_SCORE;
use crate::events::GameEvent;
use crate::systems::collision::overlaps;
use crate::systems::components::{Body, Hitbox, Pellet, PlayerControlled, ScoreResource};

/// Consumes every pellet the player overlaps, awarding `PELLET_SCORE` for each.
///
/// Eaten pellets are collected first and despawned afterwards; each is scored exactly once
/// since a despawned pellet can never be matched again.
pub fn item_system(
    mut commands: Commands,
    mut score: ResMut<ScoreResource>,
    players: Query<&Body, With<PlayerControlled>>,
    pellets: Query<(Entity, &Hitbox), With<Pellet>>,
    mut events: EventWriter<GameEvent>,
) {
    let player = players
        .single()
        .expect("exactly one player entity must exist while playing");

    let eaten: SmallVec<[Entity; 4]> = pellets
        .iter()
        .filter(|(_, hitbox)| overlaps(&player.hitbox, hitbox))
        .map(|(entity, _)| entity)
        .collect();

    for pellet in eaten {
        score.0 += PELLET_SCORE;
        trace!(?pellet, score = score.0, "Pellet eaten");
        commands.entity(pellet).despawn();
        events.write(GameEvent::PelletEaten(pellet));
    }
}
