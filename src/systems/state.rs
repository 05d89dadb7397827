use bevy_ecs::entity::Entity;
use bevy_ecs::event::EventWriter;
use bevy_ecs::query::{With, Without};
use bevy_ecs::resource::Resource;
use bevy_ecs::system::{Query, Res, ResMut};
use tracing::{debug, info};

use crate::events::GameEvent;
use crate::systems::collision::overlaps;
use crate::systems::components::{Body, Ghost, PlayerControlled, PlayerLives};

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum GameStage {
    /// The main gameplay loop is active.
    #[default]
    Playing,
    /// The player ran out of lives. Ticking halts until a restart.
    GameOver,
}

/// Handles ghosts catching the player.
///
/// Every overlapping ghost costs a life. With lives to spare the player returns to its spawn
/// point (ghosts stay where they are); losing the last life ends the session within the same tick.
pub fn ghost_collision_system(
    mut players: Query<&mut Body, (With<PlayerControlled>, Without<Ghost>)>,
    ghosts: Query<(Entity, &Body), (With<Ghost>, Without<PlayerControlled>)>,
    mut lives: ResMut<PlayerLives>,
    mut stage: ResMut<GameStage>,
    mut events: EventWriter<GameEvent>,
) {
    let mut player = players
        .single_mut()
        .expect("exactly one player entity must exist while playing");

    for (ghost, ghost_body) in ghosts.iter() {
        if *stage == GameStage::GameOver {
            break;
        }
        if !overlaps(&player.hitbox, &ghost_body.hitbox) {
            continue;
        }

        lives.0 = lives.0.saturating_sub(1);
        events.write(GameEvent::LifeLost {
            ghost,
            lives_left: lives.0,
        });

        if lives.0 == 0 {
            info!(?ghost, "Player caught on their last life, game over");
            *stage = GameStage::GameOver;
        } else {
            debug!(?ghost, lives_left = lives.0, "Player caught, returning to spawn");
            player.reset();
        }
    }
}

/// Run condition for gameplay systems.
pub fn is_playing(stage: Res<GameStage>) -> bool {
    *stage == GameStage::Playing
}
