use bevy_ecs::{entity::Entity, event::Event};

use crate::map::direction::Direction;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameCommand {
    /// Request the player to step in a direction on the next tick.
    MovePlayer(Direction),
    /// Reload the map and reset the session. Only honoured after game over.
    Restart,
}

#[derive(Event, Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    Command(GameCommand),
    /// A pellet was consumed by the player and removed from the board.
    PelletEaten(Entity),
    /// A ghost caught the player.
    LifeLost { ghost: Entity, lives_left: u8 },
}

impl From<GameCommand> for GameEvent {
    fn from(command: GameCommand) -> Self {
        GameEvent::Command(command)
    }
}
