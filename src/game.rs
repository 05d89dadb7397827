//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::query::With;
use bevy_ecs::schedule::{ExecutorKind, IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use glam::{IVec2, UVec2};
use tracing::{debug, info, trace};

use crate::constants::RAW_BOARD;
use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent};
use crate::formatter;
use crate::input::Intent;
use crate::map::builder::Map;
use crate::map::direction::Direction;
use crate::systems::{
    ghost_collision_system, ghost_movement_system, ghost_spawn_system, is_playing, item_system, player_control_system,
    player_wall_system, Body, GameRng, GameStage, Ghost, Hitbox, Pellet, PlayerControlled, PlayerLives, ScoreResource, Wall,
};

/// System sets for the per-tick pipeline, run strictly in declaration order.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    /// Apply the movement commands queued since the previous tick
    Input,
    /// Re-validate the player against walls, then move the ghosts
    Update,
    /// Resolve pellet and ghost contact against the updated positions
    Respond,
}

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Board rows, one character per tile. Re-parsed on every restart.
    pub layout: Vec<String>,
    /// Seed for the ghost random source; OS entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            layout: RAW_BOARD.iter().map(|row| row.to_string()).collect(),
            seed: None,
        }
    }
}

/// A plain view of the simulation for a render collaborator.
///
/// Positions are top-left corners in pixel space, listed in spawn order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// The board size, in tiles.
    pub size: UVec2,
    pub walls: Vec<IVec2>,
    pub pellets: Vec<IVec2>,
    pub ghosts: Vec<(Ghost, IVec2)>,
    pub player: IVec2,
    pub facing: Option<Direction>,
    pub score: u32,
    pub lives: u8,
    pub stage: GameStage,
}

/// Core game state manager built on the Bevy ECS architecture.
///
/// The `World` holds every entity and resource, the `Schedule` defines the per-tick system
/// order. Ticks are driven from outside (a frame timer, a terminal loop or a test calling
/// [`Game::tick`] directly); once the game is over the loop halts until a restart.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
    layout: Vec<String>,
    halted: bool,
}

impl Game {
    /// Parses the layout, spawns every entity and releases the ghosts.
    ///
    /// # Errors
    ///
    /// Returns `GameError::MapParse` if the layout is not a valid board.
    pub fn new(config: GameConfig) -> GameResult<Game> {
        info!(seed = ?config.seed, "Starting game initialization");

        debug!("Parsing board layout");
        let map = Self::load_map(&config.layout)?;

        debug!("Initializing ECS world and system schedule");
        let mut world = World::default();
        let mut schedule = Schedule::default();
        EventRegistry::register_event::<GameEvent>(&mut world);
        world.insert_resource(GameRng::new(config.seed));
        Self::configure_schedule(&mut schedule);

        let mut game = Game {
            world,
            schedule,
            layout: config.layout,
            halted: false,
        };
        game.start_session(map)?;

        info!("Game initialization completed successfully");
        Ok(game)
    }

    fn load_map(layout: &[String]) -> GameResult<Map> {
        let rows: Vec<&str> = layout.iter().map(String::as_str).collect();
        Ok(Map::new(&rows)?)
    }

    fn configure_schedule(schedule: &mut Schedule) {
        // One tick runs to completion on one thread; later systems depend on state mutated by earlier ones.
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);

        schedule
            .add_systems((
                player_control_system.in_set(GameplaySet::Input),
                (player_wall_system, ghost_movement_system)
                    .chain()
                    .in_set(GameplaySet::Update),
                (item_system, ghost_collision_system)
                    .chain()
                    .in_set(GameplaySet::Respond),
            ))
            .configure_sets((GameplaySet::Input, GameplaySet::Update, GameplaySet::Respond).chain())
            .configure_sets((
                GameplaySet::Input.run_if(is_playing),
                GameplaySet::Update.run_if(is_playing),
                GameplaySet::Respond.run_if(is_playing),
            ));
    }

    /// Replaces every entity with fresh ones from `map` and resets the session resources.
    fn start_session(&mut self, map: Map) -> GameResult<()> {
        self.world.clear_entities();
        map.spawn_entities(&mut self.world);

        self.world.insert_resource(map);
        self.world.insert_resource(ScoreResource::default());
        self.world.insert_resource(PlayerLives::default());
        self.world.insert_resource(GameStage::Playing);
        self.world.resource_mut::<Events<GameEvent>>().clear();

        self.world
            .run_system_once(ghost_spawn_system)
            .map_err(|e| GameError::InvalidState(format!("Failed to release ghosts: {e}")))?;

        self.halted = false;
        Ok(())
    }

    /// Executes one simulation step by running all scheduled ECS systems.
    ///
    /// Does nothing once the game is over; the loop stays halted until [`Game::restart`].
    ///
    /// # Returns
    ///
    /// `true` if a tick was processed, `false` if the loop is halted.
    pub fn tick(&mut self) -> bool {
        if self.halted {
            return false;
        }

        self.schedule.run(&mut self.world);
        self.world.resource_mut::<Events<GameEvent>>().update();
        formatter::increment_tick();

        if self.stage() == GameStage::GameOver {
            self.halt();
        }

        true
    }

    /// Stops the tick loop. Calling it again while halted is a no-op.
    fn halt(&mut self) {
        if self.halted {
            return;
        }

        self.halted = true;
        info!(score = self.score(), "Game over, tick loop halted");
    }

    /// Handles a command from the input collaborator.
    ///
    /// Movement is queued and applied at the start of the next tick. Restart takes effect
    /// immediately, but only once the game is over.
    pub fn command(&mut self, command: GameCommand) -> GameResult<()> {
        match command {
            GameCommand::MovePlayer(direction) if self.halted => {
                trace!(direction = direction.as_ref(), "Ignoring movement while halted");
            }
            GameCommand::MovePlayer(_) => {
                self.world.send_event(GameEvent::Command(command));
            }
            GameCommand::Restart if self.stage() == GameStage::GameOver => self.restart()?,
            GameCommand::Restart => {
                trace!("Ignoring restart while playing");
            }
        }

        Ok(())
    }

    /// Translates an intent into a command, dropping ignored keys.
    pub fn apply_intent(&mut self, intent: Intent) -> GameResult<()> {
        match intent.command() {
            Some(command) => self.command(command),
            None => Ok(()),
        }
    }

    /// Reloads the map from the layout and resets score, lives and stage.
    pub fn restart(&mut self) -> GameResult<()> {
        let map = Self::load_map(&self.layout)?;
        self.start_session(map)?;
        info!("Session restarted");
        Ok(())
    }

    pub fn score(&self) -> u32 {
        self.world.resource::<ScoreResource>().0
    }

    pub fn lives(&self) -> u8 {
        self.world.resource::<PlayerLives>().0
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    /// Whether the tick loop is stopped.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn map(&self) -> &Map {
        self.world.resource::<Map>()
    }

    /// The player's current body.
    pub fn player(&mut self) -> Body {
        *self
            .world
            .query_filtered::<&Body, With<PlayerControlled>>()
            .single(&self.world)
            .expect("exactly one player entity must exist")
    }

    /// Number of pellets still on the board.
    pub fn pellets_remaining(&mut self) -> usize {
        self.world
            .query_filtered::<(), With<Pellet>>()
            .iter(&self.world)
            .count()
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&mut self) -> Snapshot {
        let walls = self
            .world
            .query_filtered::<&Hitbox, With<Wall>>()
            .iter(&self.world)
            .map(|hitbox| hitbox.position)
            .collect();
        let pellets = self
            .world
            .query_filtered::<&Hitbox, With<Pellet>>()
            .iter(&self.world)
            .map(|hitbox| hitbox.position)
            .collect();
        let ghosts = self
            .world
            .query::<(&Ghost, &Body)>()
            .iter(&self.world)
            .map(|(ghost, body)| (*ghost, body.hitbox.position))
            .collect();
        let player = self.player();

        Snapshot {
            size: self.map().size,
            walls,
            pellets,
            ghosts,
            player: player.hitbox.position,
            facing: player.direction,
            score: self.score(),
            lives: self.lives(),
            stage: self.stage(),
        }
    }
}
