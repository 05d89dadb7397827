use bevy_ecs::{bundle::Bundle, component::Component, resource::Resource};
use glam::IVec2;
use rand::{rngs::SmallRng, SeedableRng};
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::STARTING_LIVES;
use crate::map::direction::Direction;

/// A tag component for the entity controlled by the player.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct PlayerControlled;

/// A tag component for static maze walls.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Wall;

/// A tag component for consumable pellets.
#[derive(Default, Component, Debug, Clone, Copy)]
pub struct Pellet;

/// The ghost variants. They only differ in how they are drawn.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Ghost {
    Red,
    Pink,
    Blue,
    Orange,
}

impl Ghost {
    /// Returns the ghost spawned by a layout symbol, if the symbol is a ghost spawn.
    pub const fn from_symbol(symbol: char) -> Option<Ghost> {
        match symbol {
            'r' => Some(Ghost::Red),
            'p' => Some(Ghost::Pink),
            'b' => Some(Ghost::Blue),
            'o' => Some(Ghost::Orange),
            _ => None,
        }
    }

    /// The layout symbol for this ghost.
    pub const fn symbol(self) -> char {
        match self {
            Ghost::Red => 'r',
            Ghost::Pink => 'p',
            Ghost::Blue => 'b',
            Ghost::Orange => 'o',
        }
    }
}

/// A tag component denoting the type of entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    Player,
    Ghost,
    Wall,
    Pellet,
}

/// An axis-aligned rectangle in pixel space, used for every overlap test.
///
/// Static entities (walls, pellets) carry this directly as a component.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hitbox {
    /// Top-left corner, in pixels.
    pub position: IVec2,
    pub size: IVec2,
}

impl Hitbox {
    pub const fn new(position: IVec2, size: IVec2) -> Self {
        Self { position, size }
    }

    /// Exclusive bottom-right corner, in pixels.
    pub fn max(&self) -> IVec2 {
        self.position + self.size
    }
}

/// The shared movement state of players and ghosts.
///
/// `direction` is the last committed direction; `None` until a direction has been accepted.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Body {
    pub hitbox: Hitbox,
    pub direction: Option<Direction>,
    spawn: IVec2,
}

impl Body {
    /// Creates a stationary body whose spawn point is the hitbox's current position.
    pub fn new(hitbox: Hitbox) -> Self {
        Self {
            hitbox,
            direction: None,
            spawn: hitbox.position,
        }
    }

    pub fn spawn(&self) -> IVec2 {
        self.spawn
    }

    /// The displacement applied per step, derived from the committed direction.
    pub fn velocity(&self) -> IVec2 {
        self.direction.map(Direction::velocity).unwrap_or(IVec2::ZERO)
    }

    /// Moves the body back to its spawn point, keeping its direction.
    pub fn reset(&mut self) {
        self.hitbox.position = self.spawn;
    }
}

#[derive(Bundle)]
pub struct PlayerBundle {
    pub player: PlayerControlled,
    pub body: Body,
    pub entity_type: EntityType,
}

#[derive(Bundle)]
pub struct GhostBundle {
    pub ghost: Ghost,
    pub body: Body,
    pub entity_type: EntityType,
}

#[derive(Bundle)]
pub struct WallBundle {
    pub wall: Wall,
    pub hitbox: Hitbox,
    pub entity_type: EntityType,
}

#[derive(Bundle)]
pub struct PelletBundle {
    pub pellet: Pellet,
    pub hitbox: Hitbox,
    pub entity_type: EntityType,
}

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource(pub u32);

/// Lives the player has left in the current session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerLives(pub u8);

impl Default for PlayerLives {
    fn default() -> Self {
        Self(STARTING_LIVES)
    }
}

/// The single random source driving ghost decisions.
#[derive(Resource, Debug, Clone)]
pub struct GameRng(pub SmallRng);

impl GameRng {
    /// Seeds the generator from `seed`, or from OS entropy when no seed is given.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(SmallRng::seed_from_u64(seed)),
            None => Self(SmallRng::from_os_rng()),
        }
    }
}
