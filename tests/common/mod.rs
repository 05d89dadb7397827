#![allow(dead_code)]

use bevy_ecs::{entity::Entity, event::Events, world::World};
use glam::IVec2;
use maze_chase::{
    constants::TILE_SIZE,
    events::GameEvent,
    game::{Game, GameConfig},
    systems::{
        Body, EntityType, GameRng, GameStage, Ghost, GhostBundle, Hitbox, Pellet, PelletBundle, PlayerBundle,
        PlayerControlled, PlayerLives, ScoreResource, Wall, WallBundle,
    },
};

pub const TEST_SEED: u64 = 0x5EED;

/// A single open row: the player at column 1 followed by four pellets.
pub const CORRIDOR: [&str; 3] = ["XXXXXXX", "XP    X", "XXXXXXX"];

/// The corridor with a red ghost at the far end.
pub const HAUNTED_CORRIDOR: [&str; 3] = ["XXXXXXXX", "XP    rX", "XXXXXXXX"];

/// The hitbox of a full tile at `(column, row)`.
pub fn tile(column: i32, row: i32) -> Hitbox {
    Hitbox::new(IVec2::new(column, row) * TILE_SIZE, IVec2::splat(TILE_SIZE))
}

/// Walls enclosing a single row of `length` open tiles, starting at column 1 of row 1.
pub fn corridor_walls(length: i32) -> Vec<Hitbox> {
    let mut walls = Vec::new();
    for column in 0..length + 2 {
        walls.push(tile(column, 0));
        walls.push(tile(column, 2));
    }
    walls.push(tile(0, 1));
    walls.push(tile(length + 1, 1));
    walls
}

pub fn create_test_config(layout: &[&str]) -> GameConfig {
    GameConfig {
        layout: layout.iter().map(|row| row.to_string()).collect(),
        seed: Some(TEST_SEED),
    }
}

pub fn create_test_game(layout: &[&str]) -> Game {
    Game::new(create_test_config(layout)).expect("test layout should be valid")
}

/// Creates a basic test world with the resources every system expects.
pub fn create_test_world() -> World {
    let mut world = World::new();

    world.insert_resource(Events::<GameEvent>::default());
    world.insert_resource(ScoreResource(0));
    world.insert_resource(PlayerLives::default());
    world.insert_resource(GameStage::Playing);
    world.insert_resource(GameRng::new(Some(TEST_SEED)));

    world
}

pub fn spawn_test_walls(world: &mut World, walls: &[Hitbox]) {
    for &hitbox in walls {
        world.spawn(WallBundle {
            wall: Wall,
            hitbox,
            entity_type: EntityType::Wall,
        });
    }
}

pub fn spawn_test_player(world: &mut World, hitbox: Hitbox) -> Entity {
    world
        .spawn(PlayerBundle {
            player: PlayerControlled,
            body: Body::new(hitbox),
            entity_type: EntityType::Player,
        })
        .id()
}

pub fn spawn_test_ghost(world: &mut World, ghost: Ghost, hitbox: Hitbox) -> Entity {
    world
        .spawn(GhostBundle {
            ghost,
            body: Body::new(hitbox),
            entity_type: EntityType::Ghost,
        })
        .id()
}

/// Spawns a pellet centered in the tile at `(column, row)`.
pub fn spawn_test_pellet(world: &mut World, column: i32, row: i32) -> Entity {
    world
        .spawn(PelletBundle {
            pellet: Pellet,
            hitbox: Hitbox::new(IVec2::new(column, row) * TILE_SIZE + IVec2::splat(14), IVec2::splat(4)),
            entity_type: EntityType::Pellet,
        })
        .id()
}

/// Sends a game event to the world
pub fn send_game_event(world: &mut World, event: GameEvent) {
    world.send_event(event);
}

pub fn body_of(world: &World, entity: Entity) -> Body {
    *world.get::<Body>(entity).expect("entity should have a body")
}

/// Moves the only ghost of a game onto the player.
pub fn put_ghost_on_player(game: &mut Game) {
    let player = game.player().hitbox.position;
    let mut ghost = game
        .world
        .query_filtered::<&mut Body, bevy_ecs::query::With<Ghost>>()
        .single_mut(&mut game.world)
        .expect("layout should have exactly one ghost");
    ghost.hitbox.position = player;
}

/// Every game event currently buffered in the world, oldest first.
pub fn written_events(world: &World) -> Vec<GameEvent> {
    let events = world.resource::<Events<GameEvent>>();
    let mut cursor = events.get_cursor();
    cursor.read(events).copied().collect()
}
