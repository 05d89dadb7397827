use bevy_ecs::system::RunSystemOnce;
use glam::IVec2;
use maze_chase::events::{GameCommand, GameEvent};
use maze_chase::map::direction::Direction;
use maze_chase::systems::{player_control_system, player_wall_system};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn move_player(world: &mut bevy_ecs::world::World, direction: Direction) {
    common::send_game_event(world, GameCommand::MovePlayer(direction).into());
}

#[test]
fn test_player_control_applies_commands_in_order() {
    let mut world = common::create_test_world();
    common::spawn_test_walls(&mut world, &common::corridor_walls(5));
    let player = common::spawn_test_player(&mut world, common::tile(1, 1));

    move_player(&mut world, Direction::Right);
    move_player(&mut world, Direction::Right);
    move_player(&mut world, Direction::Left);

    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");

    let body = common::body_of(&world, player);
    assert_eq!(body.hitbox.position, IVec2::new(40, 32));
    assert_eq!(body.direction, Some(Direction::Left));
}

#[test]
fn test_player_control_drops_blocked_commands() {
    let mut world = common::create_test_world();
    common::spawn_test_walls(&mut world, &common::corridor_walls(5));
    let player = common::spawn_test_player(&mut world, common::tile(1, 1));

    move_player(&mut world, Direction::Right);
    move_player(&mut world, Direction::Up);
    move_player(&mut world, Direction::Down);

    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");

    let body = common::body_of(&world, player);
    assert_eq!(body.hitbox.position, IVec2::new(40, 32));
    assert_eq!(body.direction, Some(Direction::Right));
}

#[test]
fn test_player_control_ignores_other_events() {
    let mut world = common::create_test_world();
    common::spawn_test_walls(&mut world, &common::corridor_walls(5));
    let player = common::spawn_test_player(&mut world, common::tile(1, 1));

    common::send_game_event(&mut world, GameCommand::Restart.into());
    common::send_game_event(&mut world, GameEvent::PelletEaten(player));

    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");

    let body = common::body_of(&world, player);
    assert_eq!(body.hitbox.position, IVec2::new(32, 32));
    assert_that(&body.direction).is_none();
}

#[test]
fn test_player_without_input_stays_put() {
    let mut world = common::create_test_world();
    common::spawn_test_walls(&mut world, &common::corridor_walls(5));
    let player = common::spawn_test_player(&mut world, common::tile(1, 1));
    move_player(&mut world, Direction::Right);
    world
        .run_system_once(player_control_system)
        .expect("System should run successfully");

    for _ in 0..5 {
        world
            .run_system_once(player_control_system)
            .expect("System should run successfully");
        world
            .run_system_once(player_wall_system)
            .expect("System should run successfully");
    }

    assert_eq!(common::body_of(&world, player).hitbox.position, IVec2::new(40, 32));
}

#[test]
fn test_player_wall_system_pushes_back() {
    let mut world = common::create_test_world();
    common::spawn_test_walls(&mut world, &common::corridor_walls(2));
    let player = common::spawn_test_player(&mut world, common::tile(1, 1));
    {
        let mut entity = world.entity_mut(player);
        let mut body = entity.get_mut::<maze_chase::systems::Body>().unwrap();
        body.direction = Some(Direction::Right);
        body.hitbox.position = IVec2::new(72, 32);
    }

    world
        .run_system_once(player_wall_system)
        .expect("System should run successfully");

    assert_eq!(common::body_of(&world, player).hitbox.position, IVec2::new(64, 32));
}
