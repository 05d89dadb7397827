use glam::{IVec2, UVec2};
use maze_chase::game::Snapshot;
use maze_chase::map::direction::Direction;
use maze_chase::map::render::{TextRenderer, GAME_OVER_MESSAGE, RESTART_PROMPT};
use maze_chase::systems::{GameStage, Ghost};
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

fn tile(column: i32, row: i32) -> IVec2 {
    IVec2::new(column, row) * 32
}

fn border(width: i32, height: i32) -> Vec<IVec2> {
    let mut walls = Vec::new();
    for row in 0..height {
        for column in 0..width {
            if row == 0 || row == height - 1 || column == 0 || column == width - 1 {
                walls.push(tile(column, row));
            }
        }
    }
    walls
}

#[test]
fn test_render_game_frame() {
    let mut game = common::create_test_game(&["XXXXX", "XP rX", "XXXXX"]);

    let frame = TextRenderer.render(&game.snapshot());

    assert_eq!(frame, "#####\n#<.r#\n#####\nx3 Score: 0\n");
}

#[test]
fn test_render_player_facing() {
    let snapshot = |facing: Option<Direction>| Snapshot {
        size: UVec2::new(3, 3),
        walls: border(3, 3),
        pellets: vec![],
        ghosts: vec![],
        player: tile(1, 1) + IVec2::new(8, 0),
        facing,
        score: 0,
        lives: 3,
        stage: GameStage::Playing,
    };

    let middle = |facing| TextRenderer.render(&snapshot(facing)).lines().nth(1).map(str::to_string);

    assert_eq!(middle(Some(Direction::Up)).as_deref(), Some("#v#"));
    assert_eq!(middle(Some(Direction::Down)).as_deref(), Some("#^#"));
    assert_eq!(middle(Some(Direction::Left)).as_deref(), Some("#>#"));
    assert_eq!(middle(Some(Direction::Right)).as_deref(), Some("#<#"));
    assert_eq!(middle(None).as_deref(), Some("#<#"));
}

#[test]
fn test_render_game_over() {
    let snapshot = Snapshot {
        size: UVec2::new(4, 3),
        walls: border(4, 3),
        pellets: vec![tile(2, 1) + IVec2::splat(14)],
        ghosts: vec![(Ghost::Pink, tile(1, 1))],
        player: tile(1, 1),
        facing: Some(Direction::Left),
        score: 1230,
        lives: 0,
        stage: GameStage::GameOver,
    };

    let frame = TextRenderer.render(&snapshot);

    assert_eq!(
        frame,
        format!("####\n#>.#\n####\nx0 Score: 1,230\n{GAME_OVER_MESSAGE}\n{RESTART_PROMPT}\n")
    );
    assert_that(&frame.contains("GAME OVER")).is_true();
}
