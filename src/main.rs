use std::path::PathBuf;

use macroquad::prelude::*;

mod audio;
mod effects;
mod game;
mod render;
mod save;
mod theme;

use game::{Direction, GameConfig, GameState, SnakeGame, TickEvent};

const SAVE_FILE: &str = "high_score.json";

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Neon Snake".to_owned(),
        window_width: config.grid_width * config.cell_size,
        window_height: config.grid_height * config.cell_size,
        high_dpi: true,
        ..Default::default()
    }
}

fn steer_from_keys(game: &mut SnakeGame) {
    if is_key_pressed(KeyCode::Up) || is_key_pressed(KeyCode::W) {
        game.steer(Direction::Up);
    } else if is_key_pressed(KeyCode::Down) || is_key_pressed(KeyCode::S) {
        game.steer(Direction::Down);
    } else if is_key_pressed(KeyCode::Left) || is_key_pressed(KeyCode::A) {
        game.steer(Direction::Left);
    } else if is_key_pressed(KeyCode::Right) || is_key_pressed(KeyCode::D) {
        game.steer(Direction::Right);
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let sounds = audio::Sounds::load(1.0).await;
    let mut game = SnakeGame::new(GameConfig::default(), PathBuf::from(SAVE_FILE));
    let mut last_tick = get_time();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        match game.state {
            GameState::Menu => {
                if is_key_pressed(KeyCode::Space) {
                    game.start();
                    last_tick = get_time();
                }
            }
            GameState::Playing => {
                steer_from_keys(&mut game);
                if is_key_pressed(KeyCode::P) {
                    game.toggle_pause();
                }
                if get_time() - last_tick >= game.move_interval() {
                    last_tick = get_time();
                    match game.tick() {
                        TickEvent::AteFood => {
                            if let Some(s) = &sounds {
                                s.play_eat();
                            }
                        }
                        TickEvent::AteSpecial => {
                            if let Some(s) = &sounds {
                                s.play_special();
                            }
                        }
                        TickEvent::Died => {
                            if let Some(s) = &sounds {
                                s.play_die();
                            }
                        }
                        TickEvent::Moved => {}
                    }
                }
            }
            GameState::Paused => {
                if is_key_pressed(KeyCode::P) {
                    game.toggle_pause();
                    last_tick = get_time();
                }
            }
            GameState::GameOver | GameState::Won => {
                if is_key_pressed(KeyCode::Space) {
                    game.start();
                    last_tick = get_time();
                }
            }
        }

        clear_background(theme::BACKGROUND);
        match game.state {
            GameState::Menu => render::draw_menu(&game),
            GameState::Playing => {
                render::draw_grid(&game.config);
                render::draw_food(&game);
                render::draw_snake(&game);
                game.effects.draw();
                render::draw_hud(&game);
            }
            GameState::Paused => {
                render::draw_grid(&game.config);
                render::draw_food(&game);
                render::draw_snake(&game);
                render::draw_hud(&game);
                render::draw_pause_overlay();
            }
            GameState::GameOver => {
                render::draw_grid(&game.config);
                render::draw_snake(&game);
                render::draw_game_over_overlay(&game);
            }
            GameState::Won => {
                render::draw_grid(&game.config);
                render::draw_snake(&game);
                render::draw_won_overlay(&game);
            }
        }

        next_frame().await;
    }
}
