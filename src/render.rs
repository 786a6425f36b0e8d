//! Immediate-mode drawing: grid, snake, food, HUD, and screen overlays.

use macroquad::prelude::*;

use crate::game::{Cell, GameConfig, SnakeGame};
use crate::theme;

const GLOW_STEPS: usize = 10;

fn cell_rect(cell: Cell, cell_size: i32) -> Rect {
    Rect::new(
        (cell.x * cell_size) as f32,
        (cell.y * cell_size) as f32,
        cell_size as f32,
        cell_size as f32,
    )
}

pub fn draw_grid(config: &GameConfig) {
    let w = (config.grid_width * config.cell_size) as f32;
    let h = (config.grid_height * config.cell_size) as f32;
    for x in 0..=config.grid_width {
        let px = (x * config.cell_size) as f32;
        draw_line(px, 0.0, px, h, 1.0, theme::GRID);
    }
    for y in 0..=config.grid_height {
        let py = (y * config.cell_size) as f32;
        draw_line(0.0, py, w, py, 1.0, theme::GRID);
    }
}

/// Layered translucent circles approximating a radial glow.
fn draw_glow(center: Vec2, color: Color, radius: f32) {
    for i in 0..GLOW_STEPS {
        let fade = 1.0 - i as f32 / GLOW_STEPS as f32;
        let ring = Color::new(color.r, color.g, color.b, 0.2 * fade);
        draw_circle(center.x, center.y, radius * fade, ring);
    }
}

/// Body fades from front to back; the head gets its own color and a halo.
pub fn draw_snake(game: &SnakeGame) {
    let body = game.body();
    let last = body.len().saturating_sub(1).max(1) as f32;
    for (i, segment) in body.iter().enumerate() {
        let rect = cell_rect(*segment, game.config.cell_size);
        if i == 0 {
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, theme::SNAKE_HEAD);
            draw_glow(
                segment.center(game.config.cell_size),
                theme::SNAKE_HEAD,
                game.config.cell_size as f32,
            );
        } else {
            let color = theme::lerp(theme::BODY_FRONT, theme::BODY_BACK, i as f32 / last);
            draw_rectangle(rect.x, rect.y, rect.w, rect.h, color);
        }
    }
}

pub fn draw_food(game: &SnakeGame) {
    let cell_size = game.config.cell_size as f32;

    if let Some(food) = game.food() {
        // Slow breathing pulse.
        let pulse = (get_time() * 5.0).sin().abs() as f32 * 0.2 + 0.8;
        let size = cell_size * pulse;
        let offset = (cell_size - size) * 0.5;
        let rect = cell_rect(food, game.config.cell_size);
        draw_rectangle(rect.x + offset, rect.y + offset, size, size, theme::FOOD);
    }

    if let Some(special) = game.special_food() {
        let center = special.center(game.config.cell_size);
        draw_star(center, cell_size * 0.5, get_time() as f32 * 2.0);
        draw_glow(center, theme::SPECIAL_FOOD, cell_size * 1.25);
    }
}

/// Rotating eight-point star, drawn as a fan of triangles.
fn draw_star(center: Vec2, outer: f32, angle: f32) {
    let mut points = [Vec2::ZERO; 8];
    for (i, point) in points.iter_mut().enumerate() {
        let a = angle + i as f32 * std::f32::consts::FRAC_PI_4;
        let r = if i % 2 == 0 { outer } else { outer * 0.5 };
        *point = center + vec2(a.cos(), a.sin()) * r;
    }
    for i in 0..points.len() {
        draw_triangle(
            center,
            points[i],
            points[(i + 1) % points.len()],
            theme::SPECIAL_FOOD,
        );
    }
}

fn draw_text_shadowed(text: &str, x: f32, y: f32, size: f32, color: Color) {
    draw_text(text, x + 2.0, y + 2.0, size, theme::TEXT_SHADOW);
    draw_text(text, x, y, size, color);
}

fn draw_text_centered(text: &str, y: f32, size: u16, color: Color) {
    let dims = measure_text(text, None, size, 1.0);
    draw_text(text, (screen_width() - dims.width) * 0.5, y, size as f32, color);
}

pub fn draw_hud(game: &SnakeGame) {
    draw_text_shadowed(&format!("Score: {}", game.score()), 20.0, 36.0, 36.0, theme::TEXT);
    draw_text_shadowed(&format!("Best: {}", game.high_score()), 20.0, 64.0, 24.0, theme::TEXT);
    draw_text_shadowed(
        &format!("Speed: {}", game.tick_rate()),
        screen_width() - 140.0,
        36.0,
        24.0,
        theme::TEXT,
    );
}

pub fn draw_menu(game: &SnakeGame) {
    let bob = ((get_time() * 2.0).sin() * 10.0) as f32;
    draw_text_centered("SNAKE", 120.0 + bob, 72, theme::SNAKE_HEAD);
    draw_text_centered("Neon Edition", 170.0 + bob, 36, theme::TEXT);

    let instructions = [
        "Press SPACE to Start",
        "Use Arrow Keys or WASD to Move",
        "Press P to Pause",
        "Press ESC to Quit",
    ];
    let mut y = 260.0;
    for line in instructions {
        draw_text_centered(line, y, 24, theme::TEXT);
        y += 36.0;
    }

    if game.high_score() > 0 {
        draw_text_centered(
            &format!("High Score: {}", game.high_score()),
            screen_height() - 80.0,
            36,
            theme::SPECIAL_FOOD,
        );
    }
}

fn dim_screen(alpha: f32) {
    draw_rectangle(
        0.0,
        0.0,
        screen_width(),
        screen_height(),
        Color::new(0.0, 0.0, 0.0, alpha),
    );
}

pub fn draw_pause_overlay() {
    dim_screen(0.25);
    draw_text_centered("PAUSED", screen_height() * 0.5, 72, theme::PAUSE);
    draw_text_centered("Press P to Resume", screen_height() * 0.5 + 60.0, 24, theme::TEXT);
}

pub fn draw_game_over_overlay(game: &SnakeGame) {
    dim_screen(0.5);
    let mid = screen_height() * 0.5;
    draw_text_centered("GAME OVER", mid - 100.0, 72, theme::GAME_OVER);
    draw_text_centered(&format!("Final Score: {}", game.score()), mid, 36, theme::TEXT);
    if game.score() == game.high_score() && game.score() > 0 {
        draw_text_centered("NEW HIGH SCORE!", mid + 50.0, 36, theme::SPECIAL_FOOD);
    }
    draw_text_centered(
        "Press SPACE to Play Again or ESC to Quit",
        screen_height() - 100.0,
        24,
        theme::TEXT,
    );
}

pub fn draw_won_overlay(game: &SnakeGame) {
    dim_screen(0.5);
    let mid = screen_height() * 0.5;
    draw_text_centered("YOU WIN!", mid - 100.0, 72, theme::SNAKE_HEAD);
    draw_text_centered("The board is full.", mid - 50.0, 24, theme::TEXT);
    draw_text_centered(&format!("Final Score: {}", game.score()), mid, 36, theme::TEXT);
    if game.score() == game.high_score() && game.score() > 0 {
        draw_text_centered("NEW HIGH SCORE!", mid + 50.0, 36, theme::SPECIAL_FOOD);
    }
    draw_text_centered(
        "Press SPACE to Play Again or ESC to Quit",
        screen_height() - 100.0,
        24,
        theme::TEXT,
    );
}
