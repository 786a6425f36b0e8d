//! Core simulation: snake movement, collision, food spawning, scoring.

use std::collections::VecDeque;
use std::path::PathBuf;

use macroquad::rand::gen_range;

use crate::effects::ParticleSystem;
use crate::save;
use crate::theme;

pub const FOOD_POINTS: u32 = 10;
pub const SPECIAL_FOOD_POINTS: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Pixel-space center of this cell.
    pub fn center(self, cell_size: i32) -> macroquad::math::Vec2 {
        macroquad::math::vec2(
            (self.x * cell_size + cell_size / 2) as f32,
            (self.y * cell_size + cell_size / 2) as f32,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Menu,
    Playing,
    Paused,
    GameOver,
    Won,
}

/// What happened during one simulation tick, for sound triggering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    Moved,
    AteFood,
    AteSpecial,
    Died,
}

#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    pub cell_size: i32,
    pub base_tick_rate: u32,
    pub max_tick_rate: u32,
    pub special_food_chance: f32,
    pub special_food_lifetime: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            cell_size: 20,
            base_tick_rate: 10,
            max_tick_rate: 20,
            special_food_chance: 0.1,
            special_food_lifetime: 150,
        }
    }
}

pub struct SnakeGame {
    pub config: GameConfig,
    pub state: GameState,
    snake: VecDeque<Cell>,
    direction: Direction,
    next_direction: Direction,
    grow: bool,
    food: Option<Cell>,
    special_food: Option<Cell>,
    special_food_timer: u32,
    score: u32,
    high_score: u32,
    pub effects: ParticleSystem,
    save_path: PathBuf,
}

impl SnakeGame {
    pub fn new(config: GameConfig, save_path: PathBuf) -> Self {
        let high_score = save::load_high_score(&save_path);
        Self {
            config,
            state: GameState::Menu,
            snake: VecDeque::new(),
            direction: Direction::Right,
            next_direction: Direction::Right,
            grow: false,
            food: None,
            special_food: None,
            special_food_timer: 0,
            score: 0,
            high_score,
            effects: ParticleSystem::new(),
            save_path,
        }
    }

    /// Reset to a fresh run and enter Playing.
    pub fn start(&mut self) {
        let cx = self.config.grid_width / 2;
        let cy = self.config.grid_height / 2;
        self.snake.clear();
        for i in 0..3 {
            self.snake.push_back(Cell { x: cx - i, y: cy });
        }
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.grow = false;
        self.score = 0;
        self.special_food = None;
        self.special_food_timer = 0;
        self.effects.clear();
        self.state = GameState::Playing;
        self.spawn_food();
    }

    pub fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Playing => GameState::Paused,
            GameState::Paused => GameState::Playing,
            other => other,
        };
    }

    /// Buffer a direction change; a 180° reversal is ignored.
    pub fn steer(&mut self, dir: Direction) {
        if dir != self.direction.opposite() {
            self.next_direction = dir;
        }
    }

    /// Ticks per second, stepped up with score and capped.
    pub fn tick_rate(&self) -> u32 {
        (self.config.base_tick_rate + self.score / 50).min(self.config.max_tick_rate)
    }

    /// Seconds between simulation ticks.
    pub fn move_interval(&self) -> f64 {
        1.0 / self.tick_rate() as f64
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn body(&self) -> &VecDeque<Cell> {
        &self.snake
    }

    pub fn food(&self) -> Option<Cell> {
        self.food
    }

    pub fn special_food(&self) -> Option<Cell> {
        self.special_food
    }

    /// Advance the simulation by one tick.
    pub fn tick(&mut self) -> TickEvent {
        if self.state != GameState::Playing {
            return TickEvent::Moved;
        }

        self.effects.update();

        self.direction = self.next_direction;
        let head = self.snake[0];
        let (dx, dy) = self.direction.delta();
        let new_head = Cell {
            x: head.x + dx,
            y: head.y + dy,
        };

        let out_of_bounds = new_head.x < 0
            || new_head.y < 0
            || new_head.x >= self.config.grid_width
            || new_head.y >= self.config.grid_height;
        if out_of_bounds || self.snake.contains(&new_head) {
            self.finish(GameState::GameOver);
            return TickEvent::Died;
        }

        self.snake.push_front(new_head);

        let ate_food = self.food == Some(new_head);
        let ate_special = self.special_food == Some(new_head);
        let mut event = TickEvent::Moved;
        if ate_food || ate_special {
            self.score += if ate_food { FOOD_POINTS } else { SPECIAL_FOOD_POINTS };
            self.grow = true;
            let color = if ate_special { theme::SPECIAL_FOOD } else { theme::FOOD };
            let count = if ate_special { 20 } else { 10 };
            self.effects
                .burst(new_head.center(self.config.cell_size), color, count);
            if ate_special {
                self.special_food = None;
                self.special_food_timer = 0;
            }
            if ate_food {
                self.spawn_food();
            }
            event = if ate_food {
                TickEvent::AteFood
            } else {
                TickEvent::AteSpecial
            };
        }

        if self.grow {
            self.grow = false;
        } else {
            self.snake.pop_back();
        }

        // Special food burns down while uneaten and silently despawns.
        if self.special_food.is_some() {
            self.special_food_timer = self.special_food_timer.saturating_sub(1);
            if self.special_food_timer == 0 {
                self.special_food = None;
            }
        }

        event
    }

    /// Place normal food on a free cell, sometimes with a bonus item.
    /// A board with no free cell left is a win.
    fn spawn_food(&mut self) {
        let free = self.free_cells();
        if free.is_empty() {
            self.food = None;
            self.special_food = None;
            self.special_food_timer = 0;
            self.finish(GameState::Won);
            return;
        }
        self.food = Some(free[gen_range(0, free.len())]);
        if gen_range(0.0, 1.0) < self.config.special_food_chance {
            self.special_food = Some(free[gen_range(0, free.len())]);
            self.special_food_timer = self.config.special_food_lifetime;
        } else {
            self.special_food = None;
            self.special_food_timer = 0;
        }
    }

    fn free_cells(&self) -> Vec<Cell> {
        let occupied: std::collections::HashSet<Cell> = self.snake.iter().copied().collect();
        let mut free = Vec::new();
        for y in 0..self.config.grid_height {
            for x in 0..self.config.grid_width {
                let cell = Cell { x, y };
                if !occupied.contains(&cell) {
                    free.push(cell);
                }
            }
        }
        free
    }

    /// End the run; the high score is committed here and nowhere else.
    fn finish(&mut self, state: GameState) {
        self.state = state;
        if self.score > self.high_score {
            self.high_score = self.score;
            save::write_high_score(&self.save_path, self.high_score);
        }
    }
}
