pub mod config;
pub mod controller;
pub mod food;
pub mod game;
pub mod grid;
pub mod input;
pub mod renderer;
pub mod rules;
pub mod scheduler;
pub mod score;
pub mod snake;
pub mod terminal_input;
pub mod terminal_runtime;
pub mod ui;
