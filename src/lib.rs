//! Space Explorer: a headless arcade-shooter simulation plus the scene model
//! the terminal front end draws from.

pub mod behavior;
pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod highscore;
pub mod input;
pub mod random;
pub mod scene;
pub mod spawner;
