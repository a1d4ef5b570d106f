//! PLGpt arcade: a chat front end that "generates" a 2D game from a description
//! and runs one of five built-in genre demos on an 800×600 canvas.

pub mod canvas;
pub mod classify;
pub mod components;
pub mod config;
pub mod driver;
pub mod engine;
pub mod genre;
pub mod model;
pub mod render;
pub mod state;
pub mod util;
