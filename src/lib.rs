#![cfg_attr(not(feature = "std"), no_std)]

mod ai;
mod bitboard;
mod board;
mod common;
mod config;
mod controller;
mod engine;
mod player;
mod player_ai;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;

pub use ai::*;
pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use engine::*;
pub use player::*;
pub use player_ai::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::*;
