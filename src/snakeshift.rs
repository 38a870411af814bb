//! Main module for snakeshift library functionality

pub mod convert;
pub mod process;
