#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
pub mod agent;
pub mod board;
pub mod cell;
pub mod knowledge;
pub mod selection;
pub mod sentence;
