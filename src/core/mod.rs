pub mod engine;
pub mod game;
pub mod renderer; // Injection traits
pub mod terminal; // Terminal context wrapper
