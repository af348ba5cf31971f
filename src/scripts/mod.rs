// src/scripts/mod.rs
pub mod scaffold;
pub mod screen;
pub mod feature;
