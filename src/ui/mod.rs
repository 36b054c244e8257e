pub mod mvi;
pub mod render;
pub mod screens;
