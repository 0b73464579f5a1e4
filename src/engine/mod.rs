pub mod cli;
pub mod ecs;
pub mod graphics;
pub mod parts;
pub mod vehicle;
