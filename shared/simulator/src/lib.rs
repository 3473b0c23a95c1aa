pub mod camera;
pub mod color;
pub mod input;
pub mod scenario;
pub mod simulation;
pub mod snapshot;
pub mod vessel;
