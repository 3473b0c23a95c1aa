use crate::scenario::Status;
use crate::simulation::Banner;
use crate::vessel::VesselClass;
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Everything the render collaborator needs for one frame: vessel
/// transforms, the camera transform, and the end-of-game banner if any.
/// Vessels whose assets are still loading are omitted.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Snapshot {
    pub time: f64,
    pub tick: u32,
    pub status: Status,
    pub vessels: Vec<VesselSnapshot>,
    pub camera: CameraSnapshot,
    pub banner: Option<Banner>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VesselSnapshot {
    pub id: u64,
    pub class: VesselClass,
    pub position: Point3<f64>,
    pub heading: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CameraSnapshot {
    pub position: Point3<f64>,
    pub look_target: Point3<f64>,
}
