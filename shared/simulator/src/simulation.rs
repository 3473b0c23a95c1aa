use crate::camera::CameraRig;
use crate::color;
use crate::input::{InputState, Key};
use crate::scenario::{self, Scenario, Status};
use crate::snapshot::{CameraSnapshot, Snapshot, VesselSnapshot};
use crate::vessel::{self, Role, VesselClass, VesselData, VesselHandle};
use nalgebra::{point, Point3, Vector4};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// One animation callback contributes a fixed 1/60s regardless of the actual
/// frame duration, so all periodic motion is frame-count based.
pub const TICK_LENGTH: f64 = 1.0 / 60.0;
pub const FORWARD_SPEED: f64 = 1.0;
pub const BACK_SPEED: f64 = 0.7;
pub const ROTATE_SPEED: f64 = 0.01;

pub const VICTORY_MESSAGE: &str = "target reached, mission complete";
pub const FAILURE_MESSAGE: &str = "collision occurred, mission failed";

pub struct Simulation {
    scenario: Option<Box<dyn Scenario>>,
    pub(crate) vessels: Vec<vessel::VesselSlot>,
    pub input: InputState,
    pub camera: CameraRig,
    status: Status,
    banner: Option<Banner>,
    tick: u32,
}

impl Simulation {
    pub fn new(scenario_name: &str) -> Box<Simulation> {
        let mut sim = Box::new(Simulation {
            scenario: None,
            vessels: Vec::new(),
            input: InputState::default(),
            camera: CameraRig::new(),
            status: Status::Running,
            banner: None,
            tick: 0,
        });

        let mut scenario = scenario::load(scenario_name);
        log::info!("starting scenario {}", scenario.name());
        scenario.init(&mut sim);
        sim.scenario = Some(scenario);

        sim
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn time(&self) -> f64 {
        self.tick as f64 * TICK_LENGTH
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    pub fn vessel(&self, handle: VesselHandle) -> Option<&VesselData> {
        match self.vessels.get(handle.0) {
            Some(slot) if slot.loaded => Some(&slot.data),
            _ => None,
        }
    }

    pub fn vessel_mut(&mut self, handle: VesselHandle) -> Option<&mut VesselData> {
        match self.vessels.get_mut(handle.0) {
            Some(slot) if slot.loaded => Some(&mut slot.data),
            _ => None,
        }
    }

    pub fn handles(&self) -> Vec<VesselHandle> {
        (0..self.vessels.len()).map(VesselHandle).collect()
    }

    pub fn player(&self) -> Option<VesselHandle> {
        self.handles()
            .into_iter()
            .find(|&handle| matches!(self.vessel(handle), Some(v) if v.role == Role::Player))
    }

    /// Vessel slots whose model asset has not finished loading. The asset
    /// collaborator resolves each one with `asset_ready`; a load that never
    /// completes just leaves its vessel permanently absent.
    pub fn pending_assets(&self) -> Vec<(VesselHandle, VesselClass)> {
        self.vessels
            .iter()
            .enumerate()
            .filter(|(_, slot)| !slot.loaded)
            .map(|(i, slot)| (VesselHandle(i), slot.data.class))
            .collect()
    }

    pub fn asset_ready(&mut self, handle: VesselHandle) {
        if let Some(slot) = self.vessels.get_mut(handle.0) {
            log::debug!("asset ready: {}", slot.data.class.name());
            slot.loaded = true;
        }
    }

    /// Key-down is latched off once the game has ended.
    pub fn on_key_down(&mut self, code: &str) {
        if self.status != Status::Running {
            return;
        }
        if let Some(key) = Key::from_code(code) {
            self.input.press(key);
        }
    }

    /// Key-up always clears the flag, ended or not.
    pub fn on_key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            self.input.release(key);
        }
    }

    pub fn step(&mut self) {
        vessel::tick(self);
        self.check_outcome();
        self.tick += 1;
    }

    fn check_outcome(&mut self) {
        if self.status != Status::Running {
            return;
        }
        let status = self.scenario.as_ref().unwrap().status(self);
        if status != Status::Running {
            self.end_game(status);
        }
    }

    /// One-shot terminal transition: freezes input, builds the message
    /// banner, and snaps the camera to look at it.
    fn end_game(&mut self, status: Status) {
        log::info!("game over: {:?}", status);
        self.status = status;
        self.input.clear();
        if let Some(banner) = Banner::for_status(status) {
            self.camera
                .snap_to(point![-8060.0, 40.0, 0.0], banner.position);
            self.banner = Some(banner);
        }
    }

    pub fn hash(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::Hasher;
        let fixedpoint = |v: f64| (v * 1e9) as i64;
        let mut s = DefaultHasher::new();
        for handle in self.handles() {
            if let Some(vessel) = self.vessel(handle) {
                s.write_i64(fixedpoint(vessel.position.x));
                s.write_i64(fixedpoint(vessel.position.y));
                s.write_i64(fixedpoint(vessel.position.z));
                s.write_i64(fixedpoint(vessel.heading));
            }
        }
        s.write_i64(fixedpoint(self.camera.position.x));
        s.write_i64(fixedpoint(self.camera.position.y));
        s.write_i64(fixedpoint(self.camera.position.z));
        s.write_i64(fixedpoint(self.camera.orbit_angle));
        s.finish()
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut snapshot = Snapshot {
            time: self.time(),
            tick: self.tick,
            status: self.status,
            vessels: vec![],
            camera: CameraSnapshot {
                position: self.camera.position,
                look_target: self.camera.look_target,
            },
            banner: self.banner.clone(),
        };

        for handle in self.handles() {
            if let Some(vessel) = self.vessel(handle) {
                snapshot.vessels.push(VesselSnapshot {
                    id: handle.into(),
                    class: vessel.class,
                    position: vessel.position,
                    heading: vessel.heading,
                });
            }
        }

        snapshot
    }
}

/// Static text-on-texture panel shown when the game ends, placed at a fixed
/// off-track world location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub text: String,
    pub color: Vector4<f32>,
    pub position: Point3<f64>,
    pub heading: f64,
}

impl Banner {
    pub fn for_status(status: Status) -> Option<Banner> {
        let (text, color) = match status {
            Status::Running => return None,
            Status::Victory => (VICTORY_MESSAGE, color::from_u24(0x008000)),
            Status::Failed => (FAILURE_MESSAGE, color::from_u24(0xff0000)),
        };
        Some(Banner {
            text: text.to_string(),
            color,
            position: point![-8000.0, 20.0, 0.0],
            heading: -FRAC_PI_2,
        })
    }
}
