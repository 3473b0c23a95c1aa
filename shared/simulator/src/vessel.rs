use crate::simulation::{Simulation, BACK_SPEED, FORWARD_SPEED, ROTATE_SPEED};
use nalgebra::{vector, Point3, Vector3};
use serde::{Deserialize, Serialize};

#[derive(Hash, PartialEq, Eq, Copy, Clone, Debug)]
pub struct VesselHandle(pub usize);

impl From<VesselHandle> for u64 {
    fn from(handle: VesselHandle) -> u64 {
        handle.0 as u64
    }
}

/// Identifies the model asset the loader fetches for this vessel.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize, Debug)]
pub enum VesselClass {
    SupplyShip,
    CruiseShip,
    CargoShip,
    SmallCargoShip,
}

impl VesselClass {
    pub fn name(&self) -> &'static str {
        match self {
            VesselClass::SupplyShip => "supply_ship",
            VesselClass::CruiseShip => "cruise_ship",
            VesselClass::CargoShip => "cargo_ship",
            VesselClass::SmallCargoShip => "small_cargo_ship",
        }
    }
}

/// Immutable after creation. Exactly one vessel has role Player and exactly
/// one has role Target; the rest are obstacles.
#[derive(Clone, Copy, Hash, Eq, PartialEq, Debug)]
pub enum Role {
    Player,
    Target,
    Obstacle,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum MotionRule {
    /// Driven by the frame's input flags, coupled to the camera rig.
    PlayerControlled,
    /// Constant scripted drift, world units per frame. The y component is
    /// unused; bobbing overwrites y every frame.
    Drift { velocity: Vector3<f64> },
    /// Bobbing only.
    Stationary,
}

#[derive(Clone, Debug)]
pub struct VesselData {
    pub class: VesselClass,
    pub role: Role,
    pub motion: MotionRule,
    pub position: Point3<f64>,
    pub heading: f64,
    pub bob_amplitude: f64,
    pub bob_offset: f64,
}

impl Default for VesselData {
    fn default() -> VesselData {
        VesselData {
            class: VesselClass::SupplyShip,
            role: Role::Obstacle,
            motion: MotionRule::Stationary,
            position: Point3::origin(),
            heading: 0.0,
            bob_amplitude: 0.0,
            bob_offset: 0.0,
        }
    }
}

/// One registry slot. A vessel whose model asset has not finished loading
/// reads as absent everywhere; its motion and outcome rules never run.
pub(crate) struct VesselSlot {
    pub(crate) data: VesselData,
    pub(crate) loaded: bool,
}

pub fn supply_ship() -> VesselData {
    VesselData {
        class: VesselClass::SupplyShip,
        bob_amplitude: 3.0,
        bob_offset: 1.5,
        ..Default::default()
    }
}

pub fn cruise_ship() -> VesselData {
    VesselData {
        class: VesselClass::CruiseShip,
        bob_amplitude: 3.0,
        bob_offset: 1.5,
        ..Default::default()
    }
}

pub fn cargo_ship() -> VesselData {
    VesselData {
        class: VesselClass::CargoShip,
        bob_amplitude: 2.0,
        bob_offset: -15.0,
        ..Default::default()
    }
}

pub fn small_cargo_ship() -> VesselData {
    VesselData {
        class: VesselClass::SmallCargoShip,
        bob_amplitude: 2.0,
        bob_offset: 10.0,
        ..Default::default()
    }
}

/// Registers a vessel slot whose asset is still loading. The handle is live
/// immediately; the vessel itself stays absent until
/// `Simulation::asset_ready` completes the load.
pub fn reserve(
    sim: &mut Simulation,
    position: Point3<f64>,
    heading: f64,
    data: VesselData,
) -> VesselHandle {
    let mut data = data;
    data.position = position;
    data.heading = heading;
    let handle = VesselHandle(sim.vessels.len());
    sim.vessels.push(VesselSlot {
        data,
        loaded: false,
    });
    handle
}

/// Creates a vessel whose asset is already available.
pub fn create(
    sim: &mut Simulation,
    position: Point3<f64>,
    heading: f64,
    data: VesselData,
) -> VesselHandle {
    let handle = reserve(sim, position, heading, data);
    sim.asset_ready(handle);
    handle
}

/// Motion engine. Runs once per frame over every loaded vessel in registry
/// order. Scripted vessels keep moving after the game ends; only the player
/// stops, because the ended game freezes the input flags.
pub fn tick(sim: &mut Simulation) {
    let time = sim.time();
    for handle in sim.handles() {
        let motion = match sim.vessel(handle) {
            Some(vessel) => vessel.motion,
            None => continue,
        };
        match motion {
            MotionRule::PlayerControlled => tick_player(sim, handle, time),
            MotionRule::Drift { velocity } => {
                let vessel = sim.vessel_mut(handle).unwrap();
                bob(vessel, time);
                vessel.position += velocity;
            }
            MotionRule::Stationary => {
                bob(sim.vessel_mut(handle).unwrap(), time);
            }
        }
    }
}

fn bob(vessel: &mut VesselData, time: f64) {
    vessel.position.y = time.sin() * vessel.bob_amplitude + vessel.bob_offset;
}

fn tick_player(sim: &mut Simulation, handle: VesselHandle, time: f64) {
    let input = sim.input;

    let position = {
        let vessel = sim.vessel_mut(handle).unwrap();
        bob(vessel, time);
        vessel.position
    };
    sim.camera.look_at(position);

    // Forward and back read the orbit angle as of this instant; a rotation
    // in the same frame takes effect on the next frame's translation.
    if input.forward {
        let angle = sim.camera.orbit_angle;
        let delta = vector![FORWARD_SPEED * angle.cos(), 0.0, FORWARD_SPEED * angle.sin()];
        sim.vessel_mut(handle).unwrap().position += delta;
        sim.camera.translate(delta);
    }
    if input.back {
        let angle = sim.camera.orbit_angle;
        let delta = vector![BACK_SPEED * angle.cos(), 0.0, BACK_SPEED * angle.sin()];
        sim.vessel_mut(handle).unwrap().position -= delta;
        sim.camera.translate(-delta);
    }
    if input.rotate_left {
        sim.vessel_mut(handle).unwrap().heading += ROTATE_SPEED;
        sim.camera.orbit_left(ROTATE_SPEED);
    }
    if input.rotate_right {
        sim.vessel_mut(handle).unwrap().heading -= ROTATE_SPEED;
        sim.camera.orbit_right(ROTATE_SPEED);
    }
}
