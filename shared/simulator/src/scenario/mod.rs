mod supply_run;

use crate::simulation::Simulation;
use crate::vessel::VesselHandle;
use serde::{Deserialize, Serialize};

pub mod prelude {
    pub use super::Scenario;
    pub use super::Status;
    pub use super::{check_collision, check_delivery, check_supply_status};
    pub use super::{DELIVERY_TOLERANCE, SAFE_DISTANCE};
    pub use crate::simulation::Simulation;
    pub use crate::vessel::{
        self, cargo_ship, cruise_ship, small_cargo_ship, supply_ship, MotionRule, Role,
        VesselData, VesselHandle,
    };
    pub use nalgebra::{point, vector, Point3, Vector3};
    pub use std::f64::consts::{FRAC_PI_2, PI};
}

/// Half-width of the lane behind the target within which a delivery counts.
pub const DELIVERY_TOLERANCE: f64 = 60.0;
/// Axis-aligned box around each obstacle that the player must stay out of.
pub const SAFE_DISTANCE: f64 = 40.0;

#[derive(PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Copy, Clone)]
pub enum Status {
    Running,
    Victory,
    Failed,
}

pub trait Scenario {
    fn name(&self) -> String;

    fn human_name(&self) -> String {
        self.name()
    }

    fn init(&mut self, sim: &mut Simulation);

    fn status(&self, _: &Simulation) -> Status {
        Status::Running
    }
}

pub fn load_safe(name: &str) -> Option<Box<dyn Scenario>> {
    let scenario: Option<Box<dyn Scenario>> = match name {
        "supply_run" => Some(Box::new(supply_run::SupplyRun::new())),
        // Testing
        "test" => Some(Box::new(test::TestScenario {})),
        "basic" => Some(Box::new(test::BasicScenario::new())),
        "hazard" => Some(Box::new(test::HazardScenario::new())),
        "overlap" => Some(Box::new(test::OverlapScenario::new())),
        _ => None,
    };
    if let Some(scenario) = scenario.as_ref() {
        assert_eq!(scenario.name(), name);
    }
    scenario
}

pub fn load(name: &str) -> Box<dyn Scenario> {
    match load_safe(name) {
        Some(scenario) => scenario,
        None => panic!("Unknown scenario"),
    }
}

pub fn list() -> Vec<String> {
    vec!["supply_run"].iter().map(|x| x.to_string()).collect()
}

/// True when the player has come alongside the target: at or past it on x
/// and within the delivery lane on z. False whenever either vessel is
/// absent.
pub fn check_delivery(sim: &Simulation, player: VesselHandle, target: VesselHandle) -> bool {
    let (player, target) = match (sim.vessel(player), sim.vessel(target)) {
        (Some(player), Some(target)) => (player, target),
        _ => return false,
    };
    player.position.x >= target.position.x
        && (player.position.z - target.position.z).abs() < DELIVERY_TOLERANCE
}

/// True when any obstacle's safety box contains the player on both axes.
/// The check only applies once every obstacle has loaded.
pub fn check_collision(sim: &Simulation, player: VesselHandle, obstacles: &[VesselHandle]) -> bool {
    let player = match sim.vessel(player) {
        Some(player) => player,
        None => return false,
    };
    let mut loaded = Vec::with_capacity(obstacles.len());
    for &handle in obstacles {
        match sim.vessel(handle) {
            Some(obstacle) => loaded.push(obstacle),
            None => return false,
        }
    }
    loaded.iter().any(|obstacle| {
        (obstacle.position.x - player.position.x).abs() < SAFE_DISTANCE
            && (obstacle.position.z - player.position.z).abs() < SAFE_DISTANCE
    })
}

/// Delivery takes precedence: a frame satisfying both conditions is a win.
pub fn check_supply_status(
    sim: &Simulation,
    player: VesselHandle,
    target: VesselHandle,
    obstacles: &[VesselHandle],
) -> Status {
    if check_delivery(sim, player, target) {
        Status::Victory
    } else if check_collision(sim, player, obstacles) {
        Status::Failed
    } else {
        Status::Running
    }
}
