use super::prelude::*;

/// The shipping scenario: pilot the supply ship alongside the cruise liner
/// without straying into the path of the other traffic. All five vessel
/// slots are reserved pending; the asset collaborator completes each load.
pub struct SupplyRun {
    player: Option<VesselHandle>,
    target: Option<VesselHandle>,
    obstacles: Vec<VesselHandle>,
}

impl SupplyRun {
    pub fn new() -> Self {
        Self {
            player: None,
            target: None,
            obstacles: vec![],
        }
    }
}

impl Scenario for SupplyRun {
    fn name(&self) -> String {
        "supply_run".into()
    }

    fn human_name(&self) -> String {
        "Supply the Cruise".into()
    }

    fn init(&mut self, sim: &mut Simulation) {
        self.player = Some(vessel::reserve(
            sim,
            point![0.0, 0.0, 0.0],
            -FRAC_PI_2,
            VesselData {
                role: Role::Player,
                motion: MotionRule::PlayerControlled,
                bob_offset: 1.0,
                ..supply_ship()
            },
        ));
        self.target = Some(vessel::reserve(
            sim,
            point![150.0, 0.0, -50.0],
            -FRAC_PI_2,
            VesselData {
                role: Role::Target,
                motion: MotionRule::Drift {
                    velocity: vector![0.7, 0.0, 0.0],
                },
                ..cruise_ship()
            },
        ));
        self.obstacles = vec![
            vessel::reserve(
                sim,
                point![200.0, 0.0, 200.0],
                0.0,
                VesselData {
                    role: Role::Obstacle,
                    motion: MotionRule::Drift {
                        velocity: vector![0.0, 0.0, -0.5],
                    },
                    ..supply_ship()
                },
            ),
            vessel::reserve(
                sim,
                point![1000.0, 0.0, 400.0],
                -5.0 * PI / 4.0,
                VesselData {
                    role: Role::Obstacle,
                    motion: MotionRule::Drift {
                        velocity: vector![-0.4, 0.0, -0.4],
                    },
                    ..cargo_ship()
                },
            ),
            vessel::reserve(
                sim,
                point![1200.0, 0.0, -1000.0],
                -3.0 * FRAC_PI_2,
                VesselData {
                    role: Role::Obstacle,
                    motion: MotionRule::Drift {
                        velocity: vector![0.0, 0.0, 0.4],
                    },
                    ..small_cargo_ship()
                },
            ),
        ];
    }

    fn status(&self, sim: &Simulation) -> Status {
        match (self.player, self.target) {
            (Some(player), Some(target)) => {
                check_supply_status(sim, player, target, &self.obstacles)
            }
            _ => Status::Running,
        }
    }
}
