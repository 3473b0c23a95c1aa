use approx::assert_abs_diff_eq;
use supplyrun_simulator::color;
use supplyrun_simulator::scenario::Status;
use supplyrun_simulator::simulation::{Simulation, FAILURE_MESSAGE, VICTORY_MESSAGE};
use supplyrun_simulator::vessel::VesselClass;
use test_log::test;

#[test]
fn test_delivery_victory() {
    let mut sim = Simulation::new("basic");
    sim.on_key_down("KeyW");

    let mut i = 0;
    while sim.status() == Status::Running && i < 1000 {
        sim.step();
        i += 1;
    }

    assert_eq!(sim.status(), Status::Victory);
    assert_eq!(sim.tick(), 150);

    let player = sim.player().unwrap();
    assert_abs_diff_eq!(sim.vessel(player).unwrap().position.x, 150.0, epsilon = 1e-9);

    let banner = sim.banner().unwrap();
    assert_eq!(banner.text, VICTORY_MESSAGE);
    assert_eq!(banner.color, color::from_u24(0x008000));
}

#[test]
fn test_collision_failure() {
    let mut sim = Simulation::new("hazard");
    sim.step();

    assert_eq!(sim.status(), Status::Failed);
    let banner = sim.banner().unwrap();
    assert_eq!(banner.text, FAILURE_MESSAGE);
    assert_eq!(banner.color, color::from_u24(0xff0000));
}

#[test]
fn test_simultaneous_win_and_loss_is_a_win() {
    let mut sim = Simulation::new("overlap");
    sim.step();
    assert_eq!(sim.status(), Status::Victory);
}

#[test]
fn test_transition_is_one_shot() {
    let mut sim = Simulation::new("hazard");
    sim.step();
    assert_eq!(sim.status(), Status::Failed);
    let banner = sim.banner().unwrap().clone();

    for _ in 0..100 {
        sim.on_key_down("KeyW");
        sim.on_key_down("KeyA");
        sim.step();
    }

    assert_eq!(sim.status(), Status::Failed);
    assert_eq!(*sim.banner().unwrap(), banner);
    assert_eq!(sim.input, Default::default());
}

#[test]
fn test_missing_target_is_safe() {
    let mut sim = Simulation::new("supply_run");
    for (handle, class) in sim.pending_assets() {
        if class != VesselClass::CruiseShip {
            sim.asset_ready(handle);
        }
    }

    for _ in 0..200 {
        sim.step();
    }

    assert_eq!(sim.status(), Status::Running);
    assert!(sim.banner().is_none());
}

#[test]
fn test_scripted_vessels_keep_moving_after_end() {
    let mut sim = Simulation::new("supply_run");
    for (handle, _) in sim.pending_assets() {
        sim.asset_ready(handle);
    }
    // Drive the player into the drifting supply freighter's box.
    let player = sim.player().unwrap();
    sim.vessel_mut(player).unwrap().position = nalgebra::point![200.0, 0.0, 180.0];
    sim.step();
    assert_eq!(sim.status(), Status::Failed);

    let before = sim.snapshot();
    for _ in 0..10 {
        sim.step();
    }
    let after = sim.snapshot();

    // The target drifts +0.7 on x per frame, ended or not.
    let x = |s: &supplyrun_simulator::snapshot::Snapshot| {
        s.vessels
            .iter()
            .find(|v| v.class == VesselClass::CruiseShip)
            .unwrap()
            .position
            .x
    };
    assert_abs_diff_eq!(x(&after) - x(&before), 7.0, epsilon = 1e-9);
}
