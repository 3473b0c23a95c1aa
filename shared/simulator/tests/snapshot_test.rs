use supplyrun_simulator::scenario::Status;
use supplyrun_simulator::simulation::Simulation;
use supplyrun_simulator::snapshot::Snapshot;
use test_log::test;

#[test]
fn test_pending_vessels_are_omitted() {
    let mut sim = Simulation::new("supply_run");
    assert_eq!(sim.pending_assets().len(), 5);
    assert!(sim.snapshot().vessels.is_empty());

    for (handle, _) in sim.pending_assets() {
        sim.asset_ready(handle);
    }
    assert!(sim.pending_assets().is_empty());
    assert_eq!(sim.snapshot().vessels.len(), 5);
}

#[test]
fn test_snapshot_round_trips_through_json() {
    let mut sim = Simulation::new("supply_run");
    for (handle, _) in sim.pending_assets() {
        sim.asset_ready(handle);
    }
    for _ in 0..10 {
        sim.step();
    }

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.status, Status::Running);
    assert_eq!(snapshot.tick, 10);

    let json = serde_json::to_string(&snapshot).unwrap();
    let decoded: Snapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.vessels.len(), snapshot.vessels.len());
    assert_eq!(decoded.camera.position, snapshot.camera.position);
    assert!(decoded.banner.is_none());
}

#[test]
fn test_banner_appears_in_snapshot_after_end() {
    let mut sim = Simulation::new("hazard");
    sim.step();
    assert_eq!(sim.status(), Status::Failed);

    let snapshot = sim.snapshot();
    assert_eq!(snapshot.status, Status::Failed);
    let banner = snapshot.banner.unwrap();
    assert_eq!(banner.position, nalgebra::point![-8000.0, 20.0, 0.0]);
    assert_eq!(snapshot.camera.position, nalgebra::point![-8060.0, 40.0, 0.0]);
}
