use nalgebra::{point, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Orbit radius around the player, in world units.
pub const DISTANCE: f64 = 100.0;
/// Height of the follow camera above the water.
pub const HEIGHT: f64 = 35.0;

/// Follow-behind camera. The position is tracked incrementally: forward and
/// back translations are shared 1:1 with the player, and turn input orbits
/// the camera around the player at a fixed radius. `orbit_angle` is the
/// camera's own accumulated angle and also gives the player's direction of
/// travel; it is decoupled in sign from the vessel heading.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CameraRig {
    pub position: Point3<f64>,
    pub look_target: Point3<f64>,
    pub orbit_angle: f64,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: point![-DISTANCE, HEIGHT, 0.0],
            look_target: Point3::origin(),
            orbit_angle: 0.0,
        }
    }

    pub fn look_at(&mut self, target: Point3<f64>) {
        self.look_target = target;
    }

    pub fn translate(&mut self, delta: Vector3<f64>) {
        self.position += delta;
    }

    /// Moves one step along the orbit chord, counterclockwise. The deltas
    /// are computed from the post-update angle; `orbit_angle + step` is the
    /// angle the camera is leaving.
    pub fn orbit_left(&mut self, step: f64) {
        self.orbit_angle -= step;
        let a = self.orbit_angle;
        self.position.x -= DISTANCE * (a.cos() - (a + step).cos());
        self.position.z += DISTANCE * ((a + step).sin() - a.sin());
    }

    /// Mirror of `orbit_left` with the signs flipped.
    pub fn orbit_right(&mut self, step: f64) {
        self.orbit_angle += step;
        let a = self.orbit_angle;
        self.position.x += DISTANCE * (a.cos() - (a + step).cos());
        self.position.z -= DISTANCE * ((a + step).sin() - a.sin());
    }

    /// One-shot reposition used when the end-of-game banner is shown.
    pub fn snap_to(&mut self, position: Point3<f64>, target: Point3<f64>) {
        self.position = position;
        self.look_target = target;
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        CameraRig::new()
    }
}
