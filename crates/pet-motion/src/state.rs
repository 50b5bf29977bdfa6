//! Per-pet motion state.

use pet_core::Vec2;

use crate::bounds::DesktopBounds;
use crate::steering::SNAP_THRESHOLD_PX;

/// The motion state for a single pet.
///
/// `position` is the on-screen coordinate mutated every tick; `target` is the
/// point the pet currently steers toward, replaced by the retarget timer or
/// at drag release.  While `held` is `true` the drag handler is the sole
/// writer of `position` — the autonomous step never touches it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MotionState {
    /// Current on-screen coordinate.
    pub position: Vec2,

    /// The point the pet steers toward.  Pinned to the resting surface
    /// (`target.y == resting_surface_y`) while gravity is armed.
    pub target: Vec2,

    /// Render-only horizontal mirroring flag; updated whenever a new target
    /// is chosen.  Has no effect on motion math.
    pub facing_left: bool,

    /// `true` while the user is dragging the pet.
    pub held: bool,
}

impl MotionState {
    /// Construct an idle state at `spawn` (target equals position).
    pub fn at(spawn: Vec2) -> Self {
        Self {
            position:    spawn,
            target:      spawn,
            facing_left: false,
            held:        false,
        }
    }

    /// Replace the steering target and update the facing flag.
    pub fn retarget(&mut self, target: Vec2) {
        self.facing_left = target.x < self.position.x;
        self.target = target;
    }

    /// Pin the target to the resting surface directly below the drop point,
    /// arming the falling branch.
    pub fn arm_gravity(&mut self, bounds: &DesktopBounds) {
        self.target = Vec2::new(self.position.x, bounds.resting_surface_y());
    }

    /// Select the motion mode for the current tick.
    pub fn mode(&self, bounds: &DesktopBounds) -> MotionMode {
        if self.held {
            return MotionMode::Held;
        }
        let surface = bounds.resting_surface_y();
        if self.target.y >= surface && surface - self.position.y > SNAP_THRESHOLD_PX {
            MotionMode::Falling
        } else {
            MotionMode::Steering
        }
    }
}

/// Which branch of the motion step runs this tick.
///
/// Exactly one mode is active per tick; see the crate-level docs for the
/// selection rule.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MotionMode {
    /// Dragged by the user; autonomous motion suspended.
    Held,
    /// Above a surface-pinned target; descending under gravity.
    Falling,
    /// Chasing a roam target (or already at it).
    Steering,
}
