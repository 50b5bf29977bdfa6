//! One tick of pet movement.

use crate::bounds::DesktopBounds;
use crate::state::{MotionMode, MotionState};

/// Remaining distance below which the position is set exactly equal to the
/// target instead of continuing incremental movement.  Terminates the chase
/// without an infinite asymptotic approach.
pub const SNAP_THRESHOLD_PX: f32 = 2.0;

/// Gravity gain: the falling step is this fraction of the remaining distance
/// to the surface, so the descent accelerates the further the pet has to fall.
const FALL_GAIN: f32 = 0.25;

/// Minimum falling step, so the descent terminates instead of decaying
/// asymptotically near the surface.
const FALL_MIN_STEP_PX: f32 = 1.0;

/// Cap on the falling step; this is not a full physics model, just a
/// monotone approach.
const FALL_MAX_STEP_PX: f32 = 12.0;

/// What the motion step did this tick.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Pet is held by the user; position untouched.
    Held,
    /// Already at the target; nothing to do.
    Idle,
    /// Position advanced (steering or falling).
    Moved,
    /// The falling branch reached the resting surface this tick.
    Landed,
}

/// Advance `state` by one tick at `speed` pixels per tick.
///
/// Dispatches on [`MotionState::mode`]:
///
/// - **Held**: no-op.
/// - **Falling**: `y` increases by `clamp(0.25 × remaining, 1, 12)` capped at
///   the remaining distance — monotone, never past the surface.  `x` is left
///   unchanged.  Within the snap threshold of the surface, `y` is set exactly
///   and [`StepOutcome::Landed`] is reported.
/// - **Steering**: within the snap threshold the position snaps exactly onto
///   the target; otherwise it advances by `min(speed, distance)` along the
///   unit vector toward the target, which also guards the zero-distance case.
pub fn step(state: &mut MotionState, bounds: &DesktopBounds, speed: f32) -> StepOutcome {
    match state.mode(bounds) {
        MotionMode::Held => StepOutcome::Held,

        MotionMode::Falling => {
            let surface = bounds.resting_surface_y();
            let remaining = surface - state.position.y;
            let fall = (remaining * FALL_GAIN)
                .clamp(FALL_MIN_STEP_PX, FALL_MAX_STEP_PX)
                .min(remaining);
            state.position.y += fall;

            if surface - state.position.y <= SNAP_THRESHOLD_PX {
                state.position.y = surface;
                StepOutcome::Landed
            } else {
                StepOutcome::Moved
            }
        }

        MotionMode::Steering => {
            let distance = state.position.distance(state.target);
            if distance == 0.0 {
                return StepOutcome::Idle;
            }
            if distance <= SNAP_THRESHOLD_PX {
                state.position = state.target;
                return StepOutcome::Moved;
            }
            let advance = speed.min(distance);
            let delta = (state.target - state.position) * (advance / distance);
            state.position += delta;
            StepOutcome::Moved
        }
    }
}
