//! Host container geometry.
//!
//! The desktop is a plain rectangle in pixel coordinates (y grows downward)
//! with a taskbar strip along the bottom edge.  Pets read the geometry; they
//! never write it.  The container is re-measured by the embedding application
//! on resize and pushed down via `Desktop::resize`.

use pet_core::{PetRng, Vec2};

/// Horizontal margin kept clear of the left/right container edges when
/// choosing roam targets.
pub const EDGE_MARGIN_PX: f32 = 50.0;

/// Top margin of the roam region (keeps pets out of the menu-bar area).
pub const ROAM_TOP_MARGIN_PX: f32 = 100.0;

/// Bottom margin of the roam region (keeps roam targets out of the band just
/// above the taskbar, so walking pets don't graze it).
pub const ROAM_BOTTOM_MARGIN_PX: f32 = 150.0;

/// Vertical band above the taskbar line within which a pet counts as sitting
/// on the surface.
pub const SURFACE_BAND_PX: f32 = 20.0;

/// Reference taskbar height.
pub const DEFAULT_TASKBAR_HEIGHT_PX: f32 = 48.0;

/// Measured geometry of the desktop container.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesktopBounds {
    /// Container width in pixels.
    pub width: f32,
    /// Container height in pixels, taskbar included.
    pub height: f32,
    /// Height of the taskbar strip along the bottom edge.
    pub taskbar_height: f32,
}

impl DesktopBounds {
    /// Bounds with the reference 48 px taskbar.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            taskbar_height: DEFAULT_TASKBAR_HEIGHT_PX,
        }
    }

    pub fn with_taskbar_height(mut self, taskbar_height: f32) -> Self {
        self.taskbar_height = taskbar_height;
        self
    }

    /// The y coordinate of the taskbar line — the resting surface pets
    /// gravitate back to when released above it.
    #[inline]
    pub fn resting_surface_y(&self) -> f32 {
        self.height - self.taskbar_height
    }

    /// `true` if a pet at vertical position `y` is sitting on (or within the
    /// surface band above) the taskbar line.
    #[inline]
    pub fn on_surface(&self, y: f32) -> bool {
        self.resting_surface_y() - y <= SURFACE_BAND_PX
    }

    /// Clamp a point into the container: `x ∈ [0, width]`,
    /// `y ∈ [0, resting_surface_y]`.  The y cap keeps pets from sinking into
    /// or below the taskbar.
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(0.0, self.width.max(0.0)),
            p.y.clamp(0.0, self.resting_surface_y().max(0.0)),
        )
    }

    // ── Roam region ───────────────────────────────────────────────────────

    /// Choose a roam target uniformly at random within the margin-bounded
    /// region.
    ///
    /// Degenerate containers (smaller than the margins) collapse the affected
    /// axis to its clamped midpoint instead of sampling an inverted range.
    pub fn sample_roam_target(&self, rng: &mut PetRng) -> Vec2 {
        let x = sample_axis(rng, EDGE_MARGIN_PX, self.width - EDGE_MARGIN_PX, self.width);
        let y = sample_axis(
            rng,
            ROAM_TOP_MARGIN_PX,
            self.height - ROAM_BOTTOM_MARGIN_PX,
            self.resting_surface_y(),
        );
        Vec2::new(x, y)
    }

    /// `true` if `p` lies within the roam region (used by tests and by
    /// callers validating externally supplied targets).
    pub fn in_roam_region(&self, p: Vec2) -> bool {
        p.x >= EDGE_MARGIN_PX
            && p.x <= self.width - EDGE_MARGIN_PX
            && p.y >= ROAM_TOP_MARGIN_PX
            && p.y <= self.height - ROAM_BOTTOM_MARGIN_PX
    }
}

/// Uniform sample in `[min, max]`, collapsing to the clamped midpoint when the
/// range is empty.
fn sample_axis(rng: &mut PetRng, min: f32, max: f32, limit: f32) -> f32 {
    if max > min {
        rng.gen_range(min..=max)
    } else {
        (limit * 0.5).clamp(0.0, limit.max(0.0))
    }
}
