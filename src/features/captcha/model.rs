//! Drag state machine for the slider verification challenge. The model is
//! pure: pointer coordinates and element widths come in, offsets and a
//! pass/fail decision come out. The rendering layer owns randomness, CSS,
//! and event wiring.
//!
//! The challenge is a UX friction device, not a security control. The
//! decision is client-local and trivially bypassable; anything that needs a
//! real guarantee must verify a signed challenge on the server.

/// Maximum pixel distance between handle and target centers for a release
/// to count as verified.
pub const PASS_TOLERANCE_PX: f64 = 15.0;

/// Distance under which the target marker lights up during a drag. Purely
/// cosmetic; never part of the pass/fail decision.
pub const NEAR_TOLERANCE_PX: f64 = 30.0;

/// Lower bound of the random target position, in percent of the sliding area.
pub const TARGET_MIN_PERCENT: f64 = 60.0;

/// Width of the random target window, in percent. Targets land in [60, 80).
pub const TARGET_SPAN_PERCENT: f64 = 20.0;

/// Live-measured widths of the track and handle, in pixels. Re-resolved at
/// drag end so the decision tolerates layout reflow between init and release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackGeometry {
    pub track_width: f64,
    pub handle_width: f64,
}

impl TrackGeometry {
    pub fn new(track_width: f64, handle_width: f64) -> Self {
        Self {
            track_width,
            handle_width,
        }
    }

    /// Rightmost handle offset: the handle slides inside the track.
    pub fn max_offset(&self) -> f64 {
        (self.track_width - self.handle_width).max(0.0)
    }

    /// Target offset in pixels for a target expressed as a percentage of the
    /// sliding area.
    pub fn target_offset(&self, target_percent: f64) -> f64 {
        target_percent / 100.0 * self.max_offset()
    }

    /// Pixel-space midpoint of the handle at the given offset.
    pub fn center(&self, offset: f64) -> f64 {
        offset + self.handle_width / 2.0
    }
}

/// Maps a uniform sample in [0, 1) to a whole-percent target in [60, 80).
pub fn target_percent_from_unit(unit: f64) -> f64 {
    let clamped = unit.clamp(0.0, 1.0);
    (TARGET_MIN_PERCENT + clamped * TARGET_SPAN_PERCENT)
        .floor()
        .min(TARGET_MIN_PERCENT + TARGET_SPAN_PERCENT - 1.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Drag {
    pointer_start: f64,
    offset_start: f64,
}

/// Result of releasing the handle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ReleaseOutcome {
    /// Close enough: the handle snaps to the exact target offset and the
    /// challenge locks until reset.
    Verified { snap_offset: f64 },
    /// Too far: the handle reverts to the origin and the same target stays
    /// in place for the next attempt.
    Rejected,
}

/// Position update produced while a drag is active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragUpdate {
    pub offset: f64,
    pub near_target: bool,
}

/// One slider challenge instance.
///
/// Once `verified` turns true, all further drag input is ignored until
/// [`SliderChallenge::reset_with`] re-seeds the target.
#[derive(Clone, Debug, PartialEq)]
pub struct SliderChallenge {
    target_percent: f64,
    offset: f64,
    verified: bool,
    drag: Option<Drag>,
}

impl SliderChallenge {
    pub fn new(target_percent: f64) -> Self {
        Self {
            target_percent: clamp_target(target_percent),
            offset: 0.0,
            verified: false,
            drag: None,
        }
    }

    /// Builds a challenge from a uniform random sample in [0, 1).
    pub fn from_unit(unit: f64) -> Self {
        Self::new(target_percent_from_unit(unit))
    }

    pub fn target_percent(&self) -> f64 {
        self.target_percent
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn verified(&self) -> bool {
        self.verified
    }

    pub fn dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Starts a drag at the given pointer coordinate. Returns false when the
    /// challenge is already verified and input is ignored.
    pub fn begin_drag(&mut self, pointer_x: f64) -> bool {
        if self.verified {
            return false;
        }
        self.drag = Some(Drag {
            pointer_start: pointer_x,
            offset_start: self.offset,
        });
        true
    }

    /// Tracks pointer movement, clamping the handle to the sliding area.
    /// Returns `None` when no drag is active.
    pub fn drag_to(&mut self, pointer_x: f64, geometry: TrackGeometry) -> Option<DragUpdate> {
        if self.verified {
            return None;
        }
        let drag = self.drag?;
        let delta = pointer_x - drag.pointer_start;
        self.offset = (drag.offset_start + delta).clamp(0.0, geometry.max_offset());

        let handle_center = geometry.center(self.offset);
        let target_center = geometry.center(geometry.target_offset(self.target_percent));
        Some(DragUpdate {
            offset: self.offset,
            near_target: (handle_center - target_center).abs() < NEAR_TOLERANCE_PX,
        })
    }

    /// Ends the drag and decides the challenge from the final handle center.
    /// Geometry is re-measured by the caller at release time, so the check
    /// holds even if the layout reflowed mid-drag.
    pub fn release(&mut self, geometry: TrackGeometry) -> Option<ReleaseOutcome> {
        if self.verified {
            return None;
        }
        self.drag.take()?;

        let offset = self.offset.clamp(0.0, geometry.max_offset());
        let target_offset = geometry.target_offset(self.target_percent);
        let distance = (geometry.center(offset) - geometry.center(target_offset)).abs();

        if distance <= PASS_TOLERANCE_PX {
            self.verified = true;
            self.offset = target_offset;
            Some(ReleaseOutcome::Verified {
                snap_offset: target_offset,
            })
        } else {
            self.offset = 0.0;
            Some(ReleaseOutcome::Rejected)
        }
    }

    /// Clears the challenge and seeds a fresh target. This is the only way
    /// the target moves; failed attempts keep it in place.
    pub fn reset_with(&mut self, target_percent: f64) {
        self.target_percent = clamp_target(target_percent);
        self.offset = 0.0;
        self.verified = false;
        self.drag = None;
    }
}

fn clamp_target(target_percent: f64) -> f64 {
    target_percent.clamp(
        TARGET_MIN_PERCENT,
        TARGET_MIN_PERCENT + TARGET_SPAN_PERCENT - 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: TrackGeometry = TrackGeometry {
        track_width: 300.0,
        handle_width: 40.0,
    };

    fn challenge_at_seventy() -> SliderChallenge {
        SliderChallenge::new(70.0)
    }

    #[test]
    fn geometry_matches_reference_numbers() {
        assert_eq!(GEOMETRY.max_offset(), 260.0);
        assert_eq!(GEOMETRY.target_offset(70.0), 182.0);
        assert_eq!(GEOMETRY.center(GEOMETRY.target_offset(70.0)), 202.0);
    }

    #[test]
    fn release_within_tolerance_verifies_and_snaps() {
        let mut challenge = challenge_at_seventy();
        assert!(challenge.begin_drag(10.0));
        challenge.drag_to(197.0, GEOMETRY);
        assert_eq!(challenge.offset(), 187.0);

        let outcome = challenge.release(GEOMETRY);
        assert_eq!(
            outcome,
            Some(ReleaseOutcome::Verified { snap_offset: 182.0 })
        );
        assert!(challenge.verified());
        assert_eq!(challenge.offset(), 182.0);
    }

    #[test]
    fn release_outside_tolerance_rejects_and_reverts() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(150.0, GEOMETRY);

        let outcome = challenge.release(GEOMETRY);
        assert_eq!(outcome, Some(ReleaseOutcome::Rejected));
        assert!(!challenge.verified());
        assert_eq!(challenge.offset(), 0.0);
        // The target stays put; only an explicit reset moves it.
        assert_eq!(challenge.target_percent(), 70.0);
    }

    #[test]
    fn decision_is_path_independent() {
        let mut wandering = challenge_at_seventy();
        wandering.begin_drag(0.0);
        wandering.drag_to(400.0, GEOMETRY);
        wandering.drag_to(-50.0, GEOMETRY);
        wandering.drag_to(187.0, GEOMETRY);
        assert_eq!(
            wandering.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { snap_offset: 182.0 })
        );

        let mut direct = challenge_at_seventy();
        direct.begin_drag(0.0);
        direct.drag_to(187.0, GEOMETRY);
        assert_eq!(
            direct.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { snap_offset: 182.0 })
        );
    }

    #[test]
    fn exact_tolerance_boundary_passes() {
        // Center 187 vs 202: distance exactly 15.
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(167.0, GEOMETRY);
        assert!(matches!(
            challenge.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { .. })
        ));

        // One pixel further misses.
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(166.0, GEOMETRY);
        assert_eq!(challenge.release(GEOMETRY), Some(ReleaseOutcome::Rejected));
    }

    #[test]
    fn drag_clamps_to_sliding_area() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(100.0);

        let update = challenge.drag_to(1000.0, GEOMETRY).expect("drag active");
        assert_eq!(update.offset, 260.0);

        let update = challenge.drag_to(-1000.0, GEOMETRY).expect("drag active");
        assert_eq!(update.offset, 0.0);
    }

    #[test]
    fn near_feedback_uses_its_own_tolerance() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);

        // Center 173 vs 202: distance 29, inside the near window.
        let update = challenge.drag_to(153.0, GEOMETRY).expect("drag active");
        assert!(update.near_target);

        // Distance 30 is no longer "near".
        let update = challenge.drag_to(152.0, GEOMETRY).expect("drag active");
        assert!(!update.near_target);
    }

    #[test]
    fn verified_challenge_ignores_further_input() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(182.0, GEOMETRY);
        challenge.release(GEOMETRY);
        assert!(challenge.verified());

        assert!(!challenge.begin_drag(0.0));
        assert!(challenge.drag_to(50.0, GEOMETRY).is_none());
        assert!(challenge.release(GEOMETRY).is_none());
        assert_eq!(challenge.offset(), 182.0);
    }

    #[test]
    fn failed_attempt_allows_an_immediate_retry() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(10.0, GEOMETRY);
        assert_eq!(challenge.release(GEOMETRY), Some(ReleaseOutcome::Rejected));

        assert!(challenge.begin_drag(0.0));
        challenge.drag_to(187.0, GEOMETRY);
        assert!(matches!(
            challenge.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { .. })
        ));
    }

    #[test]
    fn release_without_drag_is_a_no_op() {
        let mut challenge = challenge_at_seventy();
        assert!(challenge.release(GEOMETRY).is_none());
        assert!(!challenge.verified());
    }

    #[test]
    fn reset_reseeds_target_and_clears_state() {
        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        challenge.drag_to(187.0, GEOMETRY);
        challenge.release(GEOMETRY);
        assert!(challenge.verified());

        challenge.reset_with(64.0);
        assert!(!challenge.verified());
        assert_eq!(challenge.offset(), 0.0);
        assert_eq!(challenge.target_percent(), 64.0);
        assert!(challenge.begin_drag(0.0));
    }

    #[test]
    fn unit_samples_map_into_the_target_window() {
        for unit in [0.0, 0.1, 0.499, 0.5, 0.999, 1.0] {
            let percent = target_percent_from_unit(unit);
            assert!(
                (TARGET_MIN_PERCENT..TARGET_MIN_PERCENT + TARGET_SPAN_PERCENT).contains(&percent),
                "unit {unit} mapped to {percent}"
            );
            assert_eq!(percent, percent.floor());
        }
        assert_eq!(target_percent_from_unit(0.0), 60.0);
        assert_eq!(target_percent_from_unit(0.999), 79.0);
    }

    #[test]
    fn two_instances_do_not_interfere() {
        let mut first = SliderChallenge::new(70.0);
        let mut second = SliderChallenge::new(63.0);

        first.begin_drag(0.0);
        second.begin_drag(0.0);
        first.drag_to(187.0, GEOMETRY);
        second.drag_to(168.0, GEOMETRY);

        assert!(matches!(
            first.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { .. })
        ));
        assert!(matches!(
            second.release(GEOMETRY),
            Some(ReleaseOutcome::Verified { .. })
        ));
        assert!(first.verified());
        assert!(second.verified());
    }

    #[test]
    fn degenerate_geometry_does_not_panic() {
        let tiny = TrackGeometry::new(20.0, 40.0);
        assert_eq!(tiny.max_offset(), 0.0);

        let mut challenge = challenge_at_seventy();
        challenge.begin_drag(0.0);
        let update = challenge.drag_to(100.0, tiny).expect("drag active");
        assert_eq!(update.offset, 0.0);
    }
}
