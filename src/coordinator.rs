//! Event dispatch and layer dirty tracking.
//!
//! The host event loop feeds [`FaceEvent`]s in; the coordinator decides
//! which of the two conceptual layers (static face, dynamic hand/sweep) must
//! repaint and keeps the palette fresh on a fixed cadence. All state lives
//! here; the renderer only reads it during a draw call.

use crate::animation::InsetAnimation;
use crate::palette::{self, LegibilityFn, Palette};

/// Seconds between scheduled palette reselections.
pub const COLOR_REFRESH_SECS: u64 = 300;

/// Local time snapshot supplied by the host clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
}

/// External stimuli, dispatched by the host event loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FaceEvent {
    /// Per-minute clock tick carrying the current wall-clock time.
    TimeTick { time: TimeOfDay, now_secs: u64 },
    /// Startup animation progress in `[0, 1]`.
    AnimationProgress(f64),
}

/// Layers the host must repaint before the next present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirtyLayers {
    pub face: bool,
    pub hand: bool,
}

impl DirtyLayers {
    pub fn any(self) -> bool {
        self.face || self.hand
    }
}

/// Owns the mutable face state: active palette, reselection timestamp, the
/// current time snapshot and the startup animation. Mutation happens only
/// inside [`handle`](RedrawCoordinator::handle), called from the single
/// event-loop thread, so no locking is involved.
pub struct RedrawCoordinator {
    palette: Palette,
    last_color_change: u64,
    time: TimeOfDay,
    animation: InsetAnimation,
    dirty: DirtyLayers,
    seed: Option<u64>,
    legible: LegibilityFn,
}

impl RedrawCoordinator {
    /// Selects the first palette and marks both layers dirty, so the first
    /// frame is never blank.
    pub fn new(seed: Option<u64>, legible: LegibilityFn, time: TimeOfDay, now_secs: u64) -> Self {
        let palette = Self::select(seed, legible);
        tracing::debug!(palette = ?palette, "initial palette");
        Self {
            palette,
            last_color_change: now_secs,
            time,
            animation: InsetAnimation::new(),
            dirty: DirtyLayers { face: true, hand: true },
            seed,
            legible,
        }
    }

    fn select(seed: Option<u64>, legible: LegibilityFn) -> Palette {
        match seed {
            Some(seed) => palette::select_seeded(seed, legible),
            None => palette::select_random(legible),
        }
    }

    pub fn handle(&mut self, event: FaceEvent) {
        match event {
            FaceEvent::TimeTick { time, now_secs } => {
                self.time = time;
                self.dirty.hand = true;
                if now_secs.saturating_sub(self.last_color_change) >= COLOR_REFRESH_SECS {
                    self.palette = Self::select(self.seed, self.legible);
                    self.last_color_change = now_secs;
                    self.dirty.face = true;
                    tracing::debug!(palette = ?self.palette, now_secs, "palette reselected");
                }
            }
            FaceEvent::AnimationProgress(progress) => {
                self.animation.on_progress(progress);
                self.dirty.hand = true;
            }
        }
    }

    /// Hands the accumulated dirty flags to the host and resets them.
    pub fn take_dirty(&mut self) -> DirtyLayers {
        std::mem::take(&mut self.dirty)
    }

    /// Pending dirty flags, left in place.
    pub fn dirty(&self) -> DirtyLayers {
        self.dirty
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn time(&self) -> TimeOfDay {
        self.time
    }

    pub fn inset_percent(&self) -> i32 {
        self.animation.inset_percent()
    }

    pub fn animation_finished(&self) -> bool {
        self.animation.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{legible_over, select_seeded, Color};

    const NOON: TimeOfDay = TimeOfDay { hour: 12, minute: 0 };

    fn coordinator(now_secs: u64) -> RedrawCoordinator {
        RedrawCoordinator::new(Some(7), legible_over, NOON, now_secs)
    }

    #[test]
    fn construction_selects_and_dirties_everything() {
        let mut c = coordinator(0);
        assert_eq!(*c.palette(), select_seeded(7, legible_over));
        assert_eq!(c.take_dirty(), DirtyLayers { face: true, hand: true });
        assert_eq!(c.dirty(), DirtyLayers::default());
    }

    #[test]
    fn tick_dirties_only_the_hand_before_the_refresh_threshold() {
        let mut c = coordinator(0);
        c.take_dirty();
        c.handle(FaceEvent::TimeTick { time: NOON, now_secs: 60 });
        assert_eq!(c.take_dirty(), DirtyLayers { face: false, hand: true });
    }

    #[test]
    fn tick_updates_the_time_snapshot() {
        let mut c = coordinator(0);
        let later = TimeOfDay { hour: 12, minute: 1 };
        c.handle(FaceEvent::TimeTick { time: later, now_secs: 60 });
        assert_eq!(c.time(), later);
    }

    #[test]
    fn palette_refresh_fires_exactly_at_the_threshold() {
        let mut c = coordinator(0);
        c.take_dirty();
        for now_secs in [60, 120, 180, 240, 299] {
            c.handle(FaceEvent::TimeTick { time: NOON, now_secs });
            assert!(!c.take_dirty().face, "reselected early at t={now_secs}");
        }
        c.handle(FaceEvent::TimeTick { time: NOON, now_secs: 300 });
        assert!(c.take_dirty().face);
    }

    #[test]
    fn refresh_timestamp_advances_on_reselection() {
        let mut c = coordinator(0);
        c.take_dirty();
        c.handle(FaceEvent::TimeTick { time: NOON, now_secs: 300 });
        c.take_dirty();
        // stamped at 300, so 540 is still inside the fresh window
        c.handle(FaceEvent::TimeTick { time: NOON, now_secs: 540 });
        assert!(!c.take_dirty().face);
        c.handle(FaceEvent::TimeTick { time: NOON, now_secs: 600 });
        assert!(c.take_dirty().face);
    }

    #[test]
    fn animation_progress_dirties_the_hand_and_updates_the_inset() {
        let mut c = coordinator(0);
        c.take_dirty();
        c.handle(FaceEvent::AnimationProgress(0.5));
        assert_eq!(c.inset_percent(), 50);
        assert!(!c.animation_finished());
        assert_eq!(c.take_dirty(), DirtyLayers { face: false, hand: true });
        c.handle(FaceEvent::AnimationProgress(1.0));
        assert!(c.animation_finished());
    }

    #[test]
    fn random_mode_still_pairs_background_and_accent() {
        let c = RedrawCoordinator::new(None, legible_over, NOON, 0);
        let palette = *c.palette();
        let k = crate::palette::BACKGROUNDS
            .iter()
            .position(|&b: &Color| b == palette.background)
            .unwrap();
        assert_eq!(palette.accent, crate::palette::ACCENTS[k]);
    }
}
