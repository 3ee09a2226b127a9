//! Scroll/auto-advance bookkeeping for the looping video feed.
//!
//! [`Carousel`] never touches the DOM. Every external event is fed in as a
//! [`Signal`] and the reaction comes back as a list of [`Command`]s that the
//! view layer applies in order.

use super::feed::LoopedFeed;
use super::geometry::{index_for_offset, offset_of, wrap_correction};

/// Default dwell on one slot before the feed moves on by itself.
pub const DEFAULT_DWELL_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal {
    /// First render finished; `viewport` is the container height, possibly 0.
    Mounted { viewport: f64 },
    Scrolled { offset: f64, viewport: f64 },
    GestureStarted,
    GestureEnded,
    /// The pending auto-advance timer fired.
    AdvanceDue,
    /// Slot video buffered enough to start.
    CanPlay(usize),
    /// Any touch, pointer-down or scroll anywhere on the page.
    Interaction,
    Unmounted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Position the container on `slot` right now, no animation.
    Align(usize),
    /// Same as `Align` but once more after the next paint.
    AlignAfterPaint(usize),
    /// Silent wraparound rewrite of the scroll offset.
    JumpTo(f64),
    SmoothScrollTo(f64),
    /// Replaces whatever advance timer is pending.
    ArmAdvance { millis: u32 },
    CancelAdvance,
    /// Mute and start the slot video.
    Play(usize),
    Pause(usize),
    /// Point the ambient video at `source` (if it isn't already), mute and play.
    Ambient(String),
    ArmKickstart,
    DisarmKickstart,
}

#[derive(Debug, Clone)]
pub struct Carousel {
    feed: LoopedFeed,
    active: usize,
    viewport: f64,
    offset: f64,
    dwell_ms: u32,
    user_scrolling: bool,
    advance_armed: bool,
    kickstart_armed: bool,
}

impl Carousel {
    pub fn new(feed: LoopedFeed, dwell_ms: u32) -> Self {
        let active = feed.initial_index();
        Self {
            feed,
            active,
            viewport: 0.0,
            offset: 0.0,
            dwell_ms,
            user_scrolling: false,
            advance_armed: false,
            kickstart_armed: false,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn active_source(&self) -> &str {
        self.feed.source_at(self.active)
    }

    pub fn handle(&mut self, signal: Signal) -> Vec<Command> {
        let mut out = Vec::new();
        match signal {
            Signal::Mounted { viewport } => self.on_mounted(viewport, &mut out),
            Signal::Scrolled { offset, viewport } => self.on_scrolled(offset, viewport, &mut out),
            Signal::GestureStarted => {
                self.user_scrolling = true;
                self.advance_armed = false;
                out.push(Command::CancelAdvance);
            }
            Signal::GestureEnded => {
                self.user_scrolling = false;
                // An index change during the gesture already re-armed the timer.
                if !self.advance_armed {
                    self.arm_advance(&mut out);
                }
            }
            Signal::AdvanceDue => self.on_advance_due(&mut out),
            Signal::CanPlay(slot) => {
                if slot == self.active {
                    out.push(Command::Play(slot));
                }
            }
            Signal::Interaction => {
                if self.kickstart_armed {
                    self.kickstart_armed = false;
                    out.push(Command::DisarmKickstart);
                    self.sync_playback(&mut out);
                }
            }
            Signal::Unmounted => {
                self.advance_armed = false;
                out.push(Command::CancelAdvance);
                if self.kickstart_armed {
                    self.kickstart_armed = false;
                    out.push(Command::DisarmKickstart);
                }
            }
        }
        out
    }

    fn on_mounted(&mut self, viewport: f64, out: &mut Vec<Command>) {
        if viewport > 0.0 {
            self.viewport = viewport;
        }
        self.offset = offset_of(self.active, self.viewport);
        out.push(Command::Align(self.active));
        out.push(Command::AlignAfterPaint(self.active));
        self.sync_playback(out);
        self.arm_advance(out);
        self.kickstart_armed = true;
        out.push(Command::ArmKickstart);
    }

    fn on_scrolled(&mut self, offset: f64, viewport: f64, out: &mut Vec<Command>) {
        let Some(index) = index_for_offset(offset, viewport, self.feed.len()) else {
            return;
        };
        self.viewport = viewport;
        self.offset = offset;
        if index != self.active {
            self.active = index;
            self.sync_playback(out);
            self.arm_advance(out);
        }
        if let Some(corrected) = wrap_correction(offset, viewport, self.feed.catalog_len()) {
            self.offset = corrected;
            log::trace!("wrapping feed offset {} -> {}", offset, self.offset);
            out.push(Command::JumpTo(corrected));
        }
    }

    fn on_advance_due(&mut self, out: &mut Vec<Command>) {
        self.advance_armed = false;
        if self.user_scrolling {
            // GestureEnded re-arms.
            return;
        }
        if self.viewport <= 0.0 {
            self.arm_advance(out);
            return;
        }
        out.push(Command::SmoothScrollTo(offset_of(self.active + 1, self.viewport)));
    }

    fn arm_advance(&mut self, out: &mut Vec<Command>) {
        self.advance_armed = true;
        out.push(Command::ArmAdvance {
            millis: self.dwell_ms,
        });
    }

    fn sync_playback(&self, out: &mut Vec<Command>) {
        for slot in 0..self.feed.len() {
            if slot == self.active {
                out.push(Command::Play(slot));
            } else {
                out.push(Command::Pause(slot));
            }
        }
        out.push(Command::Ambient(self.active_source().to_string()));
    }
}

#[cfg(test)]
impl Carousel {
    fn feed(&self) -> &LoopedFeed {
        &self.feed
    }

    /// Last offset the controller knows about, including its own rewrites.
    fn offset(&self) -> f64 {
        self.offset
    }

    fn is_user_scrolling(&self) -> bool {
        self.user_scrolling
    }

    fn is_advance_armed(&self) -> bool {
        self.advance_armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const H: f64 = 700.0;

    /// Applies commands the way the DOM driver would, minus the browser.
    #[derive(Default)]
    struct Stage {
        playing: BTreeSet<usize>,
        ambient: Option<String>,
        timer: Option<u32>,
        offset: f64,
        smooth_target: Option<f64>,
        kickstart: bool,
    }

    impl Stage {
        fn apply(&mut self, commands: &[Command]) {
            for command in commands {
                match command {
                    Command::Align(slot) | Command::AlignAfterPaint(slot) => {
                        self.offset = offset_of(*slot, H)
                    }
                    Command::JumpTo(offset) => self.offset = *offset,
                    Command::SmoothScrollTo(offset) => self.smooth_target = Some(*offset),
                    Command::ArmAdvance { millis } => self.timer = Some(*millis),
                    Command::CancelAdvance => self.timer = None,
                    Command::Play(slot) => {
                        self.playing.insert(*slot);
                    }
                    Command::Pause(slot) => {
                        self.playing.remove(slot);
                    }
                    Command::Ambient(src) => self.ambient = Some(src.clone()),
                    Command::ArmKickstart => self.kickstart = true,
                    Command::DisarmKickstart => self.kickstart = false,
                }
            }
        }
    }

    struct Rig {
        carousel: Carousel,
        stage: Stage,
    }

    impl Rig {
        fn new(catalog: &[&str]) -> Self {
            let feed = LoopedFeed::new(catalog.iter().map(|s| s.to_string()).collect()).unwrap();
            let mut rig = Rig {
                carousel: Carousel::new(feed, DEFAULT_DWELL_MS),
                stage: Stage::default(),
            };
            rig.send(Signal::Mounted { viewport: H });
            rig
        }

        fn send(&mut self, signal: Signal) -> Vec<Command> {
            let commands = self.carousel.handle(signal);
            self.stage.apply(&commands);
            commands
        }

        fn scroll_to_slot(&mut self, slot: usize) -> Vec<Command> {
            self.send(Signal::Scrolled {
                offset: offset_of(slot, H),
                viewport: H,
            })
        }

        /// Fire the timer, then deliver the scroll report the smooth scroll produces.
        fn let_timer_fire(&mut self) -> Vec<Command> {
            assert!(self.stage.timer.take().is_some(), "no timer pending");
            self.send(Signal::AdvanceDue);
            match self.stage.smooth_target.take() {
                Some(offset) => self.send(Signal::Scrolled { offset, viewport: H }),
                None => Vec::new(),
            }
        }

        fn assert_in_sync(&self) {
            let active = self.carousel.active();
            assert_eq!(self.stage.playing, BTreeSet::from([active]));
            assert_eq!(
                self.stage.ambient.as_deref(),
                Some(self.carousel.feed().source_at(active))
            );
        }
    }

    #[test]
    fn mount_positions_on_middle_copy_and_starts_everything() {
        let rig = Rig::new(&["A", "B", "C"]);
        assert_eq!(rig.carousel.active(), 3);
        assert_eq!(rig.stage.offset, 3.0 * H);
        assert_eq!(rig.stage.timer, Some(DEFAULT_DWELL_MS));
        assert!(rig.stage.kickstart);
        rig.assert_in_sync();
    }

    #[test]
    fn mount_aligns_now_and_after_paint() {
        let feed = LoopedFeed::new(vec!["A".into()]).unwrap();
        let mut carousel = Carousel::new(feed, DEFAULT_DWELL_MS);
        let commands = carousel.handle(Signal::Mounted { viewport: 0.0 });
        assert_eq!(&commands[..2], &[Command::Align(1), Command::AlignAfterPaint(1)]);
    }

    #[test]
    fn scroll_report_moves_active_slot() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        rig.stage.timer = None;
        let commands = rig.scroll_to_slot(5);
        assert_eq!(rig.carousel.active(), 5);
        assert!(commands.contains(&Command::Ambient("C".into())));
        assert_eq!(rig.stage.timer, Some(DEFAULT_DWELL_MS));
        rig.assert_in_sync();
    }

    #[test]
    fn same_slot_report_is_quiet() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        let commands = rig.send(Signal::Scrolled {
            offset: 3.0 * H + 20.0,
            viewport: H,
        });
        assert!(commands.is_empty());
    }

    #[test]
    fn zero_height_report_is_ignored() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        let commands = rig.send(Signal::Scrolled {
            offset: 0.0,
            viewport: 0.0,
        });
        assert!(commands.is_empty());
        assert_eq!(rig.carousel.active(), 3);
    }

    #[test]
    fn only_active_slot_ever_plays() {
        let mut rig = Rig::new(&["A", "B", "C", "D"]);
        let walk = [0.2, 5.6, 11.0, 7.4, 3.0, 9.9, 1.5, 6.49, 6.51];
        for step in walk {
            rig.send(Signal::Scrolled {
                offset: step * H,
                viewport: H,
            });
            assert!(rig.stage.playing.len() <= 1);
            rig.assert_in_sync();
        }
    }

    #[test]
    fn idle_feed_advances_and_wraps_at_the_end() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        rig.scroll_to_slot(5);

        rig.let_timer_fire();
        assert_eq!(rig.carousel.active(), 6);
        assert_eq!(rig.stage.ambient.as_deref(), Some("A"));

        rig.let_timer_fire();
        assert_eq!(rig.carousel.active(), 7);

        let commands = rig.let_timer_fire();
        assert_eq!(rig.carousel.active(), 8);
        assert!(commands.contains(&Command::JumpTo(2.0 * H)));
        assert_eq!(rig.carousel.offset(), 2.0 * H);

        // The browser reports the rewritten position.
        rig.scroll_to_slot(2);
        assert_eq!(rig.carousel.active(), 2);
        assert_eq!(rig.stage.ambient.as_deref(), Some("C"));
        rig.assert_in_sync();
    }

    #[test]
    fn reaching_the_top_jumps_into_the_middle_copy() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        let commands = rig.scroll_to_slot(0);
        assert!(commands.contains(&Command::JumpTo(3.0 * H)));
        rig.scroll_to_slot(3);
        assert_eq!(rig.carousel.active(), 3);
        assert_eq!(rig.stage.ambient.as_deref(), Some("A"));
    }

    #[test]
    fn gesture_suppresses_advance_until_it_ends() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        rig.scroll_to_slot(4);
        assert!(rig.stage.timer.is_some());

        rig.send(Signal::GestureStarted);
        assert_eq!(rig.stage.timer, None);
        assert!(rig.carousel.is_user_scrolling());

        // A stale fire during the gesture does nothing.
        rig.send(Signal::AdvanceDue);
        assert_eq!(rig.stage.smooth_target, None);

        rig.send(Signal::GestureEnded);
        assert_eq!(rig.stage.timer, Some(DEFAULT_DWELL_MS));
        rig.let_timer_fire();
        assert_eq!(rig.carousel.active(), 5);
    }

    #[test]
    fn gesture_that_changes_slot_keeps_single_timer() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        rig.send(Signal::GestureStarted);
        rig.scroll_to_slot(4);
        assert!(rig.carousel.is_advance_armed());

        let commands = rig.send(Signal::GestureEnded);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::ArmAdvance { .. })));
        assert!(rig.stage.timer.is_some());
    }

    #[test]
    fn timer_firing_mid_gesture_is_rearmed_on_release() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        rig.send(Signal::GestureStarted);
        rig.scroll_to_slot(4);
        rig.send(Signal::AdvanceDue);
        assert_eq!(rig.stage.smooth_target, None);
        assert!(!rig.carousel.is_advance_armed());

        rig.send(Signal::GestureEnded);
        assert!(rig.carousel.is_advance_armed());
    }

    #[test]
    fn can_play_only_starts_the_active_slot() {
        let mut rig = Rig::new(&["A", "B", "C"]);
        assert_eq!(rig.send(Signal::CanPlay(3)), vec![Command::Play(3)]);
        assert!(rig.send(Signal::CanPlay(4)).is_empty());
    }

    #[test]
    fn kickstart_runs_once() {
        let mut rig = Rig::new(&["A", "B"]);
        rig.stage.playing.clear();
        let first = rig.send(Signal::Interaction);
        assert_eq!(first.first(), Some(&Command::DisarmKickstart));
        assert!(!rig.stage.kickstart);
        rig.assert_in_sync();
        assert!(rig.send(Signal::Interaction).is_empty());
    }

    #[test]
    fn unmount_releases_timer_and_listener() {
        let mut rig = Rig::new(&["A"]);
        rig.send(Signal::Unmounted);
        assert_eq!(rig.stage.timer, None);
        assert!(!rig.stage.kickstart);
        assert!(!rig.carousel.is_advance_armed());
    }

    #[test]
    fn advance_without_layout_retries_later() {
        let feed = LoopedFeed::new(vec!["A".into(), "B".into()]).unwrap();
        let mut carousel = Carousel::new(feed, 1_000);
        carousel.handle(Signal::Mounted { viewport: 0.0 });
        let commands = carousel.handle(Signal::AdvanceDue);
        assert_eq!(commands, vec![Command::ArmAdvance { millis: 1_000 }]);
    }
}
