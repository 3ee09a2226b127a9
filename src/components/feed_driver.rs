use crate::carousel::{Carousel, Command, Signal};
use crate::utils::frame::NextFrame;
use crate::utils::once::OneShotListener;
use crate::utils::playback;
use gloo_timers::callback::Timeout;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::{HtmlElement, HtmlMediaElement, ScrollBehavior, ScrollToOptions};
use yew::NodeRef;

/// Page-wide interactions that count as the first user gesture.
const KICKSTART_EVENTS: &[&str] = &["touchstart", "mousedown", "scroll"];

/// Binds a [`Carousel`] to the rendered feed.
///
/// DOM events come in through the `report_*`/`gesture_*` methods, the
/// resulting commands are applied to the referenced elements. The timer,
/// the paint callback and the kickstart listener only hold weak references
/// back to the driver.
pub struct FeedDriver {
    carousel: RefCell<Carousel>,
    container: NodeRef,
    ambient: NodeRef,
    slots: Vec<NodeRef>,
    advance: RefCell<Option<Timeout>>,
    frame: RefCell<Option<NextFrame>>,
    kickstart: RefCell<Option<OneShotListener>>,
}

impl FeedDriver {
    pub fn new(carousel: Carousel, container: NodeRef, ambient: NodeRef, slots: Vec<NodeRef>) -> Self {
        Self {
            carousel: RefCell::new(carousel),
            container,
            ambient,
            slots,
            advance: RefCell::new(None),
            frame: RefCell::new(None),
            kickstart: RefCell::new(None),
        }
    }

    pub fn slot_ref(&self, slot: usize) -> NodeRef {
        self.slots.get(slot).cloned().unwrap_or_default()
    }

    pub fn mount(self: &Rc<Self>) {
        let viewport = self.viewport();
        log::debug!("feed mounted, viewport {}px", viewport);
        self.dispatch(Signal::Mounted { viewport });
    }

    pub fn teardown(self: &Rc<Self>) {
        self.dispatch(Signal::Unmounted);
        self.advance.borrow_mut().take();
        self.frame.borrow_mut().take();
        self.kickstart.borrow_mut().take();
    }

    pub fn report_scroll(self: &Rc<Self>) {
        let Some(container) = self.container() else {
            return;
        };
        self.dispatch(Signal::Scrolled {
            offset: f64::from(container.scroll_top()),
            viewport: f64::from(container.offset_height()),
        });
    }

    pub fn gesture_started(self: &Rc<Self>) {
        self.dispatch(Signal::GestureStarted);
    }

    pub fn gesture_ended(self: &Rc<Self>) {
        self.dispatch(Signal::GestureEnded);
    }

    pub fn slot_ready(self: &Rc<Self>, slot: usize) {
        self.dispatch(Signal::CanPlay(slot));
    }

    pub fn dispatch(self: &Rc<Self>, signal: Signal) {
        let (commands, before, after) = {
            let mut carousel = self.carousel.borrow_mut();
            let before = carousel.active();
            let commands = carousel.handle(signal);
            (commands, before, carousel.active())
        };
        if before != after {
            log::debug!(
                "active slot {} -> {} ({})",
                before,
                after,
                self.carousel.borrow().active_source()
            );
        }
        for command in commands {
            self.apply(command);
        }
    }

    fn apply(self: &Rc<Self>, command: Command) {
        match command {
            Command::Align(slot) => self.align(slot),
            Command::AlignAfterPaint(slot) => {
                let weak = Rc::downgrade(self);
                match NextFrame::request(move || {
                    if let Some(driver) = weak.upgrade() {
                        driver.align(slot);
                    }
                }) {
                    Ok(frame) => *self.frame.borrow_mut() = Some(frame),
                    Err(e) => log::warn!("Could not schedule feed alignment: {:?}", e),
                }
            }
            Command::JumpTo(offset) => {
                if let Some(container) = self.container() {
                    container.set_scroll_top(offset.round() as i32);
                }
            }
            Command::SmoothScrollTo(offset) => {
                if let Some(container) = self.container() {
                    let options = ScrollToOptions::new();
                    options.set_top(offset);
                    options.set_behavior(ScrollBehavior::Smooth);
                    container.scroll_to_with_scroll_to_options(&options);
                }
            }
            Command::ArmAdvance { millis } => {
                let weak = Rc::downgrade(self);
                let timeout = Timeout::new(millis, move || {
                    if let Some(driver) = weak.upgrade() {
                        driver.dispatch(Signal::AdvanceDue);
                    }
                });
                // Replacing the old handle cancels it.
                *self.advance.borrow_mut() = Some(timeout);
            }
            Command::CancelAdvance => {
                self.advance.borrow_mut().take();
            }
            Command::Play(slot) => {
                if let Some(media) = self.slot_media(slot) {
                    playback::start_muted(&media);
                }
            }
            Command::Pause(slot) => {
                if let Some(media) = self.slot_media(slot) {
                    playback::pause(&media);
                }
            }
            Command::Ambient(source) => {
                if let Some(media) = self.ambient.cast::<HtmlMediaElement>() {
                    playback::ensure_source(&media, &source);
                    playback::start_muted(&media);
                }
            }
            Command::ArmKickstart => {
                let Some(window) = web_sys::window() else {
                    return;
                };
                let weak = Rc::downgrade(self);
                match OneShotListener::arm(window.into(), KICKSTART_EVENTS, move || {
                    if let Some(driver) = weak.upgrade() {
                        driver.dispatch(Signal::Interaction);
                    }
                }) {
                    Ok(listener) => *self.kickstart.borrow_mut() = Some(listener),
                    Err(e) => log::warn!("Could not listen for first interaction: {:?}", e),
                }
            }
            Command::DisarmKickstart => {
                if let Some(listener) = self.kickstart.borrow().as_ref() {
                    listener.disarm();
                }
            }
        }
    }

    fn container(&self) -> Option<HtmlElement> {
        self.container.cast::<HtmlElement>()
    }

    fn viewport(&self) -> f64 {
        self.container()
            .map(|c| f64::from(c.offset_height()))
            .unwrap_or(0.0)
    }

    fn align(&self, slot: usize) {
        if let Some(container) = self.container() {
            container.set_scroll_top(slot as i32 * container.offset_height());
        }
    }

    fn slot_media(&self, slot: usize) -> Option<HtmlMediaElement> {
        self.slots.get(slot)?.cast::<HtmlMediaElement>()
    }
}
