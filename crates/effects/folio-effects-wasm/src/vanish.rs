//! Hero vanish controller: owns the frame throttle and resize debounce and
//! applies [`VanishFrame`] patches to the hero's parts.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo::events::EventListener;
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use folio_effects_core::{is_home_path, Debouncer, FrameThrottle, VanishFrame, VanishPhase};

use crate::dom::{self, Page};

pub(crate) struct HeroVanish {
    page: Rc<Page>,
    throttle: RefCell<FrameThrottle>,
    frame: RefCell<Option<AnimationFrame>>,
    debouncer: RefCell<Debouncer>,
    resize_timer: RefCell<Option<Timeout>>,
    recomputations: Cell<u64>,
}

impl HeroVanish {
    pub fn new(page: Rc<Page>) -> Rc<Self> {
        Rc::new(Self {
            page,
            throttle: RefCell::new(FrameThrottle::new()),
            frame: RefCell::new(None),
            debouncer: RefCell::new(Debouncer::new()),
            resize_timer: RefCell::new(None),
            recomputations: Cell::new(0),
        })
    }

    /// Register every trigger and run the initial computation.
    pub fn install(self: &Rc<Self>, listeners: &mut Vec<EventListener>) {
        let window = self.page.window.clone();

        for event in ["scroll", "touchmove"] {
            let this = Rc::clone(self);
            listeners.push(EventListener::new_with_options(
                &window,
                event,
                dom::passive(),
                move |_| this.schedule_frame(),
            ));
        }

        let this = Rc::clone(self);
        listeners.push(EventListener::new(&window, "resize", move |_| {
            this.schedule_debounced();
        }));

        let this = Rc::clone(self);
        listeners.push(EventListener::new(&window, "orientationchange", move |_| {
            this.schedule_delayed();
        }));

        let this = Rc::clone(self);
        listeners.push(EventListener::new(&window, "load", move |_| {
            this.recompute();
        }));

        let this = Rc::clone(self);
        self.page.on_dom_ready(listeners, move || {
            this.recompute();
        });
    }

    /// Compute and apply the current state. Returns the phase applied, or
    /// `None` when the page has no hero or is not the home view.
    pub fn recompute(&self) -> Option<VanishPhase> {
        self.recomputations.set(self.recomputations.get() + 1);
        let page = &self.page;
        page.query(&page.cfg.selectors.hero)?;
        if !is_home_path(&page.pathname()) {
            return None;
        }
        let frame = VanishFrame::compute(&page.cfg, page.viewport());
        for (part, patch) in frame.patches() {
            if let Some(el) = page.query(part.selector(&page.cfg.selectors)) {
                dom::apply_patch(&el, &patch);
            }
        }
        Some(frame.phase)
    }

    /// Scroll/touch path: at most one recomputation per animation frame.
    pub fn schedule_frame(self: &Rc<Self>) {
        if !self.throttle.borrow_mut().request() {
            return;
        }
        let this = Rc::clone(self);
        let handle = request_animation_frame(move |_| {
            this.recompute();
            this.throttle.borrow_mut().complete();
        });
        *self.frame.borrow_mut() = Some(handle);
    }

    /// Resize path: trailing debounce.
    pub fn schedule_debounced(self: &Rc<Self>) {
        let ticket = self.debouncer.borrow_mut().trigger();
        let this = Rc::clone(self);
        let timer = Timeout::new(self.page.cfg.timing.resize_debounce_ms, move || {
            if this.debouncer.borrow_mut().fire(ticket) {
                this.recompute();
            }
        });
        // replacing the slot drops, and so clears, the previous timeout
        *self.resize_timer.borrow_mut() = Some(timer);
    }

    /// Orientation path: fixed delay. The delayed run is skipped once the
    /// controller is gone.
    pub fn schedule_delayed(self: &Rc<Self>) {
        let this: Weak<Self> = Rc::downgrade(self);
        let delay = self.page.cfg.timing.orientation_delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if let Some(this) = this.upgrade() {
                this.recompute();
            }
        });
    }

    /// Recomputations run since install, from any trigger.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }

    pub fn is_frame_pending(&self) -> bool {
        self.throttle.borrow().is_pending()
    }

    /// Events folded into an already pending frame since install.
    pub fn collapsed_events(&self) -> u64 {
        self.throttle.borrow().collapsed()
    }

    /// Drop the pending frame and resize timer. Both hold a reference back to
    /// the controller, so this also breaks that cycle.
    pub fn cancel_pending(&self) {
        self.frame.borrow_mut().take();
        self.throttle.borrow_mut().complete();
        self.resize_timer.borrow_mut().take();
        self.debouncer.borrow_mut().cancel();
    }
}
