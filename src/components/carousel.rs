use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use log::{debug, error};
use yew::prelude::*;

use crate::config::{self, CarouselConfig};
use crate::error::{Result, SiteError};
use crate::timer::{BrowserScheduler, Scheduler};

/// Cursor over a fixed, non-empty gallery. Wraps to 0 after the last image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselState {
    len: usize,
    current: usize,
}

impl CarouselState {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(SiteError::EmptyGallery);
        }
        Ok(Self { len, current: 0 })
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }
}

struct Shared<S: Scheduler> {
    state: RefCell<CarouselState>,
    subscribers: RefCell<Vec<Callback<usize>>>,
    pending: RefCell<Option<S::Handle>>,
    running: Cell<bool>,
    scheduler: S,
    interval_ms: u32,
}

/// Owns the carousel cursor and its one pending timer.
///
/// Each tick advances the cursor, notifies every subscriber with the new
/// index and arms a fresh one-shot timer. Stopping (or dropping) the
/// controller cancels the pending timer; a callback that still slips through
/// only holds a `Weak` and finds nothing to update.
pub struct CarouselController<S: Scheduler + 'static> {
    shared: Rc<Shared<S>>,
}

impl<S: Scheduler + 'static> CarouselController<S> {
    pub fn new(scheduler: S, image_count: usize, config: CarouselConfig) -> Result<Self> {
        let state = CarouselState::new(image_count)?;
        Ok(Self {
            shared: Rc::new(Shared {
                state: RefCell::new(state),
                subscribers: RefCell::new(Vec::new()),
                pending: RefCell::new(None),
                running: Cell::new(false),
                scheduler,
                interval_ms: config.interval_ms,
            }),
        })
    }

    pub fn current(&self) -> usize {
        self.shared.state.borrow().current()
    }

    pub fn subscribe(&self, subscriber: Callback<usize>) {
        self.shared.subscribers.borrow_mut().push(subscriber);
    }

    pub fn start(&self) {
        if self.shared.running.replace(true) {
            return;
        }
        arm(&self.shared);
    }

    pub fn stop(&self) {
        self.shared.running.set(false);
        let pending = self.shared.pending.borrow_mut().take();
        drop(pending);
    }

    pub fn is_running(&self) -> bool {
        self.shared.running.get()
    }
}

impl<S: Scheduler + 'static> Drop for CarouselController<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

fn arm<S: Scheduler + 'static>(shared: &Rc<Shared<S>>) {
    let weak = Rc::downgrade(shared);
    let handle = shared
        .scheduler
        .schedule(shared.interval_ms, Box::new(move || tick(weak)));
    // The replaced handle belongs to the timer that just fired.
    let fired = shared.pending.borrow_mut().replace(handle);
    drop(fired);
}

fn tick<S: Scheduler + 'static>(weak: Weak<Shared<S>>) {
    let shared = match weak.upgrade() {
        Some(shared) => shared,
        None => return,
    };
    if !shared.running.get() {
        return;
    }

    let index = shared.state.borrow_mut().advance();
    let subscribers = shared.subscribers.borrow().clone();
    for subscriber in subscribers {
        subscriber.emit(index);
    }

    // A subscriber may have stopped the carousel.
    if shared.running.get() {
        arm(&shared);
    }
}

/// Runs a carousel over `image_count` images for as long as the calling
/// component is mounted and returns the current index.
#[hook]
pub fn use_carousel(image_count: usize, config: CarouselConfig) -> usize {
    let current = use_state(|| 0usize);

    {
        let setter = current.setter();
        use_effect_with_deps(
            move |&(count, config): &(usize, CarouselConfig)| {
                let controller = match CarouselController::new(BrowserScheduler, count, config) {
                    Ok(controller) => {
                        setter.set(controller.current());
                        controller.subscribe(Callback::from(move |index: usize| setter.set(index)));
                        controller.start();
                        debug!("Carousel started over {} images", count);
                        Some(controller)
                    }
                    Err(e) => {
                        error!("Carousel not started: {}", e);
                        None
                    }
                };

                move || {
                    if let Some(controller) = controller {
                        if controller.is_running() {
                            controller.stop();
                            debug!("Carousel stopped");
                        }
                    }
                }
            },
            (image_count, config),
        );
    }

    *current
}

#[derive(Properties, PartialEq)]
pub struct CarouselProps {
    pub images: Vec<String>,
    pub current: usize,
}

#[function_component(ImageCarousel)]
pub fn image_carousel(props: &CarouselProps) -> Html {
    let active = props.current.min(props.images.len().saturating_sub(1));

    html! {
        <div class="carousel">
            <div class="carousel-track">
                { for props.images.iter().enumerate().map(|(i, src)| html! {
                    <img
                        key={src.clone()}
                        class={classes!("carousel-image", (i == active).then(|| "active"))}
                        src={config::asset_url(src)}
                        alt={format!("Client result {}", i + 1)}
                        loading={if i == active { "eager" } else { "lazy" }}
                    />
                }) }
            </div>
            <div class="carousel-dots">
                { for (0..props.images.len()).map(|i| html! {
                    <span class={classes!("carousel-dot", (i == active).then(|| "active"))}></span>
                }) }
            </div>
        </div>
    }
}

/// Before / after card in the results section, following the hero carousel.
#[function_component(TransformationGallery)]
pub fn transformation_gallery(props: &CarouselProps) -> Html {
    let Some(src) = props.images.get(props.current) else {
        return html! {};
    };

    html! {
        <div class="card transformation">
            <h3 class="card-title">{"Client Transformation"}</h3>
            <img class="transformation-image" src={config::asset_url(src)} alt="Client Transformation" />
            <p class="transformation-counter">
                {format!("{} / {}", props.current + 1, props.images.len())}
            </p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::manual::ManualScheduler;

    const INTERVAL: u64 = config::CAROUSEL_INTERVAL_MS as u64;

    fn controller(clock: &ManualScheduler, len: usize) -> CarouselController<ManualScheduler> {
        CarouselController::new(clock.clone(), len, CarouselConfig::default()).unwrap()
    }

    #[test]
    fn state_wraps_after_last_index() {
        let mut state = CarouselState::new(3).unwrap();
        assert_eq!(state.advance(), 1);
        assert_eq!(state.advance(), 2);
        assert_eq!(state.advance(), 0);
    }

    #[test]
    fn empty_gallery_is_rejected() {
        assert!(matches!(CarouselState::new(0), Err(SiteError::EmptyGallery)));
        assert!(CarouselController::new(ManualScheduler::new(), 0, CarouselConfig::default()).is_err());
    }

    #[test]
    fn index_after_n_ticks_is_n_mod_len() {
        for len in [1usize, 2, 3, 29] {
            let clock = ManualScheduler::new();
            let carousel = controller(&clock, len);
            carousel.start();
            for n in 1..=(2 * len + 3) {
                assert_eq!(clock.advance(INTERVAL), 1);
                assert_eq!(carousel.current(), n % len, "len {} after {} ticks", len, n);
            }
        }
    }

    #[test]
    fn nothing_happens_before_the_interval_elapses() {
        let clock = ManualScheduler::new();
        let carousel = controller(&clock, 5);
        carousel.start();

        assert_eq!(clock.advance(INTERVAL - 1), 0);
        assert_eq!(carousel.current(), 0);
        assert_eq!(clock.advance(1), 1);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn timer_is_rearmed_once_per_tick() {
        let clock = ManualScheduler::new();
        let carousel = controller(&clock, 4);
        carousel.start();
        carousel.start();
        assert_eq!(clock.pending(), 1);

        for _ in 0..6 {
            clock.advance(INTERVAL);
            assert_eq!(clock.pending(), 1);
        }
    }

    #[test]
    fn single_image_stays_at_zero() {
        let clock = ManualScheduler::new();
        let carousel = controller(&clock, 1);
        carousel.start();
        assert_eq!(clock.advance(INTERVAL * 10), 10);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn stop_cancels_the_pending_timer() {
        let clock = ManualScheduler::new();
        let carousel = controller(&clock, 3);
        carousel.start();
        clock.advance(INTERVAL);
        carousel.stop();

        assert!(!carousel.is_running());
        assert_eq!(clock.pending(), 0);
        assert_eq!(clock.advance(INTERVAL * 5), 0);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn dropping_the_controller_stops_updates() {
        let clock = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let carousel = controller(&clock, 3);
            let seen = seen.clone();
            carousel.subscribe(Callback::from(move |i: usize| seen.borrow_mut().push(i)));
            carousel.start();
            clock.advance(INTERVAL);
        }
        assert_eq!(clock.pending(), 0);
        clock.advance(INTERVAL * 3);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn every_subscriber_sees_the_same_index() {
        let clock = ManualScheduler::new();
        let carousel = controller(&clock, 29);
        let hero = Rc::new(Cell::new(0usize));
        let results = Rc::new(Cell::new(0usize));
        {
            let hero = hero.clone();
            carousel.subscribe(Callback::from(move |i: usize| hero.set(i)));
        }
        {
            let results = results.clone();
            carousel.subscribe(Callback::from(move |i: usize| results.set(i)));
        }
        carousel.start();

        for _ in 0..40 {
            clock.advance(INTERVAL);
            assert_eq!(hero.get(), results.get());
        }
        assert_eq!(hero.get(), 40 % 29);
    }

    #[test]
    fn subscriber_can_stop_mid_tick() {
        let clock = ManualScheduler::new();
        let carousel = Rc::new(controller(&clock, 3));
        {
            let weak = Rc::downgrade(&carousel);
            carousel.subscribe(Callback::from(move |i: usize| {
                if i == 2 {
                    if let Some(carousel) = weak.upgrade() {
                        carousel.stop();
                    }
                }
            }));
        }
        carousel.start();
        clock.advance(INTERVAL * 5);
        assert_eq!(carousel.current(), 2);
        assert_eq!(clock.pending(), 0);
    }
}
