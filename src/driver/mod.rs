//! Driving a collection of tracked elements from frame ticks.
//!
//! The [`Driver`] owns the tracked elements and the [`ScrollHost`] they live
//! in. The host's event wiring forwards scroll, resize, orientation and
//! visibility changes to the matching `on_*` method and calls [`Driver::tick`]
//! once per animation frame. Scroll events only mark a frame as pending, so
//! any number of them collapse into a single sweep.
//!
//! # Example
//! ```ignore
//! let mut driver = Driver::init(ScrollConfig::default(), host);
//!
//! // from the scroll listener
//! driver.on_scroll();
//!
//! // from the animation frame callback
//! driver.tick();
//!
//! // teardown
//! driver.destroy();
//! ```

mod binding;
mod host;

pub use host::{ElementBounds, ScrollHost, Viewport, VisualViewport};

use crate::config::{ClassNames, ScrollConfig};
use crate::tracked::{ElementUpdate, TrackedElement};

pub struct Driver<H: ScrollHost> {
    config: ScrollConfig,
    host: H,
    elements: Vec<TrackedElement<H::Handle>>,
    /// A sweep is pending for the next tick
    frame_requested: bool,
    visible: bool,
    /// Viewport seen by the last sweep, for resize gating
    last_viewport: Option<Viewport>,
    destroyed: bool,
}

impl<H: ScrollHost> Driver<H> {
    /// Discover and bind every matching element, then compute the first state.
    pub fn init(config: ScrollConfig, host: H) -> Self {
        let mut driver = Self {
            config,
            host,
            elements: Vec::new(),
            frame_requested: false,
            visible: true,
            last_viewport: None,
            destroyed: false,
        };
        let bound = driver.rescan();
        log::info!(
            "Tracking {} element(s) matching {:?}",
            bound,
            driver.config.selector
        );
        driver.refresh();
        driver
    }

    pub fn config(&self) -> &ScrollConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn elements(&self) -> &[TrackedElement<H::Handle>] {
        &self.elements
    }

    pub fn element(&self, handle: &H::Handle) -> Option<&TrackedElement<H::Handle>> {
        self.elements.iter().find(|el| el.handle() == handle)
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns true if a sweep will run on the next tick
    pub fn has_pending_frame(&self) -> bool {
        self.frame_requested
    }

    /// Bind elements that match the selector but are not tracked yet.
    ///
    /// Returns the number of newly bound elements. New elements start at
    /// progress 0 and pick up their real state on the next sweep.
    pub fn rescan(&mut self) -> usize {
        if self.destroyed {
            return 0;
        }

        let mut bound = 0;
        for handle in self.host.query(&self.config.selector) {
            if self.elements.iter().any(|el| *el.handle() == handle) {
                continue;
            }
            let element = binding::bind(&self.host, handle, &self.config);
            log::debug!(
                "Bound element with {} range spec(s), interval {:?}, origin {}",
                element.specs().len(),
                element.interval(),
                element.origin()
            );
            self.elements.push(element);
            bound += 1;
        }

        if bound > 0 {
            self.request_frame();
        }
        bound
    }

    /// Stop tracking one element. Returns false if it was not tracked.
    pub fn untrack(&mut self, handle: &H::Handle) -> bool {
        let Some(index) = self.elements.iter().position(|el| el.handle() == handle) else {
            return false;
        };
        let element = self.elements.remove(index);
        self.host.release(element.handle());
        true
    }

    /// Request a sweep on the next tick
    pub fn request_frame(&mut self) {
        if !self.destroyed {
            self.frame_requested = true;
        }
    }

    pub fn on_scroll(&mut self) {
        self.request_frame();
    }

    /// Handle a viewport resize.
    ///
    /// With smart resize on, a resize that keeps the width and moves the
    /// height by less than the configured delta is ignored (mobile browser
    /// toolbars collapsing and expanding).
    pub fn on_resize(&mut self) {
        if self.destroyed {
            return;
        }

        let viewport = self.host.viewport();
        if self.config.smart_resize {
            if let Some(last) = self.last_viewport {
                if !self.is_significant_resize(last, viewport) {
                    log::trace!("Ignoring resize {:?} -> {:?}", last, viewport);
                    return;
                }
            }
        }
        self.refresh_or_defer();
    }

    pub fn on_orientation_change(&mut self) {
        self.refresh_or_defer();
    }

    /// Hidden documents do not sweep; becoming visible again schedules one.
    pub fn on_visibility_change(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.request_frame();
        }
    }

    /// Run the pending sweep, if any. Returns true if a sweep ran.
    pub fn tick(&mut self) -> bool {
        if self.destroyed || !self.visible {
            return false;
        }
        if !std::mem::take(&mut self.frame_requested) {
            return false;
        }
        self.sweep();
        true
    }

    /// Recompute every element immediately.
    pub fn refresh(&mut self) {
        if self.destroyed {
            return;
        }
        self.frame_requested = false;
        self.sweep();
    }

    /// Tear everything down. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        for element in self.elements.drain(..) {
            self.host.release(element.handle());
        }
        self.frame_requested = false;
        self.last_viewport = None;
        self.destroyed = true;
        log::info!("Scroll tracking destroyed");
    }

    /// Hidden documents only queue the sweep for when they become visible
    fn refresh_or_defer(&mut self) {
        if self.visible {
            self.refresh();
        } else {
            self.request_frame();
        }
    }

    fn is_significant_resize(&self, last: Viewport, next: Viewport) -> bool {
        let use_visual = self.config.use_visual_viewport;
        let height_delta =
            (next.effective_height(use_visual) - last.effective_height(use_visual)).abs();
        last.width != next.width || height_delta >= self.config.resize_min_delta
    }

    fn sweep(&mut self) {
        let viewport = self.host.viewport();
        let use_visual = self.config.use_visual_viewport;
        self.last_viewport = Some(viewport);

        log::trace!("Sweeping {} element(s)", self.elements.len());
        for element in self.elements.iter_mut() {
            let handle = element.handle().clone();
            let Some(bounds) = self.host.bounds(&handle) else {
                continue;
            };
            let update = element.update(viewport.geometry(bounds, use_visual), &self.config);
            apply(&mut self.host, &self.config.classes, &handle, &update);
        }
    }
}

impl<H: ScrollHost> Drop for Driver<H> {
    fn drop(&mut self) {
        self.destroy();
    }
}

/// Write values and class levels, then dispatch the edges.
fn apply<H: ScrollHost>(
    host: &mut H,
    classes: &ClassNames,
    handle: &H::Handle,
    update: &ElementUpdate<'_>,
) {
    for value in &update.values {
        host.set_property(handle, value.name, value.value);
    }

    host.set_class(handle, &classes.started, update.flags.is_started());
    host.set_class(handle, &classes.active, update.flags.is_active());
    host.set_class(handle, &classes.ended, update.flags.is_ended());

    for event in &update.events {
        log::debug!("Scroll {} at t={:.4}", event.kind.name(), event.t);
        host.dispatch(handle, *event);
    }
}
