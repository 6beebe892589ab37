//! Horizontal/vertical gesture disambiguation and nested-scroller routing.
//!
//! A carousel host owns one primary (horizontal) scroller and, per panel,
//! an optional nested vertical scroller. Until a gesture commits to an
//! axis, its deltas are withheld from both: the router accumulates absolute
//! displacement and locks to the first axis whose total crosses the
//! configured threshold. The small input lag this causes buys clean
//! disambiguation.

use crate::{GestureSink, Scroller, Tickable};
use paneglide_core::{GestureThresholds, Vec2};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Shared handle to a scroller, single-threaded.
pub type ScrollerHandle = Rc<RefCell<Scroller>>;

/// Axis commitment of the active gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisLock {
    Undecided,
    Horizontal,
    Vertical,
}

/// Transient per-gesture record; created on begin, destroyed on end.
struct GestureSession {
    pointer: u64,
    last_cursor: Vec2,
    /// Absolute displacement accumulated per axis while undecided.
    accumulated: Vec2,
    lock: AxisLock,
    /// Nested scroller captured at vertical-lock time.
    delegate: Option<ScrollerHandle>,
}

/// Routes gesture events to the primary carousel or a nested panel scroller.
pub struct GestureRouter {
    thresholds: GestureThresholds,
    primary: ScrollerHandle,
    /// Panel index → nested scroller, populated at configuration time.
    nested: HashMap<usize, ScrollerHandle>,
    /// Host-set focus override; `None` derives focus from the primary's
    /// nearest panel.
    focused: Option<usize>,
    session: Option<GestureSession>,
}

impl GestureRouter {
    pub fn new(primary: ScrollerHandle, thresholds: GestureThresholds) -> Self {
        Self {
            thresholds,
            primary,
            nested: HashMap::new(),
            focused: None,
            session: None,
        }
    }

    pub fn primary(&self) -> &ScrollerHandle {
        &self.primary
    }

    /// Registers the nested scroller owned by a panel.
    pub fn register_nested(&mut self, panel: usize, scroller: ScrollerHandle) {
        self.nested.insert(panel, scroller);
    }

    pub fn unregister_nested(&mut self, panel: usize) {
        self.nested.remove(&panel);
    }

    /// Overrides which panel receives vertically locked gestures; `None`
    /// falls back to the primary's nearest panel.
    pub fn set_focused_panel(&mut self, panel: Option<usize>) {
        self.focused = panel;
    }

    /// Axis commitment of the gesture in flight, if any.
    pub fn axis_lock(&self) -> Option<AxisLock> {
        self.session.as_ref().map(|s| s.lock)
    }

    fn resolve_focus(&self) -> Option<ScrollerHandle> {
        let index = self.focused.or_else(|| self.primary.borrow().nearest_panel());
        index.and_then(|i| self.nested.get(&i)).cloned()
    }
}

impl GestureSink for GestureRouter {
    fn on_begin(&mut self, pointer: u64, position: Vec2) {
        // One session at a time; later pointers are ignored until it ends.
        if self.session.is_some() {
            return;
        }
        self.session = Some(GestureSession {
            pointer,
            last_cursor: position,
            accumulated: Vec2::ZERO,
            lock: AxisLock::Undecided,
            delegate: None,
        });
    }

    fn on_move(&mut self, pointer: u64, position: Vec2) {
        let Some(mut session) = self.session.take() else {
            return;
        };
        if session.pointer != pointer {
            self.session = Some(session);
            return;
        }

        let delta = position - session.last_cursor;
        session.last_cursor = position;

        match session.lock {
            AxisLock::Horizontal => {
                self.primary.borrow_mut().drag_move(position);
            }
            AxisLock::Vertical => {
                if let Some(delegate) = &session.delegate {
                    delegate.borrow_mut().drag_move(position);
                }
            }
            AxisLock::Undecided => {
                // Mostly vertical ticks contribute only damped horizontal
                // displacement, so sideways jitter cannot steal the lock.
                let horizontal_step = if delta.y.abs() >= self.thresholds.vertical_dominance {
                    delta.x / self.thresholds.horizontal_damping
                } else {
                    delta.x
                };
                session.accumulated.x += horizontal_step.abs();
                session.accumulated.y += delta.y.abs();

                if session.accumulated.x > self.thresholds.axis_lock {
                    session.lock = AxisLock::Horizontal;
                    self.primary.borrow_mut().drag_begin(position);
                } else if session.accumulated.y > self.thresholds.axis_lock {
                    session.lock = AxisLock::Vertical;
                    session.delegate = self.resolve_focus();
                    match &session.delegate {
                        Some(delegate) => delegate.borrow_mut().drag_begin(position),
                        None => log::debug!(
                            "vertical lock with no nested scroller registered; deltas dropped"
                        ),
                    }
                }
            }
        }

        self.session = Some(session);
    }

    fn on_end(&mut self, pointer: u64) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.pointer != pointer {
            self.session = Some(session);
            return;
        }

        match session.lock {
            AxisLock::Horizontal => self.primary.borrow_mut().drag_end(),
            AxisLock::Vertical => {
                if let Some(delegate) = &session.delegate {
                    delegate.borrow_mut().drag_end();
                }
            }
            AxisLock::Undecided => {}
        }
    }
}

impl Tickable for GestureRouter {
    /// Ticks the primary scroller and every registered nested scroller.
    /// The primary must not also be registered as a nested scroller.
    fn tick(&mut self, dt: f32) {
        self.primary.borrow_mut().tick(dt);
        for scroller in self.nested.values() {
            scroller.borrow_mut().tick(dt);
        }
    }
}
