//! Infinite slide carousel.
//!
//! The strip holds `len + 2` slots: a copy of the last slide at slot 0, the
//! real slides at slots `1..=len`, and a copy of the first slide at slot
//! `len + 1`. Wrapping forward animates onto the trailing copy and then
//! snaps, without animation, to the real first slide; wrapping backward does
//! the same through the leading copy.
//!
//! While a snap is pending, navigation requests are held back (latest wins)
//! and replayed once the snap has been applied, so a timer tick or a fast
//! click can never land between the animated move and its snap.

/// A navigation request from a button, an indicator or the autoplay timer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Next,
    Prev,
    Jump(usize),
}

/// Visual position of the strip: translate by `-slot * 100%`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transform {
    pub slot: usize,
    pub animated: bool,
}

impl Transform {
    pub fn css(&self) -> String {
        format!("translateX(-{}%)", self.slot * 100)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Settled,
    /// The strip is animating onto a copy; `snap_to` is the real slot to jump to.
    SnapPending { snap_to: usize },
}

/// What the caller has to do after a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Apply `transform`; when `snap_after` is set, call
    /// [`Carousel::complete_snap`] once the transition duration has elapsed.
    Move { transform: Transform, snap_after: bool },
    /// A snap is pending; the request will be replayed by `complete_snap`.
    Queued,
    /// Out-of-range jump; nothing changes.
    Ignored,
}

/// Result of resolving a pending snap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snap {
    pub transform: Transform,
    pub replay: Option<Step>,
}

#[derive(Clone, Debug)]
pub struct Carousel {
    len: usize,
    index: usize,
    phase: Phase,
    queued: Option<Nav>,
}

impl Carousel {
    /// `None` for an empty slide list: there is nothing to clone.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            index: 0,
            phase: Phase::Settled,
            queued: None,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Logical (real) slide index.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn slot_count(&self) -> usize {
        self.len + 2
    }

    #[inline]
    pub fn slot_of(index: usize) -> usize {
        index + 1
    }

    #[inline]
    pub fn queued(&self) -> Option<Nav> {
        self.queued
    }

    /// Resting position right after the copies are inserted.
    pub fn initial_transform(&self) -> Transform {
        Transform {
            slot: Self::slot_of(self.index),
            animated: false,
        }
    }

    /// One flag per real slide; exactly one is set.
    pub fn indicators(&self) -> Vec<bool> {
        (0..self.len).map(|i| i == self.index).collect()
    }

    pub fn next(&mut self) -> Step {
        self.request(Nav::Next)
    }

    pub fn prev(&mut self) -> Step {
        self.request(Nav::Prev)
    }

    pub fn jump(&mut self, index: usize) -> Step {
        self.request(Nav::Jump(index))
    }

    pub fn request(&mut self, nav: Nav) -> Step {
        if let Phase::SnapPending { .. } = self.phase {
            self.queued = Some(nav);
            log::debug!("[carousel] snap pending, queued {:?}", nav);
            return Step::Queued;
        }
        let last = self.len - 1;
        match nav {
            Nav::Next if self.index == last => self.wrap(0, self.len + 1),
            Nav::Next => self.settle_at(self.index + 1),
            Nav::Prev if self.index == 0 => self.wrap(last, 0),
            Nav::Prev => self.settle_at(self.index - 1),
            Nav::Jump(i) if i < self.len => self.settle_at(i),
            Nav::Jump(i) => {
                log::warn!("[carousel] jump to {} out of range (len {})", i, self.len);
                Step::Ignored
            }
        }
    }

    /// Apply the pending snap. Returns `None` when no snap is pending, which
    /// makes a stale timer harmless.
    pub fn complete_snap(&mut self) -> Option<Snap> {
        let Phase::SnapPending { snap_to } = self.phase else {
            return None;
        };
        self.phase = Phase::Settled;
        let replay = self.queued.take().map(|nav| self.request(nav));
        Some(Snap {
            transform: Transform {
                slot: snap_to,
                animated: false,
            },
            replay,
        })
    }

    fn settle_at(&mut self, index: usize) -> Step {
        self.index = index;
        Step::Move {
            transform: Transform {
                slot: Self::slot_of(index),
                animated: true,
            },
            snap_after: false,
        }
    }

    fn wrap(&mut self, index: usize, copy_slot: usize) -> Step {
        self.index = index;
        self.phase = Phase::SnapPending {
            snap_to: Self::slot_of(index),
        };
        Step::Move {
            transform: Transform {
                slot: copy_slot,
                animated: true,
            },
            snap_after: true,
        }
    }
}

/// Holds the autoplay timer handle; at most one timer is ever live.
#[derive(Debug)]
pub struct Autoplay<H> {
    handle: Option<H>,
}

impl<H> Default for Autoplay<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Autoplay<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_live(&self) -> bool {
        self.handle.is_some()
    }

    /// Schedule a timer unless one is already live. `schedule` may fail by
    /// returning `None`, leaving the gate idle. Returns whether a timer is now
    /// live because of this call.
    pub fn start(&mut self, schedule: impl FnOnce() -> Option<H>) -> bool {
        if self.handle.is_some() {
            return false;
        }
        self.handle = schedule();
        self.handle.is_some()
    }

    /// Hand back the live handle for cancellation.
    pub fn stop(&mut self) -> Option<H> {
        self.handle.take()
    }
}
