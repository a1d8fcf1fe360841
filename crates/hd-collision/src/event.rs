//! Tagged scheduling outcomes and the earliest-event search.
//!
//! Every scheduling step offers all candidate events to an
//! [`EarliestEvent`] and processes the winner.  Nothing is cached between
//! steps: positions and velocities change after each event.
//!
//! # Ties
//!
//! The first candidate offered at the minimal time wins.  Schedulers offer
//! pair collisions in index order before the horizon, the chain end and the
//! sample boundary, so a contact is never skipped because a control event
//! happened to fall on the same instant.

use std::fmt;

use hd_core::DiskId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// `disk` touches `partner`.  In event chains `disk` is the active disk.
    PairCollision { disk: DiskId, partner: DiskId },
    /// The safe displacement is used up; search again without any update.
    Horizon,
    /// The remaining chain time is used up.
    ChainEnd,
    /// The next sampling instant (molecular dynamics).
    SampleBoundary,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::PairCollision { disk, partner } => write!(f, "collision {disk} -> {partner}"),
            Event::Horizon => f.write_str("horizon"),
            Event::ChainEnd => f.write_str("chain end"),
            Event::SampleBoundary => f.write_str("sample boundary"),
        }
    }
}

/// An event together with the time until it happens.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scheduled {
    pub event: Event,
    pub time:  f64,
}

/// Running minimum over offered candidates.
#[derive(Default, Debug)]
pub struct EarliestEvent {
    best: Option<Scheduled>,
}

impl EarliestEvent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer a candidate.  Infinite and NaN times never win.
    #[inline]
    pub fn offer(&mut self, event: Event, time: f64) {
        if !time.is_finite() {
            return;
        }
        match self.best {
            Some(best) if best.time <= time => {}
            _ => self.best = Some(Scheduled { event, time }),
        }
    }

    /// The winner, or `None` if no finite candidate was offered.
    #[inline]
    pub fn take(self) -> Option<Scheduled> {
        self.best
    }
}
