//! Two-phase binary search over a [`TimeGrid`], driven externally.
//!
//! The state machine hands out one slot at a time via [`WindowSearch::next_probe`]
//! and is fed results through [`WindowSearch::record`]. Sync and async drivers
//! share it, so both probe the same sequence for the same evaluator.

use std::collections::HashMap;

use crate::grid::TimeGrid;
use crate::window::{DepartureWindow, SlotProbe};

/// Half-open `[lo, hi)` range still to be searched in one phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Recommended { lo: usize, hi: usize },
    DropDead { lo: usize, hi: usize },
    Done,
}

#[derive(Debug)]
pub struct WindowSearch {
    grid: TimeGrid,
    risk_threshold: f64,
    drop_dead_threshold: f64,
    usable: usize,
    phase: Phase,
    memo: HashMap<usize, f64>,
    probes: Vec<SlotProbe>,
    recommended: Option<usize>,
    drop_dead: Option<usize>,
}

impl WindowSearch {
    /// `usable` is the number of leading slots that may be probed at all.
    pub fn new(
        grid: TimeGrid,
        usable: usize,
        risk_threshold: f64,
        drop_dead_threshold: f64,
    ) -> Self {
        let usable = usable.min(grid.len());
        Self {
            grid,
            risk_threshold,
            drop_dead_threshold,
            usable,
            phase: Phase::Recommended { lo: 0, hi: usable },
            memo: HashMap::new(),
            probes: Vec::new(),
            recommended: None,
            drop_dead: None,
        }
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Next slot needing an evaluation, as `(slot, epoch)`.
    ///
    /// Slots already in the memo are consumed here without being handed out.
    pub fn next_probe(&mut self) -> Option<(usize, i64)> {
        loop {
            match self.phase {
                Phase::Recommended { lo, hi } | Phase::DropDead { lo, hi } if lo < hi => {
                    let mid = lo + (hi - lo) / 2;
                    match self.memo.get(&mid) {
                        Some(&p) => self.apply(mid, p),
                        None => return Some((mid, self.grid.epoch(mid))),
                    }
                }
                Phase::Recommended { .. } => {
                    // The drop-dead slot is never earlier than the recommended one.
                    let hi = self.recommended.map_or(self.usable, |r| r + 1);
                    self.phase = Phase::DropDead { lo: 0, hi };
                }
                Phase::DropDead { .. } => self.phase = Phase::Done,
                Phase::Done => return None,
            }
        }
    }

    /// Record the outcome for a slot returned by [`next_probe`](Self::next_probe).
    pub fn record(&mut self, slot: usize, success_probability: f64, failed: bool) {
        let p = if success_probability.is_finite() {
            success_probability
        } else {
            0.0
        };
        self.memo.insert(slot, p);
        self.probes.push(SlotProbe {
            slot,
            epoch: self.grid.epoch(slot),
            success_probability: p,
            failed,
        });
        self.apply(slot, p);
    }

    fn apply(&mut self, slot: usize, p: f64) {
        self.phase = match self.phase {
            Phase::Recommended { lo, hi } if p >= self.risk_threshold => {
                self.recommended = Some(slot);
                Phase::Recommended { lo, hi: slot.min(hi) }
            }
            Phase::Recommended { hi, .. } => Phase::Recommended { lo: slot + 1, hi },
            Phase::DropDead { lo, hi } if p >= self.drop_dead_threshold => {
                self.drop_dead = Some(slot);
                Phase::DropDead { lo, hi: slot.min(hi) }
            }
            Phase::DropDead { hi, .. } => Phase::DropDead { lo: slot + 1, hi },
            Phase::Done => Phase::Done,
        };
    }

    /// Build the window. With `timed_out`, the drop-dead answer falls back to the
    /// best qualifying slot in the memo.
    pub fn finish(self, timed_out: bool) -> DepartureWindow {
        let recommended = self.recommended;
        let drop_dead = if timed_out {
            self.memo
                .iter()
                .filter(|(slot, p)| {
                    **p >= self.drop_dead_threshold && recommended.map_or(true, |r| **slot <= r)
                })
                .map(|(slot, _)| *slot)
                .min()
        } else {
            self.drop_dead
        };
        DepartureWindow {
            recommended: recommended.map(|s| self.grid.epoch(s)),
            drop_dead: drop_dead.map(|s| self.grid.epoch(s)),
            timed_out,
            evaluations: self.probes.len(),
            probes: self.probes,
        }
    }
}
