use flightrisk_core::config::OptimizerConfig;
use flightrisk_core::constants::SECS_PER_MINUTE;
use serde::{Deserialize, Serialize};

/// Fixed-stride backward grid of candidate departures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGrid {
    anchor_epoch: i64,
    stride_secs: i64,
    slots: usize,
}

impl TimeGrid {
    pub fn new(anchor_epoch: i64, stride_secs: i64, slots: usize) -> Self {
        Self {
            anchor_epoch,
            stride_secs: stride_secs.max(1),
            slots,
        }
    }

    /// Grid for a gate deadline: anchored at
    /// `deadline − (boarding_cutoff + time_to_kill)` minutes.
    pub fn for_deadline(
        gate_deadline_epoch: i64,
        time_to_kill_mins: i64,
        config: &OptimizerConfig,
    ) -> Self {
        let offset_mins = config.boarding_cutoff_mins + time_to_kill_mins.max(0);
        Self::new(
            gate_deadline_epoch - offset_mins * SECS_PER_MINUTE as i64,
            config.stride_secs,
            config.max_slots,
        )
    }

    pub fn anchor_epoch(&self) -> i64 {
        self.anchor_epoch
    }

    pub fn stride_secs(&self) -> i64 {
        self.stride_secs
    }

    pub fn len(&self) -> usize {
        self.slots
    }

    pub fn is_empty(&self) -> bool {
        self.slots == 0
    }

    /// Departure epoch for `slot`. Slot 0 is the anchor itself.
    pub fn epoch(&self, slot: usize) -> i64 {
        self.anchor_epoch - slot as i64 * self.stride_secs
    }

    /// Inverse of [`epoch`](Self::epoch) for on-grid epochs.
    pub fn slot_of(&self, epoch: i64) -> Option<usize> {
        let back = self.anchor_epoch - epoch;
        if back < 0 || back % self.stride_secs != 0 {
            return None;
        }
        let slot = usize::try_from(back / self.stride_secs).ok()?;
        (slot < self.slots).then_some(slot)
    }

    /// Number of leading slots departing no earlier than `earliest_epoch`.
    /// Later slots are in the past (or too close to now) and never probed.
    pub fn usable_slots(&self, earliest_epoch: i64) -> usize {
        if self.anchor_epoch < earliest_epoch {
            return 0;
        }
        let span = (self.anchor_epoch - earliest_epoch) / self.stride_secs;
        usize::try_from(span + 1).map_or(self.slots, |n| n.min(self.slots))
    }
}
