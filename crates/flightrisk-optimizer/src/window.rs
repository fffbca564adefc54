use serde::{Deserialize, Serialize};

/// One memoized slot evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotProbe {
    pub slot: usize,
    pub epoch: i64,
    /// Percent. Failed evaluations are recorded as 0.
    pub success_probability: f64,
    pub failed: bool,
}

/// Optimizer result.
///
/// `recommended == None` means no scanned slot met the risk threshold;
/// `drop_dead == None` means the flight is unreachable from every scanned
/// slot. When both are set, `recommended ≤ drop_dead`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DepartureWindow {
    pub recommended: Option<i64>,
    pub drop_dead: Option<i64>,
    /// The time budget ran out; the answer reflects only the probes below.
    pub timed_out: bool,
    /// Number of evaluator calls made.
    pub evaluations: usize,
    /// Every evaluated slot, in probe order.
    pub probes: Vec<SlotProbe>,
}

impl DepartureWindow {
    /// `(recommended, drop_dead)`.
    pub fn as_pair(&self) -> (Option<i64>, Option<i64>) {
        (self.recommended, self.drop_dead)
    }

    /// Both answers absent.
    pub fn is_unreachable(&self) -> bool {
        self.recommended.is_none() && self.drop_dead.is_none()
    }
}
