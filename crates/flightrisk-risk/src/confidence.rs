use flightrisk_core::models::TrafficEstimate;

/// Agreement of the traffic collaborator's own estimates, 0–100.
///
/// `100 × (1 − (pessimistic − optimistic) / likely)`, truncated, floored at 0.
/// A zero `likely` gives 0.
pub fn model_confidence(traffic: &TrafficEstimate) -> u8 {
    let (optimistic, likely, pessimistic) = traffic.minutes();
    if likely <= 0.0 {
        return 0;
    }
    let spread = (pessimistic - optimistic) / likely;
    (100.0 * (1.0 - spread)).clamp(0.0, 100.0) as u8
}
