use flightrisk_core::models::AirportTier;

/// Thirty busiest hubs.
pub const TIER_1: [&str; 30] = [
    "ATL", "DFW", "DEN", "ORD", "LAX", "JFK", "LAS", "MCO", "MIA", "CLT", "SEA", "PHX", "EWR",
    "SFO", "IAH", "BOS", "FLL", "MSP", "LGA", "DTW", "PHL", "SLC", "DCA", "SAN", "BWI", "TPA",
    "AUS", "IAD", "BNA", "MDW",
];

/// Regional hubs.
pub const TIER_2: [&str; 11] = [
    "PBI", "BUR", "SNA", "HOU", "DAL", "STL", "PDX", "SMF", "OAK", "RDU", "RSW",
];

/// `"jfk International"` → `"JFK"`: first token, upper-cased, at most 3 chars.
pub fn normalize_code(raw: &str) -> String {
    raw.split_whitespace()
        .next()
        .unwrap_or("")
        .chars()
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Tier by static membership. Unknown codes are tier 3.
pub fn classify(airport_code: &str) -> AirportTier {
    let code = normalize_code(airport_code);
    if TIER_1.contains(&code.as_str()) {
        AirportTier::Tier1
    } else if TIER_2.contains(&code.as_str()) {
        AirportTier::Tier2
    } else {
        AirportTier::Tier3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_lists_do_not_overlap() {
        assert!(TIER_2.iter().all(|c| !TIER_1.contains(c)));
    }
}
