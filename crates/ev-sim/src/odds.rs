//! Encounter-count → probability conversion.
//!
//! Each encounter is an independent 1-in-10 interception chance, so the
//! probability of being caught at least once over `k` encounters is
//! `1 - 0.9^k`.

/// Probability of interception given `encounters` adversary encounters.
///
/// Zero encounters means zero risk; otherwise `1 - 0.9^k`.
pub fn capture_probability(encounters: u32) -> f64 {
    if encounters == 0 {
        return 0.0;
    }
    1.0 - 0.9f64.powi(encounters as i32)
}

/// Success chance as a rounded integer percentage: `round(100 · 0.9^k)`.
///
/// Strictly decreasing in the encounter count; 100 at zero encounters.
pub fn success_percentage(encounters: u32) -> u32 {
    (100.0 * (1.0 - capture_probability(encounters))).round() as u32
}
