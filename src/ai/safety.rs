//! Keyword screen for hazardous-synthesis requests. Runs before any provider
//! call, so blocked inputs never leave the server.

const BLOCKED_TERMS: &[&str] = &[
    "synthesize",
    "how to make",
    "manufacture",
    "explosive",
    "detonator",
    "nerve agent",
    "vx",
    "sarin",
    "napalm",
    "thermite",
    "bomb",
    "peroxide explosive",
    "tatp",
    "hmtd",
];

/// Case-insensitive substring match against the blocklist.
pub fn likely_unsafe(text: &str) -> bool {
    let lower = text.to_lowercase();
    BLOCKED_TERMS.iter().any(|term| lower.contains(term))
}
