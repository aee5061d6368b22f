pub mod build_info;
pub mod gems;
pub mod items;
pub mod stats;

// ── Tests ──
