pub mod control_strip;
pub mod phase_breakdown;
pub mod swing_canvas;
