//! Formatting utilities

use spline_anim::{Quaternion, Vector3};

// avoid printing "-0.0000"
fn clean(value: f64) -> f64 {
    value + 0.0
}

/// Format a position as `(x, y, z)`
pub fn format_vector(v: Vector3) -> String {
    format!("({:.4}, {:.4}, {:.4})", clean(v.x), clean(v.y), clean(v.z))
}

/// Format a quaternion as `[s; x, y, z]`
pub fn format_quaternion(q: Quaternion) -> String {
    format!(
        "[{:.4}; {:.4}, {:.4}, {:.4}]",
        clean(q.s),
        clean(q.x()),
        clean(q.y()),
        clean(q.z())
    )
}

/// Format a duration in seconds
pub fn format_seconds(seconds: f64) -> String {
    format!("{:.3}s", clean(seconds))
}
