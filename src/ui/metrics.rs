use serde::{Deserialize, Serialize};

/// Render performance counters reported by the view layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceStats {
    /// Number of renders recorded this session.
    pub render_count: u64,
    /// Duration of the last render, in milliseconds.
    pub last_render_time: f64,
    /// Running mean render duration, in milliseconds.
    pub avg_render_time: f64,
    /// Last reported memory usage (bytes), if the host reports one.
    pub memory_usage: Option<f64>,
}

impl PerformanceStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a render's duration and update the running mean.
    ///
    /// The mean is updated incrementally; no per-render history is kept.
    pub fn record_render(&mut self, render_time: f64, memory_usage: Option<f64>) {
        let previous_count = self.render_count as f64;
        self.render_count += 1;
        self.last_render_time = render_time;
        self.avg_render_time =
            (self.avg_render_time * previous_count + render_time) / self.render_count as f64;

        if let Some(memory) = memory_usage {
            self.memory_usage = Some(memory);
        }
    }
}
