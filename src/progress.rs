// src/progress.rs
/// Lightweight progress reporting for the feed load.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once with the attempt budget.
    fn begin(&mut self, _max_attempts: u32) {}

    /// An attempt (1-based) is starting.
    fn attempt(&mut self, _n: u32) {}

    fn attempt_failed(&mut self, _n: u32, _error: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self, _ok: bool) {}
}
