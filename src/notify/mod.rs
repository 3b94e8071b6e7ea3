pub mod email;

/// Per-run delivery summary. A recipient failure is counted, not propagated,
/// so one bad address cannot lose the remaining sends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SendReport {
    pub sent: usize,
    pub failed: usize,
}
