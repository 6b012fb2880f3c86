//! Runtime configuration for the orchestrator.

/// Orchestrator settings.
///
/// # Examples
///
/// ```
/// use seat_alloc::orchestrator::RuntimeConfig;
///
/// let config = RuntimeConfig::default()
///     .with_idle_zone_threshold(2)
///     .with_dispatch_energy(false);
/// assert_eq!(config.idle_zone_threshold, 2);
/// assert!(!config.dispatch_energy);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuntimeConfig {
    /// Zones with at most this many occupied seats are powered off.
    pub idle_zone_threshold: usize,

    /// Run the energy optimizer after every assignment.
    pub dispatch_energy: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            idle_zone_threshold: 0,
            dispatch_energy: true,
        }
    }
}

impl RuntimeConfig {
    pub fn with_idle_zone_threshold(mut self, threshold: usize) -> Self {
        self.idle_zone_threshold = threshold;
        self
    }

    pub fn with_dispatch_energy(mut self, enabled: bool) -> Self {
        self.dispatch_energy = enabled;
        self
    }
}
