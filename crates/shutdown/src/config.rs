//! Configuration for the shutdown manager.

/// Default label recorded on the shutdown span
const DEFAULT_NAME: &str = "shutdown";

/// Configuration for [`Manager`](crate::Manager) behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShutdownConfig {
    /// Label recorded on the `shutdown` tracing span
    pub name: String,
    /// Drop every handler after a shutdown pass, making later calls no-ops.
    ///
    /// Off by default: calling shutdown again runs every handler again.
    pub clear_after_shutdown: bool,
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            clear_after_shutdown: false,
        }
    }
}

impl ShutdownConfig {
    /// Create a config whose handlers run at most once
    pub fn once() -> Self {
        Self {
            clear_after_shutdown: true,
            ..Default::default()
        }
    }

    /// Set the span label
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
