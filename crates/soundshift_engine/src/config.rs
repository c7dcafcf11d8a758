//! Configuration for rule application.

/// Where the cursor lands after a leftward movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorPolicy {
    /// Leftward moves leave the cursor where the match started; rightward
    /// moves step it past the moved segment.
    #[default]
    Asymmetric,
    /// Both directions step the cursor past everything they rewrote.
    Symmetric,
}

/// Configuration for an [`Engine`](crate::Engine).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// Cursor repositioning after a leftward movement.
    pub cursor_policy: CursorPolicy,

    /// Sweep steps one rule may take over one word beyond the word's own
    /// length before it is treated as runaway.
    pub max_steps: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cursor_policy: CursorPolicy::Asymmetric,
            max_steps: 100_000,
        }
    }
}

impl EngineConfig {
    /// The default configuration, matching established rule behavior.
    #[must_use]
    pub fn compatible() -> Self {
        Self::default()
    }

    /// A configuration with symmetric cursor repositioning.
    #[must_use]
    pub fn symmetric() -> Self {
        Self {
            cursor_policy: CursorPolicy::Symmetric,
            ..Self::default()
        }
    }

    /// Builder method to set the cursor policy.
    #[must_use]
    pub fn with_cursor_policy(mut self, policy: CursorPolicy) -> Self {
        self.cursor_policy = policy;
        self
    }

    /// Builder method to set the sweep step allowance.
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }
}
