use serde::{Deserialize, Serialize};

/// What happens to ledger records when their event or person is deleted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadePolicy {
    /// Physically remove the matching records. Destroys history; kept as the
    /// default for compatibility with the established behavior.
    #[default]
    HardDelete,
    /// Mark the matching records CANCELLED instead, preserving history the
    /// same way a normal cancel does.
    SoftCancel,
}

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub cascade: CascadePolicy,
}

impl EngineConfig {
    pub fn with_cascade(cascade: CascadePolicy) -> Self {
        Self { cascade }
    }
}
