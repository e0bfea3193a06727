use crate::data::StorageKey;

/// Side effects that should be executed outside the reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Write `value` under `key` in the persistent backend (best-effort)
    Persist { key: StorageKey, value: String },
}

impl Effect {
    pub fn persist(key: StorageKey, value: impl Into<String>) -> Self {
        Effect::Persist {
            key,
            value: value.into(),
        }
    }
}
