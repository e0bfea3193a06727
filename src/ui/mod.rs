pub mod action;
pub mod appearance;
pub mod context;
pub mod effect;
pub mod layout;
pub mod metrics;
pub mod notifications;
pub mod overlays;
pub mod search;
pub mod state;
pub mod store;
mod transitions;
pub mod viewport;

pub use action::Action;
pub use appearance::{Preferences, PreferencesPatch, RemotePreferences, Theme};
pub use context::{Clock, FixedClock, IdSource, RandomIds, SequentialIds, SystemClock};
pub use effect::Effect;
pub use state::{PersistedAppearance, SessionDefaults, UiState};
pub use store::UiStore;
pub use viewport::{Breakpoint, Viewport, ViewportSize};
