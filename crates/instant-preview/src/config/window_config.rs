use serde::{Deserialize, Serialize};

/// Window handoff settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowConfig {
    /// URL or path opened when the main application window is requested.
    #[serde(default)]
    pub main_app: Option<String>,
}
