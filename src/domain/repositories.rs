use crate::domain::errors::StorageResult;
use crate::domain::graph::Theme;

/// Storage key of the persisted dark-mode flag
pub const DARK_MODE_KEY: &str = "darkmode";

/// Durable storage of the theme preference
pub trait ThemePreferenceRepository {
    /// `Ok(None)` when nothing was stored yet
    fn load(&self) -> StorageResult<Option<Theme>>;

    fn save(&mut self, theme: Theme) -> StorageResult<()>;
}
