use std::cell::RefCell;
use std::rc::Rc;

use gloo::storage::{errors::StorageError, LocalStorage, Storage};

use crate::domain::errors::{AppError, StorageResult};
use crate::domain::graph::Theme;
use crate::domain::logging::{get_logger, LogComponent};
use crate::domain::repositories::{ThemePreferenceRepository, DARK_MODE_KEY};

/// Theme flag in `window.localStorage`, stored as JSON `true`/`false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageThemeRepository;

impl LocalStorageThemeRepository {
    pub fn new() -> Self {
        Self
    }
}

impl ThemePreferenceRepository for LocalStorageThemeRepository {
    fn load(&self) -> StorageResult<Option<Theme>> {
        match LocalStorage::get::<bool>(DARK_MODE_KEY) {
            Ok(dark) => Ok(Some(Theme::from_dark_flag(dark))),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(e) => Err(AppError::StorageError(e.to_string())),
        }
    }

    fn save(&mut self, theme: Theme) -> StorageResult<()> {
        LocalStorage::set(DARK_MODE_KEY, theme.is_dark()).map_err(|e| AppError::StorageError(e.to_string()))?;
        get_logger().debug(
            LogComponent::Infrastructure("ThemeStorage"),
            &format!("Stored {}={}", DARK_MODE_KEY, theme.is_dark()),
        );
        Ok(())
    }
}

/// Process-local repository; clones share the same slot, which stands in
/// for storage surviving a page reload.
#[derive(Debug, Clone, Default)]
pub struct InMemoryThemeRepository {
    stored: Rc<RefCell<Option<Theme>>>,
}

impl InMemoryThemeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self { stored: Rc::new(RefCell::new(Some(theme))) }
    }
}

impl ThemePreferenceRepository for InMemoryThemeRepository {
    fn load(&self) -> StorageResult<Option<Theme>> {
        Ok(*self.stored.borrow())
    }

    fn save(&mut self, theme: Theme) -> StorageResult<()> {
        *self.stored.borrow_mut() = Some(theme);
        Ok(())
    }
}
