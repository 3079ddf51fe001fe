use bravonest_core::{PreferenceStore, SiteError, SiteResult};
use web_sys::Storage;

/// `localStorage`, which may be missing or locked down (private mode)
#[derive(Debug, Default)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage(&self) -> SiteResult<Storage> {
        web_sys::window()
            .ok_or_else(|| SiteError::Storage("no window".to_string()))?
            .local_storage()
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))?
            .ok_or_else(|| SiteError::Storage("localStorage unavailable".to_string()))
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn get(&self, key: &str) -> SiteResult<Option<String>> {
        self.storage()?
            .get_item(key)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }

    fn set(&mut self, key: &str, value: &str) -> SiteResult<()> {
        self.storage()?
            .set_item(key, value)
            .map_err(|e| SiteError::Storage(format!("{:?}", e)))
    }
}
