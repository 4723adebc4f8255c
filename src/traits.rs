use std::path::Path;

/// JSON persistence for configuration types.
pub trait ConfigFS {
    type OutType;
    /// Returns `Ok(None)` when `path` is not a `.json` file.
    async fn read(path: &Path) -> anyhow::Result<Option<Self::OutType>>;
    async fn save(&self, path: &Path) -> anyhow::Result<()>;
}
