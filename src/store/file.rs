use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{prelude::*, store::Store};

/// Store backed by a flat TOML table on disk.
#[must_use]
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

#[derive(Default, Serialize, Deserialize)]
#[serde(transparent)]
struct Document(BTreeMap<String, String>);

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Document> {
        if !self.path.is_file() {
            return Ok(Document::default());
        }
        let text = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse `{}`", self.path.display()))
    }

    fn write(&self, document: &Document) -> Result {
        fs::write(&self.path, toml::to_string(document)?)
            .with_context(|| format!("failed to write `{}`", self.path.display()))
    }
}

impl Store for FileStore {
    #[instrument(skip_all, fields(path = %self.path.display(), key = key))]
    fn get(&self, key: &str) -> Result<Option<String>> {
        debug!("reading…");
        Ok(self.read()?.0.remove(key))
    }

    #[instrument(skip_all, fields(path = %self.path.display(), key = key, value = value))]
    fn set(&self, key: &str, value: &str) -> Result {
        debug!("writing…");
        let mut document = self.read().unwrap_or_else(|error| {
            warn!("replacing the unreadable document: {error:#}");
            Document::default()
        });
        document.0.insert(key.to_owned(), value.to_owned());
        self.write(&document)
    }
}
