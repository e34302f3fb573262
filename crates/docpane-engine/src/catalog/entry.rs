use serde::Serialize;

use super::title::{id_for, title_for};

/// One document in the catalog.
///
/// `id` and `title` are derived from `filename` and never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CatalogEntry {
    id: String,
    title: String,
    filename: String,
}

impl CatalogEntry {
    pub fn from_filename(filename: &str) -> Self {
        Self {
            id: id_for(filename),
            title: title_for(filename),
            filename: filename.to_string(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }
}
