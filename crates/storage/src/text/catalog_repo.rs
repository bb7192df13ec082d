use async_trait::async_trait;
use spelling_core::model::WordCatalog;

use super::format::{parse_word_list, render_word_list};
use super::{CatalogSource, TextFileRepository, read_optional, write_file};
use crate::repository::{CatalogRepository, StorageError};

#[async_trait]
impl CatalogRepository for TextFileRepository {
    async fn load_catalog(&self) -> Result<WordCatalog, StorageError> {
        let path = match &self.catalog_source {
            CatalogSource::Embedded => return Ok(WordCatalog::embedded()),
            CatalogSource::WordList(path) => path,
        };

        match read_optional(path).await? {
            Some(text) => Ok(WordCatalog::new(parse_word_list(&text))?),
            None => {
                let sample = WordCatalog::sample();
                // A read-only location still gets the sample for this run.
                match write_file(path, render_word_list(sample.words())).await {
                    Ok(()) => log::info!("created sample word list at {}", path.display()),
                    Err(err) => log::warn!("could not write sample word list: {err}"),
                }
                Ok(sample)
            }
        }
    }
}
