//! Note writer — persists one markdown note per search result.
//!
//! Layout on disk: `{root}/{sanitize(query)}/{sanitize(title)}.md`, each file
//! carrying a front matter block followed by a title heading and the result
//! body. Notes are create-only; a path collision is an error, never a
//! silent overwrite.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::models::SearchResult;
use crate::notes::file_ops::{sanitize_title, Vault};

pub struct NoteWriter {
    vault: Arc<dyn Vault>,
    root_folder: PathBuf,
}

impl NoteWriter {
    pub fn new(vault: Arc<dyn Vault>, root_folder: impl Into<PathBuf>) -> Self {
        Self {
            vault,
            root_folder: root_folder.into(),
        }
    }

    /// Persist one result under the keyword's subfolder, creating the root
    /// and keyword folders if absent. Returns the path of the created note.
    pub fn save_result(&self, keyword: &str, result: &SearchResult) -> Result<PathBuf> {
        if !self.vault.exists(&self.root_folder) {
            self.vault.create_folder(&self.root_folder)?;
        }

        let keyword_folder = self.root_folder.join(sanitize_title(keyword));
        if !self.vault.exists(&keyword_folder) {
            self.vault.create_folder(&keyword_folder)?;
        }

        let file_path = keyword_folder.join(format!("{}.md", sanitize_title(&result.title)));
        let content = render_note(result);
        self.vault.create_file(&file_path, &content)?;

        log::debug!("[NOTES] Wrote {:?}", file_path);
        Ok(file_path)
    }
}

/// Render a result as markdown: front matter (literal values, not escaped),
/// then an h1 with the original unsanitized title, then the raw body text.
fn render_note(result: &SearchResult) -> String {
    format!(
        "---\nurl: {}\ndate: {}\nauthor: {}\nimage: {}\n---\n\n# {}\n\n{}",
        result.url, result.published_date, result.author, result.image, result.title, result.text
    )
}
