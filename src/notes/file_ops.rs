//! Filename sanitization and the on-disk vault backend.

use std::fs;
use std::io;
use std::path::Path;

/// Characters that cannot appear in a note filename
const FORBIDDEN: [char; 9] = ['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Sanitize a free-text title for use as a filename.
///
/// Replaces each of `\ / : * ? " < > |` with `_`. Total over all strings;
/// no truncation and no uniqueness enforcement, so two titles may sanitize
/// to the same name (the vault's no-overwrite create surfaces the collision).
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if FORBIDDEN.contains(&c) { '_' } else { c })
        .collect()
}

/// The three filesystem operations the note writer depends on.
///
/// Mirrors the host document-store contract: existence check, folder
/// creation, and create-only file writes.
pub trait Vault: Send + Sync {
    fn exists(&self, path: &Path) -> bool;
    fn create_folder(&self, path: &Path) -> io::Result<()>;
    /// Create a file with the given content. Fails with `AlreadyExists` if
    /// the path is already occupied; existing notes are never overwritten.
    fn create_file(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// Vault backed by the local filesystem
#[derive(Debug, Default, Clone)]
pub struct DiskVault;

impl Vault for DiskVault {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_folder(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn create_file(&self, path: &Path, content: &str) -> io::Result<()> {
        use std::io::Write;
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)?;
        file.write_all(content.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_sanitize_replaces_forbidden_chars() {
        assert_eq!(sanitize_title("A/B:C"), "A_B_C");
        assert_eq!(sanitize_title(r#"a\b/c:d*e?f"g<h>i|j"#), "a_b_c_d_e_f_g_h_i_j");
        assert_eq!(sanitize_title("plain title"), "plain title");
        assert_eq!(sanitize_title(""), "");
    }

    #[test]
    fn test_sanitize_output_never_contains_forbidden_chars() {
        let inputs = [
            "C:\\Users\\notes",
            "what is rust? | a primer",
            "<script>*</script>",
            "unicode ☃ stays / intact?",
        ];
        for input in inputs {
            let out = sanitize_title(input);
            assert!(
                !out.contains(|c| FORBIDDEN.contains(&c)),
                "forbidden char survived in {:?}",
                out
            );
        }
    }

    #[test]
    fn test_disk_vault_create_folder_and_file() {
        let dir = tempdir().unwrap();
        let vault = DiskVault;

        let folder = dir.path().join("Exa").join("rust async");
        assert!(!vault.exists(&folder));
        vault.create_folder(&folder).unwrap();
        assert!(vault.exists(&folder));

        let file = folder.join("Intro.md");
        vault.create_file(&file, "# Intro\n").unwrap();
        assert!(vault.exists(&file));
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "# Intro\n");
    }

    #[test]
    fn test_disk_vault_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let vault = DiskVault;
        let file = dir.path().join("Intro.md");

        vault.create_file(&file, "first").unwrap();
        let err = vault.create_file(&file, "second").unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::AlreadyExists);

        // First write is left intact
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "first");
    }
}
