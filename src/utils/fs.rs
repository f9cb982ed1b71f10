//! Filesystem helpers shared by the log store and the exporters.

use crate::errors::AppResult;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Replaces `path` with `bytes` by writing a sibling temp file and renaming it
/// over the target, so readers never observe a half-written file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_sibling(path);
    {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }

    if let Err(e) = fs::rename(&tmp, path) {
        fs::remove_file(&tmp).ok();
        return Err(e.into());
    }
    Ok(())
}

fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overwrites_existing_content_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_atomic(&path, b"[1]").unwrap();
        write_atomic(&path, b"[1, 2]").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[1, 2]");
        assert!(!tmp_sibling(&path).exists());
    }
}
