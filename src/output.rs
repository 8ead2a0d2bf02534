use crate::{Error, Result};
use std::io::Write;
use std::path::Path;

/// Writes the mindex buffer verbatim to `path`, returning the byte count.
///
/// The buffer is staged in a temporary file next to the destination and
/// renamed into place only after a full write, so a failed build never leaves
/// a truncated file that looks valid.
pub fn write_mindex(buf: &[u8], path: &Path) -> Result<u64> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(buf)?;
    tmp.flush()?;

    tmp.persist(path)
        .map_err(|e| Error::Io(e.error))?;

    Ok(buf.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_buffer_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindex");

        let buf: Vec<u8> = (0..32).collect();
        let written = write_mindex(&buf, &path).unwrap();

        assert_eq!(written, 32);
        assert_eq!(std::fs::read(&path).unwrap(), buf);
    }

    #[test]
    fn test_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindex");
        std::fs::write(&path, b"stale and longer than the new contents").unwrap();

        write_mindex(&[1, 2, 3], &path).unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_no_stray_temp_files_left() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mindex");

        write_mindex(&[0; 16], &path).unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec!["mindex"]);
    }
}
