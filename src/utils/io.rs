use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Read a whole file or fail.
pub fn read_file(path: &Path) -> std::io::Result<Vec<u8>> {
    fs::read(path)
}

/// Write a whole file through a temp sibling plus rename, so an interrupted
/// write never leaves a partial file at the destination path.
pub fn write_file_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let tmp = temp_sibling(path);
    let result = (|| {
        let mut file = fs::File::create(&tmp)?;
        file.write_all(data)?;
        file.sync_all()?;
        fs::rename(&tmp, path)
    })();
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("huffpack-io-{}-{}", std::process::id(), name))
    }

    #[test]
    fn atomic_write_then_read_round_trips() {
        let path = scratch("roundtrip");
        write_file_atomic(&path, b"payload").unwrap();
        assert_eq!(read_file(&path).unwrap(), b"payload");
        assert!(!super::temp_sibling(&path).exists());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn failed_write_leaves_no_temp_file() {
        let path = scratch("missing-dir").join("out");
        assert!(write_file_atomic(&path, b"x").is_err());
    }
}
