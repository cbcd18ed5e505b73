use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "jotter";

/// Resolve a file inside the per-user jotter config directory.
///
/// Falls back to the system temp directory when `HOME` is not set.
pub(crate) fn config_file_path(file_name: &str) -> PathBuf {
    let base = match std::env::var("HOME") {
        Ok(home) => Path::new(&home).join(".config"),
        Err(_) => std::env::temp_dir(),
    };

    base.join(CONFIG_DIR_NAME).join(file_name)
}

/// Read a config file, treating a missing file as `None`.
pub(crate) fn read_optional(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Replace a config file in one rename so readers never see a partial
/// payload. Parent directories are created on demand.
pub(crate) fn write_atomic(path: &Path, payload: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, payload)?;
    fs::rename(tmp_path, path)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{config_file_path, read_optional, write_atomic};

    #[test]
    fn given_file_name_when_resolved_then_path_ends_in_jotter_dir() {
        let path = config_file_path("settings.json");

        assert!(path.ends_with("jotter/settings.json"));
    }

    #[test]
    fn given_nested_target_when_written_then_dirs_exist_and_tmp_is_gone() {
        let root = std::env::temp_dir().join(format!(
            "jotter-config-write-{}",
            std::process::id()
        ));
        let path = root.join("nested").join("file.json");

        write_atomic(&path, b"{}").expect("payload should be written");

        assert_eq!(
            read_optional(&path).expect("file should be readable"),
            Some(String::from("{}"))
        );
        assert!(!path.with_extension("json.tmp").exists());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_missing_file_when_read_then_none_is_returned() {
        let path = std::env::temp_dir()
            .join("jotter-config-missing")
            .join("absent.json");

        let contents =
            read_optional(&path).expect("missing file is not an error");

        assert_eq!(contents, None);
    }
}
