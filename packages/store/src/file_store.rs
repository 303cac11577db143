//! # Filesystem-backed session store
//!
//! [`FileStore`] is the [`SessionStore`] used on desktop. Each key is written to
//! its own file so that the session survives app restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session/
//!     └── <key>.json         # the payload, exactly as handed to `put`
//! ```
//!
//! Keys are free-form, like browser storage keys. Bytes outside
//! `[A-Za-z0-9_-]` are written as `%XX` in the file name, so `user.info` lands
//! in `user%2Einfo.json` and no key can name a path outside `session/`.
//!
//! Use [`dirs::data_dir()`](https://docs.rs/dirs) to obtain a platform-appropriate base:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/whisper/` |
//! | Linux | `~/.local/share/whisper/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\whisper\` |

use std::path::PathBuf;

use crate::session::{SessionStore, StoreError};

/// Filesystem-backed SessionStore for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_dir(&self) -> PathBuf {
        self.base.join("session")
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.session_dir().join(format!("{}.json", file_stem(key))))
    }
}

fn file_stem(key: &str) -> String {
    let mut stem = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'-' || byte == b'_' {
            stem.push(byte as char);
        } else {
            stem.push_str(&format!("%{byte:02X}"));
        }
    }
    stem
}

impl SessionStore for FileStore {
    async fn get(&self, key: &str) -> Option<String> {
        let path = self.entry_path(key).ok()?;
        std::fs::read_to_string(path).ok()
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        let write_error = |e: std::io::Error| StoreError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        };
        std::fs::create_dir_all(self.session_dir()).map_err(write_error)?;
        std::fs::write(path, value).map_err(write_error)
    }
}
