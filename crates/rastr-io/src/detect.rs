//! Format detection utilities.
//!
//! Loading dispatches on the leading signature bytes; saving dispatches on
//! the target extension.
//!
//! | Format | Signature      | Save extension        |
//! |--------|----------------|-----------------------|
//! | PNG    | `0x89 'P'`     | anything not below    |
//! | JPEG   | `0xFF 0xD8`    | `.jpg`, `.jpeg`       |
//! | Raw    | none           | `.raw`                |

use crate::IoResult;
use crate::raw::RawFile;
use std::path::Path;

/// Container formats known to the loader and saver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// Raw native-endian element dump, no header.
    Raw,
}

impl Format {
    /// Detects a codec format from leading bytes.
    ///
    /// Only the first two bytes are inspected. Raw data has no signature,
    /// so this never returns [`Format::Raw`].
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0x89, b'P', ..] => Some(Format::Png),
            [0xFF, 0xD8, ..] => Some(Format::Jpeg),
            _ => None,
        }
    }

    /// Reads the first bytes of `path` and detects its format.
    pub fn detect<P: AsRef<Path>>(path: P) -> IoResult<Option<Self>> {
        let mut file = RawFile::open(path)?;
        let mut header = [0u8; 8];
        let n = file.read_into(&mut header)?;
        Ok(Self::from_bytes(&header[..n]))
    }

    /// Output format for a save target, by extension (case-insensitive).
    ///
    /// `.raw` writes raw elements, `.jpg`/`.jpeg` write JPEG, everything
    /// else writes PNG.
    pub fn for_save<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match ext.as_deref() {
            Some("raw") => Format::Raw,
            Some("jpg") | Some("jpeg") => Format::Jpeg,
            _ => Format::Png,
        }
    }

    /// Short name for display.
    pub fn name(&self) -> &'static str {
        match self {
            Format::Png => "png",
            Format::Jpeg => "jpeg",
            Format::Raw => "raw",
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
