use std::borrow::Cow;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use memmap2::Mmap;

use crate::error::{Error, Result};

/// Splits `text` on runs of whitespace, dropping empty tokens.
pub fn words(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split_whitespace()
}

/// A memory-mapped input file.
///
/// Empty files are not mapped, since a zero-length mapping is not portable.
pub struct MappedInput {
    map: Option<Mmap>,
}

impl MappedInput {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let open_err = |source: io::Error| Error::Open {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(open_err)?;
        let len = file.metadata().map_err(open_err)?.len();
        if len == 0 {
            return Ok(MappedInput { map: None });
        }

        // SAFETY: the mapping is read-only and lives no longer than `self`.
        // Concurrent truncation of the file by another process is not supported.
        let map = unsafe { Mmap::map(&file) }.map_err(open_err)?;
        Ok(MappedInput { map: Some(map) })
    }

    pub fn len(&self) -> usize {
        self.map.as_ref().map_or(0, |map| map.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// File contents as text; invalid UTF-8 sequences become U+FFFD.
    pub fn text(&self) -> Cow<'_, str> {
        match &self.map {
            Some(map) => String::from_utf8_lossy(map),
            None => Cow::Borrowed(""),
        }
    }
}

/// Reads a whole stream as text; invalid UTF-8 sequences become U+FFFD.
pub fn read_text<R: Read>(mut reader: R) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    })
}
