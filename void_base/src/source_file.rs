//! Contains the code related to the source code input.

use std::{
    fmt::{Debug, Display},
    fs::File,
    path::{Path, PathBuf},
    sync::Arc,
};

use derive_new::new;
use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use thiserror::Error;

/// Represents an error that occurs when loading/creating a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error(transparent)]
    Utf8Error(#[from] std::str::Utf8Error),
}

/// Represents a source file handed to the lexical analysis phase.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the full path to the source file.
    #[get = "pub"]
    full_path: PathBuf,

    /// Gets the display name of the source file, stamped into every token location.
    #[get = "pub"]
    name: Arc<str>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("name", &self.name)
            .field("len", &self.content().len())
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    #[borrows(mapped)]
    mapped_str: &'this str,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files cannot be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        MappedSourceTryBuilder {
            file,
            mapped,
            mapped_str_builder: |mapped| {
                mapped
                    .as_ref()
                    .map_or(Ok(""), |mapped| std::str::from_utf8(mapped).map_err(Error::from))
            },
        }
        .try_build()
    }

    fn content(&self) -> &str { self.borrow_mapped_str() }
}

/// Gets the final segment of the path, falling back to the whole path when there is none.
fn display_name(path: &Path) -> Arc<str> {
    path.file_name()
        .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
        .into()
}

impl SourceFile {
    /// Gets the whole content of the source file.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Checks whether the source file contains no bytes at all.
    #[must_use]
    pub fn is_empty(&self) -> bool { self.content().is_empty() }

    /// Loads the source file from an already opened file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;

        Ok(Arc::new(Self {
            source,
            name: display_name(&path),
            full_path: path,
        }))
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    /// - [`Error::Utf8Error`]: Error occurred when converting the mapped bytes to a string.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        use std::io::Write;

        let mut tempfile = tempfile::Builder::new()
            .prefix("void")
            .suffix(".void")
            .tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }
}

/// Is a struct pointing to the position of a character in a named source.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, new)]
pub struct Location {
    /// The display name of the source the location belongs to.
    pub source_name: Arc<str>,

    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (starts at 1 for a located character).
    pub column: usize,
}

impl Location {
    /// Creates a location pointing nowhere within the given source.
    ///
    /// Used for tokens that are still being built.
    #[must_use]
    pub fn unset(source_name: Arc<str>) -> Self { Self::new(source_name, 0, 0) }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{\"source_name\":{:?}, \"line\":{}, \"column\":{}}}",
            self.source_name, self.line, self.column
        )
    }
}
