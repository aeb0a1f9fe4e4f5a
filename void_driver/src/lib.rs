//! Drives the lexical front end from the command line: reads a source file, tokenizes it and
//! prints the tokens.

use std::{
    cell::Cell,
    fs::File,
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use thiserror::Error;
use void_base::{
    diagnostic::Handler,
    log::{Message, Severity},
    source_file::{self, SourceFile},
};
use void_lexical::{error, token_stream::TokenStream};

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "void",
    about = "Tokenizes a Void source file and prints its tokens.",
    author = "66011245@kmitl.ac.th"
)]
pub struct Argument {
    /// The source file to tokenize.
    pub file: PathBuf,

    /// Leaves whitespace and comment tokens out of the output.
    #[clap(long = "skip-trivia")]
    pub skip_trivia: bool,
}

/// Is an enumeration of the failures that stop the source file from being tokenized at all.
#[derive(Debug, Error)]
pub enum Error {
    /// The file does not exist or cannot be opened.
    #[error("couldn't find specified file `{}`: {source}", path.display())]
    Open {
        /// The path given by the user.
        path: PathBuf,

        /// The underlying failure.
        source: std::io::Error,
    },

    /// The file was opened but its content could not be read as text.
    #[error("couldn't read `{}`: {source}", path.display())]
    Load {
        /// The path given by the user.
        path: PathBuf,

        /// The underlying failure.
        source: source_file::Error,
    },

    /// The file contains nothing to tokenize.
    #[error("`{}` is empty", path.display())]
    Empty {
        /// The path given by the user.
        path: PathBuf,
    },
}

/// A struct that implements [`Handler`] by printing every diagnostic to the standard error
/// stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    failed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            failed: Cell::new(false),
        }
    }

    /// Checks whether any diagnostic of [`Severity::Error`] has been printed.
    fn has_failed(&self) -> bool { self.failed.get() }
}

impl Handler<error::Error> for Printer {
    fn receive(&self, diagnostic: error::Error) {
        eprintln!("{diagnostic}");

        if diagnostic.severity() == Severity::Error {
            self.failed.set(true);
        }
    }
}

/// Reads the source file at the given path and tokenizes it.
///
/// Tokens are located within the final segment of the path.
///
/// # Errors
/// - [`Error::Open`]: The file does not exist or cannot be opened.
/// - [`Error::Load`]: The file cannot be mapped to memory or is not valid UTF-8.
/// - [`Error::Empty`]: The file is empty; it is rejected before scanning.
pub fn tokenize_file(
    path: &Path,
    handler: &dyn Handler<error::Error>,
) -> Result<TokenStream, Error> {
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_owned(),
        source,
    })?;

    let source_file = SourceFile::load(file, path.to_owned()).map_err(|source| Error::Load {
        path: path.to_owned(),
        source,
    })?;

    if source_file.is_empty() {
        return Err(Error::Empty {
            path: path.to_owned(),
        });
    }

    Ok(TokenStream::tokenize(&source_file, handler))
}

/// Runs the program with the given arguments.
#[must_use]
pub fn run(argument: &Argument) -> ExitCode {
    let printer = Printer::new();

    let token_stream = match tokenize_file(&argument.file, &printer) {
        Ok(token_stream) => token_stream,
        Err(error) => {
            eprintln!("{}", Message::new(Severity::Error, error));
            return ExitCode::FAILURE;
        }
    };

    // early exit
    if printer.has_failed() {
        return ExitCode::FAILURE;
    }

    for token in token_stream
        .iter()
        .filter(|token| !(argument.skip_trivia && token.is_trivia()))
    {
        println!("{token}");
    }

    ExitCode::SUCCESS
}
