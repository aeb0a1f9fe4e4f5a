//! This crate implements the lexical analysis phase of the Void front end. This phase is
//! responsible for turning the source code into a sequence of classified tokens.
//!
//! The work is done in two passes: the [`scanner`] splits the text into raw lexemes and resolves
//! comments, then the [`classifier`] assigns the remaining lexemes their kinds using the
//! [`tables`]. The final output is a [`token_stream::TokenStream`].

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod classifier;
pub mod error;
pub mod scanner;
pub mod tables;
pub mod token;
pub mod token_stream;
