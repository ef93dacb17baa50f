//! Line-terminator scanning and consistency classification for eolmark.
//!
//! This crate is the pure core of the tool: given document text it locates
//! every line terminator, classifies each one as LF, CRLF, or bare CR, and
//! flags the terminators that deviate from the document's expected style.
//! It performs no I/O, holds no state across calls, and never fails;
//! both entry points are total over arbitrary input text.
//!
//! - [`scan`] produces the ordered sequence of [`TerminatorOccurrence`]s.
//! - [`classify`] labels each occurrence against a [`DominantStyle`] and
//!   aggregates the result into a [`ScanReport`].
//!
//! Everything host-facing (reading files, rendering markers, configuration)
//! lives in the `eolmark` application crate.

pub mod classifier;
pub mod kind;
pub mod scanner;

pub use classifier::{Classification, ScanReport, classify};
pub use kind::{DominantStyle, TerminatorKind};
pub use scanner::{TerminatorOccurrence, scan};
