//! Common utilities for MHD decoding.
//!
//! This crate provides the foundation every MHD decoder is built on:
//!
//! - [`BinaryReader`] - Forward-only cursor over a byte slice
//! - [`BinaryWriter`] - The mirror image, used for round-trip verification
//! - [`RecordReader`] - Field-annotating wrapper used by record decoders
//! - [`array`] - The three list conventions of the format
//! - [`Error`] - Decode/format errors carrying an offset and a context trail

mod codec;
mod error;
mod reader;
mod record;
mod writer;

pub mod array;

pub use codec::{Decode, Encode, WireEnum};
pub use error::{DecodeError, Error, FormatError, FormatErrorKind, Result, ResultExt, Trail};
pub use reader::BinaryReader;
pub use record::RecordReader;
pub use writer::BinaryWriter;
