//! Format detection and text table parsing for MHD files.
//!
//! MHD data ships either as binary containers or as line-oriented text
//! tables. [`detect`] sniffs the first bytes to tell them apart; text tables
//! are parsed by [`TextTable`].
//!
//! # Example
//!
//! ```
//! use mhd_text::{detect, FormatKind, TextTable};
//!
//! let data = b"Version 1.0\nName\tLevel\nFlares\t1\n";
//! assert_eq!(detect(data)?, FormatKind::TextWithVersion);
//!
//! let table = TextTable::parse(data)?;
//! assert_eq!(table.get(0, "Level"), Some("1"));
//! # Ok::<(), mhd_common::Error>(())
//! ```

mod detect;
mod lines;
mod table;

pub use detect::{detect, FormatKind, MAX_BINARY_HEADER_LEN, VERSION_KEYWORD};
pub use table::TextTable;
