//! Reverses the container, image, and script-bytecode formats produced by
//! a Japanese visual-novel engine ("AGE engine").
//!
//! It reads the engine's master metadata file, the flat archive files it
//! references, the LZSS-compressed image format ("AGF"), and the
//! instruction-stream script format ("BIN"). It produces extracted
//! assets, decoded rasters, and disassembled script listings.
//!
//! | Module        | Responsibility                                         |
//! |----------------|--------------------------------------------------------|
//! | [`lzss`]        | LZSS decompression primitive                            |
//! | [`section`]      | Section envelope (length header + optional LZSS)       |
//! | [`bitmap`]       | Windows DIB bitmap header parsing                      |
//! | [`agf`]          | AGF image decoding                                     |
//! | [`metadata`]     | `SYS4INI.BIN` / `*.AAI` metadata-file parsing           |
//! | [`alf`]          | ALF flat-archive extraction                             |
//! | [`opcodes`]      | Static BIN opcode table                                 |
//! | [`bin_script`]   | BIN bytecode disassembly                                |
//! | [`strings`]      | CP932 decoding and TSV string-table export              |
//! | [`sprite`]       | Map-icon sprite-sheet cropping                          |
//! | [`cancel`]       | Cooperative cancellation                                |
//! | [`convenience`]  | Path-taking wrappers over the above                     |
#![warn(missing_docs)]

pub mod agf;
pub mod alf;
pub mod bin_script;
pub mod bitmap;
pub mod cancel;
pub mod convenience;
pub mod error;
pub mod lzss;
pub mod metadata;
pub mod opcodes;
pub mod section;
pub mod sprite;
pub mod strings;

pub use agf::{AgfImage, Agf32Image, PalettedWithAlpha, Raster};
pub use alf::ExtractedEntry;
pub use bin_script::{Argument, BinHeader, BinProgram, Instruction};
pub use bitmap::{BitmapHeader, FileHeader, InfoHeader};
pub use cancel::CancellationToken;
pub use convenience::{decode_agf_file, disassemble_bin_file, extract_archive_entries, parse_metadata_file};
pub use error::{Error, Result};
pub use metadata::{ArchiveName, Entry, Metadata};
pub use sprite::{Cropped, MapIconSplit, Region};
pub use strings::{collect_string_table, decode_cp932, render_tsv, StringTableRow};
