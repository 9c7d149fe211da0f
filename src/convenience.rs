//! Path-taking convenience wrappers over the generic `Read`/`Read + Seek`
//! core functions, for callers that just want to point at files on disk.
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::{
    agf::{self, AgfImage},
    alf::{self, ExtractedEntry},
    bin_script::{self, BinProgram},
    cancel::CancellationToken,
    error::Error,
    metadata::{self, Metadata},
};

/// Decodes an AGF image from disk.
pub fn decode_agf_file(path: impl AsRef<Path>, force_rgb: bool) -> Result<AgfImage, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::file_open(e, path.to_string_lossy().to_string()))?;
    agf::decode(&bytes, force_rgb)
}

/// Parses a `SYS4INI.BIN` or `*.AAI` metadata file from disk.
pub fn parse_metadata_file(path: impl AsRef<Path>) -> Result<Metadata, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_open(e, path.to_string_lossy().to_string()))?;
    metadata::parse_metadata(BufReader::new(file))
}

/// Disassembles a BIN script file from disk.
pub fn disassemble_bin_file(path: impl AsRef<Path>) -> Result<BinProgram, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::file_open(e, path.to_string_lossy().to_string()))?;
    bin_script::disassemble(BufReader::new(file))
}

/// Extracts every entry in `metadata` from archives rooted in `archive_dir`
/// (the directory the metadata file itself lives in), skipping entries
/// whose name already exists under `archive_dir` unless `force` is set.
pub fn extract_archive_entries(
    metadata: &Metadata,
    archive_dir: impl AsRef<Path>,
    force: bool,
    cancel: &CancellationToken,
) -> Result<Vec<ExtractedEntry>, Error> {
    let archive_dir = archive_dir.as_ref();
    alf::extract_all(
        metadata,
        |name| {
            let filename = String::from_utf8_lossy(name).into_owned();
            let path = archive_dir.join(filename);
            File::open(&path).map_err(|e| Error::file_open(e, path.to_string_lossy().to_string()))
        },
        |name| {
            let filename = String::from_utf8_lossy(name).into_owned();
            archive_dir.join(filename).exists()
        },
        force,
        cancel,
    )
}
