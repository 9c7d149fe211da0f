//! ALF flat-archive extraction: given parsed metadata and a way to open the
//! archives it names, stream out the raw bytes of any entry.
use std::collections::HashMap;
use std::io::{Read, Seek, SeekFrom};

use crate::{cancel::CancellationToken, error::Error, metadata::Metadata};

/// A single extracted entry, named and with its raw (untransformed) bytes.
/// The payload may be AGF, BIN, audio, or anything else; the extractor does
/// not interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedEntry {
    pub name: Vec<u8>,
    pub bytes: Vec<u8>,
}

/// Extracts every entry in `metadata`, opening archives on demand via
/// `open_archive` and caching the resulting handle for the rest of the
/// call keyed by archive filename.
///
/// `exists` reports whether an output already exists for a given entry
/// name; when it returns `true` and `force` is `false`, the entry is
/// skipped without reading from its archive, decoupled from any particular
/// filesystem layout.
pub fn extract_all<R, OpenFn, ExistsFn>(
    metadata: &Metadata,
    mut open_archive: OpenFn,
    mut exists: ExistsFn,
    force: bool,
    cancel: &CancellationToken,
) -> Result<Vec<ExtractedEntry>, Error>
where
    R: Read + Seek,
    OpenFn: FnMut(&[u8]) -> Result<R, Error>,
    ExistsFn: FnMut(&[u8]) -> bool,
{
    let mut handles: HashMap<u32, R> = HashMap::new();
    let mut out = Vec::with_capacity(metadata.entries.len());

    for entry in &metadata.entries {
        if cancel.is_cancelled() {
            break;
        }

        if !force && exists(&entry.name) {
            continue;
        }

        let archive = metadata
            .archive_names
            .get(entry.archive_index as usize)
            .ok_or(Error::ArchiveOutOfRange {
                index: entry.archive_index,
                archive_count: metadata.archive_names.len() as u32,
            })?;

        if !handles.contains_key(&entry.archive_index) {
            let handle = open_archive(&archive.name)?;
            handles.insert(entry.archive_index, handle);
        }
        let handle = handles.get_mut(&entry.archive_index).expect("just inserted");

        handle
            .seek(SeekFrom::Start(entry.offset as u64))
            .map_err(Error::from)?;
        let mut bytes = vec![0u8; entry.length as usize];
        handle.read_exact(&mut bytes).map_err(|_| Error::ShortRead {
            offset: entry.offset as u64,
            expected: entry.length as usize,
            actual: 0,
        })?;

        out.push(ExtractedEntry {
            name: entry.name.clone(),
            bytes,
        });
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{ArchiveName, Entry};
    use std::io::Cursor;

    fn sample_metadata() -> Metadata {
        Metadata {
            header_signature: vec![0u8; 240],
            header_tail: vec![0u8; 60],
            archive_names: vec![ArchiveName {
                name: b"DATA.ALF".to_vec(),
            }],
            entries: vec![
                Entry {
                    name: b"a.bin".to_vec(),
                    archive_index: 0,
                    file_index: 0,
                    offset: 0,
                    length: 4,
                },
                Entry {
                    name: b"b.bin".to_vec(),
                    archive_index: 0,
                    file_index: 1,
                    offset: 4,
                    length: 3,
                },
            ],
        }
    }

    #[test]
    fn extracts_each_entry_at_its_offset() {
        let metadata = sample_metadata();
        let archive_bytes = b"AAAABBB".to_vec();

        let extracted = extract_all(
            &metadata,
            |_name| Ok(Cursor::new(archive_bytes.clone())),
            |_name| false,
            false,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(extracted.len(), 2);
        assert_eq!(extracted[0].bytes, b"AAAA");
        assert_eq!(extracted[1].bytes, b"BBB");
    }

    #[test]
    fn skips_existing_output_unless_forced() {
        let metadata = sample_metadata();
        let archive_bytes = b"AAAABBB".to_vec();

        let extracted = extract_all::<Cursor<Vec<u8>>, _, _>(
            &metadata,
            |_name| Ok(Cursor::new(archive_bytes.clone())),
            |name| name == b"a.bin",
            false,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(extracted.len(), 1);
        assert_eq!(extracted[0].name, b"b.bin");
    }

    #[test]
    fn cancellation_stops_before_the_next_entry() {
        let metadata = sample_metadata();
        let archive_bytes = b"AAAABBB".to_vec();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let extracted = extract_all::<Cursor<Vec<u8>>, _, _>(
            &metadata,
            |_name| Ok(Cursor::new(archive_bytes.clone())),
            |_name| false,
            false,
            &cancel,
        )
        .unwrap();

        assert!(extracted.is_empty());
    }

    #[test]
    fn out_of_range_archive_index_is_an_error() {
        let mut metadata = sample_metadata();
        metadata.entries[0].archive_index = 7;

        let err = extract_all::<Cursor<Vec<u8>>, _, _>(
            &metadata,
            |_name| Ok(Cursor::new(Vec::new())),
            |_name| false,
            false,
            &CancellationToken::new(),
        )
        .unwrap_err();

        assert!(matches!(err, Error::ArchiveOutOfRange { .. }));
    }
}
