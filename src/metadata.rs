//! `SYS4INI.BIN` / `*.AAI` metadata-file parsing: a 240-byte signature, a
//! 60-byte tail, one section holding an archive-name list and an entry
//! list.
use std::io::Read;

use byteorder::{ByteOrder, LittleEndian, ReadBytesExt};

use crate::{error::Error, section};

const SIGNATURE_SIZE: usize = 240;
const TAIL_SIZE: usize = 60;
const ARCHIVE_NAME_RECORD_SIZE: usize = 256;
const ENTRY_RECORD_SIZE: usize = 80;
const S4AC_SEEK_OFFSET: u64 = 268;

/// One entry in the archive-name list: the flat archive this metadata file
/// references, trimmed at the first NUL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveName {
    pub name: Vec<u8>,
}

/// One entry in the per-file entry list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: Vec<u8>,
    pub archive_index: u32,
    pub file_index: u32,
    pub offset: u32,
    pub length: u32,
}

/// A fully parsed metadata file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub header_signature: Vec<u8>,
    pub header_tail: Vec<u8>,
    pub archive_names: Vec<ArchiveName>,
    pub entries: Vec<Entry>,
}

/// Parses a metadata file from any `Read` source. The caller is responsible
/// for seeking; this function reads sequentially from the current position.
pub fn parse_metadata<R: Read + std::io::Seek>(mut input: R) -> Result<Metadata, Error> {
    let mut header_signature = vec![0u8; SIGNATURE_SIZE];
    input.read_exact(&mut header_signature).map_err(|_| Error::ShortRead {
        offset: 0,
        expected: SIGNATURE_SIZE,
        actual: 0,
    })?;

    let mut header_tail = vec![0u8; TAIL_SIZE];
    input.read_exact(&mut header_tail).map_err(|_| Error::ShortRead {
        offset: SIGNATURE_SIZE as u64,
        expected: TAIL_SIZE,
        actual: 0,
    })?;

    if &header_signature[0..4] == b"S4AC" {
        input
            .seek(std::io::SeekFrom::Start(S4AC_SEEK_OFFSET))
            .map_err(Error::from)?;
    }

    let body = section::read_section(&mut input)?;
    let mut body = &body[..];

    let archive_count = body.read_u32::<LittleEndian>()? as usize;
    let archive_names = read_records(&mut body, archive_count, ARCHIVE_NAME_RECORD_SIZE, |record| {
        ArchiveName {
            name: trim_at_nul(record),
        }
    })?;

    let entry_count = body.read_u32::<LittleEndian>()? as usize;
    let entries = read_records(&mut body, entry_count, ENTRY_RECORD_SIZE, |record| Entry {
        name: trim_at_nul(&record[0..64]),
        archive_index: LittleEndian::read_u32(&record[64..68]),
        file_index: LittleEndian::read_u32(&record[68..72]),
        offset: LittleEndian::read_u32(&record[72..76]),
        length: LittleEndian::read_u32(&record[76..80]),
    })?;

    Ok(Metadata {
        header_signature,
        header_tail,
        archive_names,
        entries,
    })
}

fn read_records<T>(
    body: &mut &[u8],
    count: usize,
    record_size: usize,
    make: impl Fn(&[u8]) -> T,
) -> Result<Vec<T>, Error> {
    let total = count
        .checked_mul(record_size)
        .ok_or_else(|| Error::other("record count overflow"))?;
    if body.len() < total {
        return Err(Error::ShortRead {
            offset: 0,
            expected: total,
            actual: body.len(),
        });
    }

    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        out.push(make(&body[i * record_size..(i + 1) * record_size]));
    }
    *body = &body[total..];
    Ok(out)
}

fn trim_at_nul(data: &[u8]) -> Vec<u8> {
    match data.iter().position(|&b| b == 0) {
        Some(pos) => data[..pos].to_vec(),
        None => data.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn section_bytes(payload: &[u8]) -> Vec<u8> {
        let mut section = Vec::new();
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        section.extend_from_slice(payload);
        section
    }

    fn archive_record(name: &[u8]) -> Vec<u8> {
        let mut record = vec![0u8; ARCHIVE_NAME_RECORD_SIZE];
        record[..name.len()].copy_from_slice(name);
        record
    }

    fn entry_record(name: &[u8], archive_index: u32, file_index: u32, offset: u32, length: u32) -> Vec<u8> {
        let mut record = vec![0u8; ENTRY_RECORD_SIZE];
        record[..name.len()].copy_from_slice(name);
        record[64..68].copy_from_slice(&archive_index.to_le_bytes());
        record[68..72].copy_from_slice(&file_index.to_le_bytes());
        record[72..76].copy_from_slice(&offset.to_le_bytes());
        record[76..80].copy_from_slice(&length.to_le_bytes());
        record
    }

    #[test]
    fn parses_tiny_metadata_file() {
        let mut body = Vec::new();
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&archive_record(b"DATA.ALF"));
        body.extend_from_slice(&1u32.to_le_bytes());
        body.extend_from_slice(&entry_record(b"image.agf", 0, 7, 1024, 2048));

        let mut bytes = Vec::new();
        bytes.extend_from_slice(&[0u8; SIGNATURE_SIZE]);
        bytes.extend_from_slice(&[0u8; TAIL_SIZE]);
        bytes.extend_from_slice(&section_bytes(&body));

        let metadata = parse_metadata(Cursor::new(bytes)).unwrap();
        assert_eq!(metadata.archive_names.len(), 1);
        assert_eq!(metadata.archive_names[0].name, b"DATA.ALF");
        assert_eq!(metadata.entries.len(), 1);
        assert_eq!(metadata.entries[0].name, b"image.agf");
        assert_eq!(metadata.entries[0].file_index, 7);
        assert_eq!(metadata.entries[0].offset, 1024);
        assert_eq!(metadata.entries[0].length, 2048);
    }

    #[test]
    fn s4ac_signature_seeks_to_268() {
        let mut body = Vec::new();
        body.extend_from_slice(&0u32.to_le_bytes());
        body.extend_from_slice(&0u32.to_le_bytes());

        let mut bytes = vec![0u8; S4AC_SEEK_OFFSET as usize];
        bytes[0..4].copy_from_slice(b"S4AC");
        bytes.extend_from_slice(&section_bytes(&body));

        let metadata = parse_metadata(Cursor::new(bytes)).unwrap();
        assert!(metadata.archive_names.is_empty());
        assert!(metadata.entries.is_empty());
    }

    #[test]
    fn short_header_is_an_error() {
        let bytes = vec![0u8; 100];
        assert!(parse_metadata(Cursor::new(bytes)).is_err());
    }
}
