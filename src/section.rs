//! The 12-byte section envelope that precedes every (possibly LZSS-packed)
//! payload in metadata files and AGF images.
use std::io::Read;

use byteorder::{LittleEndian, ReadBytesExt};

use crate::{error::Error, lzss};

/// Reads one section envelope and returns its decoded payload.
///
/// The envelope is `{ original_length: u32, original_length_repeat: u32,
/// length: u32 }` followed by `length` bytes of payload. When
/// `length == original_length` the payload is literal; otherwise it is
/// LZSS-compressed and must decode to exactly `original_length` bytes.
pub fn read_section<R: Read>(mut input: R) -> Result<Vec<u8>, Error> {
    let original_length = input.read_u32::<LittleEndian>()?;
    let _original_length_repeat = input.read_u32::<LittleEndian>()?;
    let length = input.read_u32::<LittleEndian>()?;

    let mut payload = vec![0u8; length as usize];
    input.read_exact(&mut payload).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            Error::ShortRead {
                offset: 0,
                expected: length as usize,
                actual: 0,
            }
        } else {
            Error::from(e)
        }
    })?;

    if length == original_length {
        return Ok(payload);
    }

    let decoded = lzss::decode(&payload[..])?;
    if decoded.len() as u32 != original_length {
        return Err(Error::CorruptSection {
            offset: 0,
            expected: original_length,
            actual: decoded.len() as u32,
        });
    }
    Ok(decoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uncompressed_section_returns_payload_verbatim() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(&4u32.to_le_bytes());
        bytes.extend_from_slice(b"DATA");

        let out = read_section(&bytes[..]).unwrap();
        assert_eq!(out, b"DATA");
    }

    #[test]
    fn zero_length_section_is_empty_and_not_an_error() {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());
        bytes.extend_from_slice(&0u32.to_le_bytes());

        let out = read_section(&bytes[..]).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn mismatched_decoded_length_is_corrupt_section() {
        // length != original_length forces the LZSS path; feed it a literal
        // stream that decodes to the wrong size.
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&99u32.to_le_bytes());
        bytes.extend_from_slice(&99u32.to_le_bytes());
        bytes.extend_from_slice(&2u32.to_le_bytes());
        bytes.extend_from_slice(&[0xFFu8, b'A']); // one literal byte "A"

        let err = read_section(&bytes[..]).unwrap_err();
        assert!(matches!(err, Error::CorruptSection { .. }));
    }
}
