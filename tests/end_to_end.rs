use std::fs::{self, File};
use std::io::Write;

use age_assets::{
    decode_agf_file, disassemble_bin_file, extract_archive_entries, parse_metadata_file, AgfImage,
    CancellationToken, Raster,
};

fn section_bytes(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    out.extend_from_slice(payload);
    out
}

fn bitmap_header_section(width: i32, height: i32, bit_count: u16, palette: &[u8]) -> Vec<u8> {
    let mut payload = vec![0u8; 14 + 2]; // BITMAPFILEHEADER + padding, left zeroed
    payload.extend_from_slice(&40u32.to_le_bytes()); // bi_size
    payload.extend_from_slice(&width.to_le_bytes());
    payload.extend_from_slice(&height.to_le_bytes());
    payload.extend_from_slice(&1u16.to_le_bytes()); // bi_planes
    payload.extend_from_slice(&bit_count.to_le_bytes());
    payload.extend_from_slice(&0u32.to_le_bytes()); // bi_compression
    payload.extend_from_slice(&0u32.to_le_bytes()); // bi_size_image
    payload.extend_from_slice(&0i32.to_le_bytes());
    payload.extend_from_slice(&0i32.to_le_bytes());
    payload.extend_from_slice(&0u32.to_le_bytes()); // bi_clr_used
    payload.extend_from_slice(&0u32.to_le_bytes()); // bi_clr_important
    payload.extend_from_slice(palette);
    section_bytes(&payload)
}

fn agf_header(agf_type: u32) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(b"AGF\0");
    out.extend_from_slice(&agf_type.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes());
    out
}

#[test]
fn decodes_a_hand_built_agf_type1_image_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("icon.agf");

    let mut bytes = agf_header(1);
    bytes.extend(bitmap_header_section(2, 2, 8, &[]));
    bytes.extend(section_bytes(&[1, 2, 3, 4]));
    fs::write(&path, &bytes).unwrap();

    let image = decode_agf_file(&path, false).unwrap();
    match image {
        AgfImage::TwentyFourBit(Raster::Gray8 { width, height, pixels }) => {
            assert_eq!((width, height), (2, 2));
            assert_eq!(pixels, vec![1, 2, 3, 4]);
        }
        other => panic!("expected Gray8 raster, got {other:?}"),
    }
}

fn metadata_bytes() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(&1u32.to_le_bytes());
    let mut archive_record = vec![0u8; 256];
    archive_record[..5].copy_from_slice(b"a.alf");
    body.extend_from_slice(&archive_record);

    body.extend_from_slice(&1u32.to_le_bytes());
    let mut entry_record = vec![0u8; 80];
    entry_record[..5].copy_from_slice(b"x.bin");
    entry_record[64..68].copy_from_slice(&0u32.to_le_bytes());
    entry_record[68..72].copy_from_slice(&0u32.to_le_bytes());
    entry_record[72..76].copy_from_slice(&0u32.to_le_bytes());
    entry_record[76..80].copy_from_slice(&4u32.to_le_bytes());
    body.extend_from_slice(&entry_record);

    let mut out = Vec::new();
    out.extend_from_slice(&[0u8; 240]);
    out.extend_from_slice(&[0u8; 60]);
    out.extend(section_bytes(&body));
    out
}

#[test]
fn parses_metadata_and_extracts_its_one_entry_from_an_archive_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let metadata_path = dir.path().join("SYS4INI.BIN");
    fs::write(&metadata_path, metadata_bytes()).unwrap();

    let archive_path = dir.path().join("a.alf");
    File::create(&archive_path).unwrap().write_all(b"ABCDEFG").unwrap();

    let metadata = parse_metadata_file(&metadata_path).unwrap();
    assert_eq!(metadata.archive_names.len(), 1);
    assert_eq!(metadata.entries.len(), 1);

    let extracted = extract_archive_entries(&metadata, dir.path(), false, &CancellationToken::new()).unwrap();
    assert_eq!(extracted.len(), 1);
    assert_eq!(extracted[0].name, b"x.bin");
    assert_eq!(extracted[0].bytes, b"ABCD");
}

#[test]
fn disassembles_a_hand_built_bin_file_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.bin");

    let mut bytes = Vec::new();
    bytes.extend_from_slice(b"BINFILE\0");
    for _ in 0..6 {
        bytes.extend_from_slice(&0u32.to_le_bytes());
    }
    bytes.extend_from_slice(&0u32.to_le_bytes()); // sub_header_size
    bytes.extend_from_slice(&0u32.to_le_bytes()); // table1_size
    bytes.extend_from_slice(&1u32.to_le_bytes()); // table1_offset
    bytes.extend_from_slice(&0u32.to_le_bytes()); // table2_size
    bytes.extend_from_slice(&1u32.to_le_bytes()); // table2_offset
    bytes.extend_from_slice(&0u32.to_le_bytes()); // table3_size
    bytes.extend_from_slice(&1u32.to_le_bytes()); // table3_offset
    bytes.extend_from_slice(&2u32.to_le_bytes()); // exit opcode
    fs::write(&path, &bytes).unwrap();

    let program = disassemble_bin_file(&path).unwrap();
    assert_eq!(program.instructions.len(), 1);
    assert_eq!(program.instructions[0].mnemonic, "exit");

    let json = program.to_json().unwrap();
    assert!(json.contains("\"exit\""));
}
