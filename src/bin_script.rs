//! BIN scripted-bytecode disassembly: a 60-byte header followed by an
//! instruction stream whose upper bound narrows as string/array arguments
//! are discovered interleaved with the code.
use std::io::{Read, Seek, SeekFrom};

use byteorder::{LittleEndian, ReadBytesExt};
use serde::{Deserialize, Serialize};

use crate::{
    error::Error,
    opcodes::{self, INLINE_ARRAY_OPCODE},
};

const HEADER_SIZE: u64 = 60;
const STRING_ARG_TYPE: u32 = 2;
const ARG_TYPE_LOW_MAX: u32 = 0x0E;
const ARG_TYPE_HIGH_MIN: u32 = 0x8003;
const ARG_TYPE_HIGH_MAX: u32 = 0x800B;
const STRING_TERMINATOR: u8 = 0xFF;

/// The 60-byte `BIN` file header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinHeader {
    pub signature: [u8; 8],
    pub int1: u32,
    pub float1: u32,
    pub string1: u32,
    pub int2: u32,
    pub unknown: u32,
    pub string2: u32,
    pub sub_header_size: u32,
    pub table1_size: u32,
    pub table1_offset: u32,
    pub table2_size: u32,
    pub table2_offset: u32,
    pub table3_size: u32,
    pub table3_offset: u32,
}

/// One argument of an instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub arg_type: u32,
    pub raw: [u8; 4],
    pub offset: u64,
    /// Present only for `arg_type == 2` (string) arguments.
    pub string_bytes: Option<Vec<u8>>,
    /// Present only for the opcode `0x64`, argument index 1 special case.
    pub array_values: Option<Vec<u32>>,
}

/// One decoded instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instruction {
    pub offset: u64,
    pub opcode: u32,
    pub mnemonic: String,
    pub arguments: Vec<Argument>,
}

/// A fully disassembled BIN program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinProgram {
    pub header: BinHeader,
    pub instructions: Vec<Instruction>,
}

impl BinProgram {
    /// Serializes the disassembled program as a pretty-printed JSON record,
    /// the structured counterpart to the plain-text strings table.
    pub fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }
}

/// Disassembles a BIN byte stream from any `Read + Seek` source.
pub fn disassemble<R: Read + Seek>(mut input: R) -> Result<BinProgram, Error> {
    let header = read_header(&mut input)?;

    let smallest_table_offset = header
        .table1_offset
        .min(header.table2_offset)
        .min(header.table3_offset);
    let mut data_end = HEADER_SIZE + 4 * smallest_table_offset as u64;

    let mut instructions = Vec::new();

    loop {
        let file_offset = input.stream_position().map_err(Error::from)?;
        if file_offset >= data_end {
            break;
        }

        let opcode = input.read_u32::<LittleEndian>().map_err(|_| Error::ShortRead {
            offset: file_offset,
            expected: 4,
            actual: 0,
        })?;
        let info = opcodes::lookup(opcode, file_offset)?;

        let mut arguments = Vec::with_capacity(info.arity as usize);
        for arg_index in 0..info.arity {
            let arg_offset = input.stream_position().map_err(Error::from)?;
            let arg_type = input.read_u32::<LittleEndian>().map_err(|_| Error::ShortRead {
                offset: arg_offset,
                expected: 4,
                actual: 0,
            })?;
            let mut raw = [0u8; 4];
            input.read_exact(&mut raw).map_err(|_| Error::ShortRead {
                offset: arg_offset + 4,
                expected: 4,
                actual: 0,
            })?;

            let in_low_range = arg_type <= ARG_TYPE_LOW_MAX;
            let in_high_range = (ARG_TYPE_HIGH_MIN..=ARG_TYPE_HIGH_MAX).contains(&arg_type);
            if !in_low_range && !in_high_range {
                return Err(Error::BadArgType {
                    offset: arg_offset,
                    arg_type,
                });
            }

            let mut argument = Argument {
                arg_type,
                raw,
                offset: arg_offset,
                string_bytes: None,
                array_values: None,
            };

            if arg_type == STRING_ARG_TYPE {
                let string_offset = HEADER_SIZE + 4 * LittleEndian::read_u32(&raw) as u64;
                data_end = data_end.min(string_offset);
                argument.string_bytes = Some(read_masked_string(&mut input, arg_offset, string_offset)?);
            } else if opcode == INLINE_ARRAY_OPCODE && arg_index == 1 {
                let array_offset = HEADER_SIZE + 4 * LittleEndian::read_u32(&raw) as u64;
                data_end = data_end.min(array_offset);
                argument.array_values = Some(read_inline_array(&mut input, arg_offset, array_offset)?);
            }

            arguments.push(argument);
        }

        instructions.push(Instruction {
            offset: file_offset,
            opcode,
            mnemonic: info.mnemonic.to_string(),
            arguments,
        });
    }

    Ok(BinProgram { header, instructions })
}

fn read_header<R: Read>(input: &mut R) -> Result<BinHeader, Error> {
    let mut signature = [0u8; 8];
    input.read_exact(&mut signature).map_err(|_| Error::ShortRead {
        offset: 0,
        expected: 8,
        actual: 0,
    })?;

    Ok(BinHeader {
        signature,
        int1: input.read_u32::<LittleEndian>()?,
        float1: input.read_u32::<LittleEndian>()?,
        string1: input.read_u32::<LittleEndian>()?,
        int2: input.read_u32::<LittleEndian>()?,
        unknown: input.read_u32::<LittleEndian>()?,
        string2: input.read_u32::<LittleEndian>()?,
        sub_header_size: input.read_u32::<LittleEndian>()?,
        table1_size: input.read_u32::<LittleEndian>()?,
        table1_offset: input.read_u32::<LittleEndian>()?,
        table2_size: input.read_u32::<LittleEndian>()?,
        table2_offset: input.read_u32::<LittleEndian>()?,
        table3_size: input.read_u32::<LittleEndian>()?,
        table3_offset: input.read_u32::<LittleEndian>()?,
    })
}

/// Reads an XOR-0xFF-masked, `0xFF`-terminated string at `target`,
/// restoring the seek position afterward. `ref_offset` is the argument
/// slot that pointed here, used only for error reporting.
fn read_masked_string<R: Read + Seek>(input: &mut R, ref_offset: u64, target: u64) -> Result<Vec<u8>, Error> {
    let resume_at = input.stream_position().map_err(Error::from)?;
    input.seek(SeekFrom::Start(target)).map_err(Error::from)?;

    let mut decoded = Vec::new();
    let mut byte = [0u8; 1];
    loop {
        let n = input.read(&mut byte).map_err(Error::from)?;
        if n == 0 {
            return Err(Error::BadRefOffset {
                offset: ref_offset,
                target,
            });
        }
        if byte[0] == STRING_TERMINATOR {
            break;
        }
        decoded.push(byte[0] ^ 0xFF);
    }

    input.seek(SeekFrom::Start(resume_at)).map_err(Error::from)?;
    Ok(decoded)
}

/// Reads the inline `u32` array referenced by opcode `0x64`'s second
/// argument, restoring the seek position afterward. `ref_offset` is the
/// argument slot that pointed here, used only for error reporting.
fn read_inline_array<R: Read + Seek>(input: &mut R, ref_offset: u64, target: u64) -> Result<Vec<u32>, Error> {
    let resume_at = input.stream_position().map_err(Error::from)?;
    input.seek(SeekFrom::Start(target)).map_err(Error::from)?;

    let count = input.read_u32::<LittleEndian>().map_err(|_| Error::BadRefOffset {
        offset: ref_offset,
        target,
    })?;

    let mut values = Vec::with_capacity(count as usize);
    for i in 0..count {
        values.push(input.read_u32::<LittleEndian>().map_err(|_| Error::BadRefOffset {
            offset: ref_offset,
            target: target + 4 + 4 * i as u64,
        })?);
    }

    input.seek(SeekFrom::Start(resume_at)).map_err(Error::from)?;
    Ok(values)
}
