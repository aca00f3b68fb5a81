//! Reader for the LevelDB sorted string table format, which TensorFlow uses
//! for the `.index` file of a checkpoint.
//!
//! Layout: data blocks, a metaindex block, an index block whose values are
//! handles of the data blocks, and a fixed 48 byte footer. Every block is
//! followed by a compression byte and a masked CRC32C.

use protobuf::CodedInputStream;

use crate::crc;
use crate::error::{Error, Result};

pub const FOOTER_LEN: usize = 48;
pub const MAGIC: u64 = 0xdb47_7524_8b80_fb57;
const BLOCK_TRAILER_LEN: usize = 5;
const NO_COMPRESSION: u8 = 0;

fn corrupt(reason: impl Into<String>) -> Error {
    Error::Table(reason.into())
}

/// Decode a base-128 varint starting at `*pos`, advancing `*pos`.
pub fn read_varint64(buf: &[u8], pos: &mut usize) -> Result<u64> {
    let rest = buf.get(*pos..).ok_or_else(|| corrupt("varint offset past end"))?;
    let mut input = CodedInputStream::from_bytes(rest);
    let value = input
        .read_raw_varint64()
        .map_err(|err| corrupt(format!("bad varint at offset {}: {}", *pos, err)))?;
    *pos += input.pos() as usize;
    Ok(value)
}

fn read_varint32(buf: &[u8], pos: &mut usize) -> Result<u32> {
    let value = read_varint64(buf, pos)?;
    u32::try_from(value).map_err(|_| corrupt("varint32 overflow"))
}

fn read_u32_le(buf: &[u8], at: usize) -> Result<u32> {
    let bytes = buf
        .get(at..at + 4)
        .ok_or_else(|| corrupt("truncated fixed32"))?;
    Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockHandle {
    pub offset: u64,
    pub size: u64,
}

impl BlockHandle {
    pub fn decode(buf: &[u8], pos: &mut usize) -> Result<Self> {
        let offset = read_varint64(buf, pos)?;
        let size = read_varint64(buf, pos)?;
        Ok(BlockHandle { offset, size })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Footer {
    pub metaindex: BlockHandle,
    pub index: BlockHandle,
}

impl Footer {
    pub fn decode(file: &[u8]) -> Result<Self> {
        if file.len() < FOOTER_LEN {
            return Err(corrupt(format!(
                "file is {} bytes, shorter than the footer",
                file.len()
            )));
        }
        let footer = &file[file.len() - FOOTER_LEN..];
        let magic_lo = read_u32_le(footer, FOOTER_LEN - 8)?;
        let magic_hi = read_u32_le(footer, FOOTER_LEN - 4)?;
        let magic = (u64::from(magic_hi) << 32) | u64::from(magic_lo);
        if magic != MAGIC {
            return Err(corrupt(format!("bad magic number {:#018x}", magic)));
        }

        let mut pos = 0;
        let metaindex = BlockHandle::decode(footer, &mut pos)?;
        let index = BlockHandle::decode(footer, &mut pos)?;
        Ok(Footer { metaindex, index })
    }
}

/// A block whose trailer has been checked.
pub struct Block<'a> {
    data: &'a [u8],
    restarts_offset: usize,
}

impl<'a> Block<'a> {
    fn read(file: &'a [u8], handle: BlockHandle) -> Result<Self> {
        let start = usize::try_from(handle.offset).map_err(|_| corrupt("block offset overflow"))?;
        let size = usize::try_from(handle.size).map_err(|_| corrupt("block size overflow"))?;
        let end = start
            .checked_add(size)
            .and_then(|end| end.checked_add(BLOCK_TRAILER_LEN))
            .ok_or_else(|| corrupt("block handle overflow"))?;
        if end > file.len() {
            return Err(corrupt(format!(
                "block at {}+{} runs past end of file ({} bytes)",
                start,
                size,
                file.len()
            )));
        }

        let data = &file[start..start + size];
        let compression = file[start + size];
        let expected = crc::unmask(read_u32_le(file, start + size + 1)?);
        let actual = crc32c::crc32c_append(crc32c::crc32c(data), &[compression]);
        if expected != actual {
            return Err(Error::ChecksumMismatch {
                what: format!("table block at offset {}", start),
                expected,
                actual,
            });
        }
        if compression != NO_COMPRESSION {
            return Err(corrupt(format!(
                "block at offset {} uses unsupported compression type {}",
                start, compression
            )));
        }

        Block::parse(data)
    }

    fn parse(data: &'a [u8]) -> Result<Self> {
        if data.len() < 4 {
            return Err(corrupt("block shorter than its restart count"));
        }
        let num_restarts = read_u32_le(data, data.len() - 4)? as usize;
        let restarts_len = num_restarts
            .checked_mul(4)
            .and_then(|n| n.checked_add(4))
            .ok_or_else(|| corrupt("restart count overflow"))?;
        if restarts_len > data.len() {
            return Err(corrupt(format!(
                "{} restarts do not fit in a {} byte block",
                num_restarts,
                data.len()
            )));
        }
        Ok(Block {
            data,
            restarts_offset: data.len() - restarts_len,
        })
    }

    /// All entries of the block, keys fully expanded.
    pub fn entries(&self) -> Result<Vec<(Vec<u8>, &'a [u8])>> {
        let mut entries = Vec::new();
        let mut key: Vec<u8> = Vec::new();
        let mut pos = 0;
        while pos < self.restarts_offset {
            let shared = read_varint32(self.data, &mut pos)? as usize;
            let non_shared = read_varint32(self.data, &mut pos)? as usize;
            let value_len = read_varint32(self.data, &mut pos)? as usize;
            if shared > key.len() {
                return Err(corrupt(format!(
                    "entry shares {} bytes with a {} byte key",
                    shared,
                    key.len()
                )));
            }
            let key_end = pos + non_shared;
            let value_end = key_end + value_len;
            if value_end > self.restarts_offset {
                return Err(corrupt("entry runs into the restart array"));
            }

            key.truncate(shared);
            key.extend_from_slice(&self.data[pos..key_end]);
            entries.push((key.clone(), &self.data[key_end..value_end]));
            pos = value_end;
        }
        Ok(entries)
    }
}

/// An in-memory table.
pub struct Table {
    file: Vec<u8>,
    footer: Footer,
}

impl Table {
    pub fn open(file: Vec<u8>) -> Result<Self> {
        let footer = Footer::decode(&file)?;
        Ok(Table { file, footer })
    }

    pub fn footer(&self) -> Footer {
        self.footer
    }

    /// Every `(key, value)` pair in key order.
    pub fn entries(&self) -> Result<Vec<(Vec<u8>, Vec<u8>)>> {
        let index = Block::read(&self.file, self.footer.index)?;
        let mut entries = Vec::new();
        for (_, handle_bytes) in index.entries()? {
            let mut pos = 0;
            let handle = BlockHandle::decode(handle_bytes, &mut pos)?;
            let block = Block::read(&self.file, handle)?;
            for (key, value) in block.entries()? {
                entries.push((key, value.to_vec()));
            }
        }
        Ok(entries)
    }
}

/// Minimal table writer for building fixtures: a single data block with a
/// restart point every four entries.
#[cfg(test)]
pub(crate) mod builder {
    use protobuf::CodedOutputStream;

    use super::*;

    pub fn put_varint64(out: &mut Vec<u8>, value: u64) {
        let mut output = CodedOutputStream::vec(out);
        output.write_raw_varint64(value).unwrap();
        output.flush().unwrap();
    }

    fn block_contents(entries: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
        let mut out = Vec::new();
        let mut restarts = Vec::new();
        let mut last: &[u8] = &[];
        for (i, (key, value)) in entries.iter().enumerate() {
            // every 4th entry restarts, the rest share a prefix
            let shared = if i % 4 == 0 {
                restarts.push(out.len() as u32);
                0
            } else {
                last.iter().zip(key).take_while(|(a, b)| a == b).count()
            };
            put_varint64(&mut out, shared as u64);
            put_varint64(&mut out, (key.len() - shared) as u64);
            put_varint64(&mut out, value.len() as u64);
            out.extend_from_slice(&key[shared..]);
            out.extend_from_slice(value);
            last = key.as_slice();
        }
        if restarts.is_empty() {
            restarts.push(0);
        }
        for restart in &restarts {
            out.extend_from_slice(&restart.to_le_bytes());
        }
        out.extend_from_slice(&(restarts.len() as u32).to_le_bytes());
        out
    }

    fn write_block(file: &mut Vec<u8>, contents: &[u8], compression: u8) -> BlockHandle {
        let handle = BlockHandle {
            offset: file.len() as u64,
            size: contents.len() as u64,
        };
        file.extend_from_slice(contents);
        file.push(compression);
        let crc = crc::mask(crc32c::crc32c_append(crc32c::crc32c(contents), &[compression]));
        file.extend_from_slice(&crc.to_le_bytes());
        handle
    }

    /// Serialize sorted entries into a complete table file.
    pub fn build(entries: &[(Vec<u8>, Vec<u8>)]) -> Vec<u8> {
        build_with_compression(entries, NO_COMPRESSION)
    }

    /// Like `build`, but tags the data block with `compression` while
    /// leaving its bytes as they are.
    pub fn build_with_compression(entries: &[(Vec<u8>, Vec<u8>)], compression: u8) -> Vec<u8> {
        let mut file = Vec::new();
        let data = write_block(&mut file, &block_contents(entries), compression);
        let metaindex = write_block(&mut file, &block_contents(&[]), NO_COMPRESSION);

        let mut handle = Vec::new();
        put_varint64(&mut handle, data.offset);
        put_varint64(&mut handle, data.size);
        let last_key = entries.last().map(|(k, _)| k.clone()).unwrap_or_default();
        let index = write_block(&mut file, &block_contents(&[(last_key, handle)]), NO_COMPRESSION);

        let mut footer = Vec::new();
        for h in [metaindex, index] {
            put_varint64(&mut footer, h.offset);
            put_varint64(&mut footer, h.size);
        }
        footer.resize(FOOTER_LEN - 8, 0);
        footer.extend_from_slice(&MAGIC.to_le_bytes());
        file.extend_from_slice(&footer);
        file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<(Vec<u8>, Vec<u8>)> {
        [
            ("", "header"),
            ("model/h0/attn/c_attn/b", "one"),
            ("model/h0/attn/c_attn/w", "two"),
            ("model/h0/attn/c_proj/b", "three"),
            ("model/h0/ln_1/g", "four"),
            ("model/wte", "five"),
        ]
        .into_iter()
        .map(|(k, v)| (k.as_bytes().to_vec(), v.as_bytes().to_vec()))
        .collect()
    }

    #[test]
    fn test_varint() {
        let mut buf = Vec::new();
        for value in [0u64, 1, 127, 128, 300, u32::MAX as u64, u64::MAX] {
            buf.clear();
            builder::put_varint64(&mut buf, value);
            let mut pos = 0;
            assert_eq!(read_varint64(&buf, &mut pos).unwrap(), value);
            assert_eq!(pos, buf.len());
        }

        let mut pos = 0;
        assert!(matches!(read_varint64(&[0x80, 0x80], &mut pos), Err(Error::Table(_))));

        // reads continue from the given offset
        let mut buf = Vec::new();
        builder::put_varint64(&mut buf, 300);
        builder::put_varint64(&mut buf, 5);
        let mut pos = 0;
        assert_eq!(read_varint64(&buf, &mut pos).unwrap(), 300);
        assert_eq!(read_varint32(&buf, &mut pos).unwrap(), 5);
        assert_eq!(pos, 3);
        assert!(matches!(read_varint32(&buf, &mut pos), Err(Error::Table(_))));
    }

    #[test]
    fn test_varint32_overflow() {
        let mut buf = Vec::new();
        builder::put_varint64(&mut buf, u32::MAX as u64 + 1);
        let mut pos = 0;
        assert!(matches!(read_varint32(&buf, &mut pos), Err(Error::Table(_))));
    }

    #[test]
    fn test_compressed_block_is_rejected() {
        // snappy
        let file = builder::build_with_compression(&sample_entries(), 1);
        let table = Table::open(file).unwrap();
        match table.entries() {
            Err(Error::Table(reason)) => assert!(reason.contains("compression type 1")),
            other => panic!("expected a compression error, got {:?}", other.map(|e| e.len())),
        }
    }

    #[test]
    fn test_read_entries() {
        let entries = sample_entries();
        let table = Table::open(builder::build(&entries)).unwrap();
        assert_eq!(table.entries().unwrap(), entries);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::open(builder::build(&[])).unwrap();
        assert!(table.entries().unwrap().is_empty());
    }

    #[test]
    fn test_bad_magic() {
        let mut file = builder::build(&sample_entries());
        let last = file.len() - 1;
        file[last] ^= 0xff;
        assert!(matches!(Table::open(file), Err(Error::Table(_))));
    }

    #[test]
    fn test_short_file() {
        assert!(matches!(Table::open(vec![0; 10]), Err(Error::Table(_))));
    }

    #[test]
    fn test_corrupt_block_checksum() {
        let mut file = builder::build(&sample_entries());
        // first data block starts at offset 0
        file[3] ^= 0x01;
        let table = Table::open(file).unwrap();
        assert!(matches!(
            table.entries(),
            Err(Error::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_block_past_end_of_file() {
        let file = builder::build(&sample_entries());
        let table = Table::open(file).unwrap();
        let footer = table.footer();
        let bogus = BlockHandle {
            offset: footer.index.offset,
            size: 1 << 20,
        };
        assert!(matches!(
            Block::read(&table.file, bogus),
            Err(Error::Table(_))
        ));
    }
}
