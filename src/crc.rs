//! Masked CRC32C, the checksum form stored by LevelDB tables and TensorFlow
//! bundles.

const MASK_DELTA: u32 = 0xa282_ead8;

/// Form in which checksums are stored on disk.
pub fn mask(crc: u32) -> u32 {
    crc.rotate_right(15).wrapping_add(MASK_DELTA)
}

pub fn unmask(masked: u32) -> u32 {
    masked.wrapping_sub(MASK_DELTA).rotate_left(15)
}
