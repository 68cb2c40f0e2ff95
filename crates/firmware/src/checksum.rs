//! Firmware image checksums.
//!
//! Upstream reference: the checksum append step in
//! `pybricks-micropython/bricks/stm32` and the firmware validation in each
//! hub's bootloader.
//!
//! Each hub verifies a downloaded image with the scheme named by the
//! metadata's `checksum-type` field. The schemes treat the image as
//! little-endian 32-bit words and, except for the XOR scheme, account for
//! the whole flash span the metadata declares, with unwritten words
//! reading as erased flash.

use thiserror::Error;

use crate::metadata::ChecksumType;

/// Polynomial of the STM32 CRC peripheral.
const CRC32_POLY: u32 = 0x04C1_1DB7;

/// Value of an erased flash word.
const ERASED_WORD: u32 = 0xFFFF_FFFF;

/// Errors raised while computing a firmware checksum.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumError {
    /// Firmware images are word-addressed; the payload must be a multiple
    /// of four bytes.
    #[error("firmware size {0} is not a multiple of 4")]
    UnalignedFirmware(usize),

    /// The payload plus its four-byte checksum word does not fit in the
    /// declared flash span.
    #[error("firmware plus checksum ({0} bytes) exceeds the {1} byte flash span")]
    FirmwareTooLarge(usize, u32),
}

fn check_fit(data: &[u8], max_size: u32) -> Result<(), ChecksumError> {
    if data.len() % 4 != 0 {
        return Err(ChecksumError::UnalignedFirmware(data.len()));
    }
    let needed = data.len() + 4;
    if needed > max_size as usize {
        return Err(ChecksumError::FirmwareTooLarge(needed, max_size));
    }
    Ok(())
}

fn le_words(data: &[u8]) -> impl Iterator<Item = u32> + '_ {
    data.chunks_exact(4)
        .map(|word| u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
}

/// Byte-wise XOR checksum.
///
/// The BLE bootloaders acknowledge each flashed chunk with the running XOR
/// of its bytes; the whole-image value is the XOR of every payload byte.
/// Any payload length is accepted.
pub fn xor8(data: &[u8]) -> u8 {
    data.iter().fold(0, |checksum, byte| checksum ^ byte)
}

/// 32-bit word-sum complement checksum.
///
/// Sums the payload as little-endian words, counts every unwritten word up
/// to `max_size - 4` as erased flash, and returns the two's complement of
/// the total. Appending the returned word makes the whole span sum to
/// zero, which is the check the bootloader performs.
pub fn sum_complement32(data: &[u8], max_size: u32) -> Result<u32, ChecksumError> {
    check_fit(data, max_size)?;
    let mut total: u32 = 0;
    for word in le_words(data) {
        total = total.wrapping_add(word);
    }
    let padding_words = (max_size as usize - 4 - data.len()) / 4;
    total = total.wrapping_add(ERASED_WORD.wrapping_mul(padding_words as u32));
    Ok(total.wrapping_neg())
}

/// CRC-32 as computed by the STM32 CRC peripheral.
///
/// Polynomial `0x04C11DB7`, initial value `0xFFFFFFFF`, fed little-endian
/// words with no bit reflection and no final XOR. This matches the fixed
/// hardware configuration the bootloader runs the image through, not the
/// common zlib CRC-32.
pub fn crc32_stm32(data: &[u8], max_size: u32) -> Result<u32, ChecksumError> {
    check_fit(data, max_size)?;
    let mut crc: u32 = 0xFFFF_FFFF;
    for word in le_words(data) {
        crc ^= word;
        for _ in 0..32 {
            crc = if crc & 0x8000_0000 != 0 {
                (crc << 1) ^ CRC32_POLY
            } else {
                crc << 1
            };
        }
    }
    Ok(crc)
}

impl ChecksumType {
    /// Computes this scheme's checksum of `data` for a flash span of
    /// `max_size` bytes.
    ///
    /// The XOR scheme covers only the payload bytes and ignores
    /// `max_size`; the word schemes fail when the payload is unaligned or
    /// leaves no room for the checksum word.
    pub fn checksum(&self, data: &[u8], max_size: u32) -> Result<u32, ChecksumError> {
        match self {
            ChecksumType::Xor => Ok(u32::from(xor8(data))),
            ChecksumType::Sum => sum_complement32(data, max_size),
            ChecksumType::Crc32 => crc32_stm32(data, max_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xor8_is_byte_xor() {
        assert_eq!(xor8(&[]), 0);
        assert_eq!(xor8(&[0x5a]), 0x5a);
        assert_eq!(xor8(&[1, 2, 3]), 0);
        assert_eq!(xor8(&[0xff, 0x0f]), 0xf0);
    }

    #[test]
    fn sum_complement_balances_the_span() {
        // Words 1 and 2 plus one padding word of 0xFFFFFFFF; the
        // complement makes the span total zero.
        let data = [1, 0, 0, 0, 2, 0, 0, 0];
        let checksum = sum_complement32(&data, 16).unwrap();
        assert_eq!(checksum, 0xFFFF_FFFE);

        let mut total: u32 = 0;
        for word in [1, 2, ERASED_WORD, checksum] {
            total = total.wrapping_add(word);
        }
        assert_eq!(total, 0);
    }

    #[test]
    fn sum_complement_without_padding() {
        // Span of 8 holds exactly the payload word and the checksum word.
        let data = [0x78, 0x56, 0x34, 0x12];
        assert_eq!(
            sum_complement32(&data, 8).unwrap(),
            0x1234_5678u32.wrapping_neg()
        );
    }

    #[test]
    fn crc32_matches_stm32_peripheral_vectors() {
        // Known answers for the STM32 CRC unit after reset.
        assert_eq!(crc32_stm32(&[0, 0, 0, 0], 16).unwrap(), 0xC704_DD7B);
        assert_eq!(crc32_stm32(&[0xff, 0xff, 0xff, 0xff], 16).unwrap(), 0);
    }

    #[test]
    fn unaligned_payload_is_rejected() {
        assert_eq!(
            sum_complement32(&[1, 2, 3], 16),
            Err(ChecksumError::UnalignedFirmware(3))
        );
        assert_eq!(
            crc32_stm32(&[1, 2, 3, 4, 5], 16),
            Err(ChecksumError::UnalignedFirmware(5))
        );
    }

    #[test]
    fn payload_must_leave_room_for_checksum_word() {
        let data = [0u8; 8];
        assert_eq!(
            sum_complement32(&data, 8),
            Err(ChecksumError::FirmwareTooLarge(12, 8))
        );
        // A span one word larger fits.
        assert!(sum_complement32(&data, 12).is_ok());
    }

    #[test]
    fn dispatch_selects_the_named_scheme() {
        let data = [1, 2, 3, 4];
        assert_eq!(
            ChecksumType::Xor.checksum(&data, 16).unwrap(),
            u32::from(xor8(&data))
        );
        assert_eq!(
            ChecksumType::Sum.checksum(&data, 16).unwrap(),
            sum_complement32(&data, 16).unwrap()
        );
        assert_eq!(
            ChecksumType::Crc32.checksum(&data, 16).unwrap(),
            crc32_stm32(&data, 16).unwrap()
        );
    }
}
