//! record — чтение потока TFRecord.
//!
//! Разделение:
//! - checksum.rs — маскированный CRC32C.
//! - reader.rs   — RecordReader: кадр за кадром, EOF vs обрыв vs порча.
//!
//! Здесь лежат декодеры полей (всегда little-endian, независимо от платформы)
//! и трейт-шов RecordSource.

use byteorder::{ByteOrder, LittleEndian};

use crate::consts::{REC_CRC_SIZE, REC_LEN_SIZE};
use crate::error::RecordError;

pub mod checksum;
pub mod reader;

pub use checksum::{mask_crc32c, masked_crc32c, unmask_crc32c};
pub use reader::{RecordReader, Records};

/// Декодировать 8-байтовое поле длины (LE u64).
#[inline]
pub fn decode_len_le(buf: &[u8; REC_LEN_SIZE]) -> u64 {
    LittleEndian::read_u64(buf)
}

/// Декодировать 4-байтовое поле CRC (LE u32). Сравнение идёт по битовому образу u32.
#[inline]
pub fn decode_crc_le(buf: &[u8; REC_CRC_SIZE]) -> u32 {
    LittleEndian::read_u32(buf)
}

/// Источник записей: «прочитать следующую запись».
///
/// - Ok(Some(payload)) — очередная запись;
/// - Ok(None) — поток закончился ровно на границе записи;
/// - Err(e) — обрыв/порча; дальнейшие вызовы не имеют смысла.
pub trait RecordSource {
    fn read_record(&mut self) -> Result<Option<Vec<u8>>, RecordError>;
}

impl<S: RecordSource + ?Sized> RecordSource for &mut S {
    fn read_record(&mut self) -> Result<Option<Vec<u8>>, RecordError> {
        (**self).read_record()
    }
}

impl<S: RecordSource + ?Sized> RecordSource for Box<S> {
    fn read_record(&mut self) -> Result<Option<Vec<u8>>, RecordError> {
        (**self).read_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_decodes_little_endian() {
        assert_eq!(decode_len_le(&[5, 0, 0, 0, 0, 0, 0, 0]), 5);
        assert_eq!(
            decode_len_le(&[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]),
            0x0102_0304_0506_0708
        );
    }

    #[test]
    fn crc_keeps_high_bit_pattern() {
        // Старший бит установлен: значение не должно трактоваться как отрицательное.
        assert_eq!(decode_crc_le(&[0x01, 0x00, 0x00, 0x80]), 0x8000_0001);
    }
}
