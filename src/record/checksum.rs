//! record/checksum — маскированный CRC32C (Castagnoli).
//!
//! masked = rotr(crc32c(data), 15) + 0xa282ead8 (mod 2^32).
//! Маскирование отличает CRC, хранящийся рядом с данными, от CRC самих данных,
//! в которых уже может встречаться CRC (вложенные записи).

use crate::consts::{CRC_MASK_DELTA, CRC_MASK_ROTATE};

/// Замаскировать готовое значение CRC32C.
#[inline]
pub fn mask_crc32c(crc: u32) -> u32 {
    crc.rotate_right(CRC_MASK_ROTATE).wrapping_add(CRC_MASK_DELTA)
}

/// Обратная операция к mask_crc32c (для диагностики: получить "сырой" CRC из файла).
#[inline]
pub fn unmask_crc32c(masked: u32) -> u32 {
    masked.wrapping_sub(CRC_MASK_DELTA).rotate_left(CRC_MASK_ROTATE)
}

/// CRC32C по bytes с маскированием.
#[inline]
pub fn masked_crc32c(bytes: &[u8]) -> u32 {
    mask_crc32c(crc32c::crc32c(bytes))
}
