// Кодировщик кадров только для тестов: библиотека записи не поддерживает.
#![allow(dead_code)]

use tfrecord::consts::{REC_HDR_SIZE, REC_LEN_SIZE, REC_OVERHEAD};
use tfrecord::masked_crc32c;

/// Закодировать один кадр: len | crc(len) | payload | crc(payload).
pub fn frame(payload: &[u8]) -> Vec<u8> {
    let len = (payload.len() as u64).to_le_bytes();
    let mut out = Vec::with_capacity(payload.len() + REC_OVERHEAD);
    out.extend_from_slice(&len);
    out.extend_from_slice(&masked_crc32c(&len).to_le_bytes());
    out.extend_from_slice(payload);
    out.extend_from_slice(&masked_crc32c(payload).to_le_bytes());
    out
}

/// Кадр с произвольными байтами вместо обоих CRC.
pub fn frame_with_crcs(payload: &[u8], len_crc: [u8; 4], data_crc: [u8; 4]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + REC_OVERHEAD);
    out.extend_from_slice(&(payload.len() as u64).to_le_bytes());
    out.extend_from_slice(&len_crc);
    out.extend_from_slice(payload);
    out.extend_from_slice(&data_crc);
    out
}

/// Поток из нескольких записей подряд.
pub fn stream_of<I, P>(payloads: I) -> Vec<u8>
where
    I: IntoIterator<Item = P>,
    P: AsRef<[u8]>,
{
    let mut out = Vec::new();
    for p in payloads {
        out.extend_from_slice(&frame(p.as_ref()));
    }
    out
}

/// Смещение поля CRC длины внутри кадра.
pub const LEN_CRC_OFF: usize = REC_LEN_SIZE;

/// Смещение поля CRC payload внутри кадра с payload длины n.
pub fn data_crc_off(n: usize) -> usize {
    REC_HDR_SIZE + n
}
