//! Константы формата TFRecord.
//!
//! record := length u64 LE | masked_crc32c(length) u32 LE | payload | masked_crc32c(payload) u32 LE

/// Размер поля длины.
pub const REC_LEN_SIZE: usize = 8;

/// Размер каждого поля контрольной суммы.
pub const REC_CRC_SIZE: usize = 4;

/// Заголовок кадра: длина + её CRC.
pub const REC_HDR_SIZE: usize = REC_LEN_SIZE + REC_CRC_SIZE;

/// Накладные расходы кадра (заголовок + CRC payload).
pub const REC_OVERHEAD: usize = REC_HDR_SIZE + REC_CRC_SIZE;

/// Добавка маскирования CRC (как в tensorflow/core/lib/hash/crc32c.h).
pub const CRC_MASK_DELTA: u32 = 0xa282_ead8;

/// Сдвиг циклического поворота при маскировании.
pub const CRC_MASK_ROTATE: u32 = 15;

/// Максимальная длина payload, которую читатель согласен аллоцировать (i32::MAX).
pub const MAX_RECORD_LEN: u64 = i32::MAX as u64;

/// Начальная ёмкость буфера payload; дальше буфер растёт по мере поступления байтов.
pub const PAYLOAD_INITIAL_CAP: usize = 64 * 1024;

/// Переменная окружения для переключения проверки CRC.
pub const ENV_CRC_CHECK: &str = "TFR_CRC_CHECK";
