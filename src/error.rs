//! Ошибки чтения записей TFRecord.
//!
//! Чистый конец потока (0 байт на границе записи) ошибкой не является и
//! возвращается как `Ok(None)`. Всё остальное ниже — фатально для читателя.

use std::fmt;
use std::io;

use thiserror::Error;

/// Поле кадра, на котором произошёл сбой.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// 8-байтовая длина payload.
    Length,
    /// Маскированный CRC32C длины.
    LengthCrc,
    /// Сами данные записи.
    Payload,
    /// Маскированный CRC32C данных.
    PayloadCrc,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Field::Length => "length",
            Field::LengthCrc => "length crc",
            Field::Payload => "payload",
            Field::PayloadCrc => "payload crc",
        };
        f.write_str(s)
    }
}

#[derive(Error, Debug)]
pub enum RecordError {
    /// Поток закончился посреди поля.
    #[error("truncated record: {field} field needs {expected} bytes, stream ended after {got}")]
    Truncated {
        field: Field,
        expected: u64,
        got: u64,
    },

    /// Заявленная длина больше, чем читатель готов выделить.
    #[error("record size exceeds max value of int32: {len}")]
    RecordTooLarge { len: u64 },

    /// Сохранённый CRC не совпал с вычисленным. `field` — поле, по которому считался CRC
    /// (`Length` или `Payload`).
    #[error("{field} crc32c check failed: stored={stored:#010x}, computed={computed:#010x}")]
    ChecksumMismatch {
        field: Field,
        stored: u32,
        computed: u32,
    },

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

impl RecordError {
    pub fn is_truncation(&self) -> bool {
        matches!(self, RecordError::Truncated { .. })
    }

    pub fn is_checksum_mismatch(&self) -> bool {
        matches!(self, RecordError::ChecksumMismatch { .. })
    }

    /// Поле, к которому относится ошибка (None для RecordTooLarge/Io).
    pub fn field(&self) -> Option<Field> {
        match self {
            RecordError::Truncated { field, .. } | RecordError::ChecksumMismatch { field, .. } => {
                Some(*field)
            }
            RecordError::RecordTooLarge { .. } | RecordError::Io(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecordError>;
