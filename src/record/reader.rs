//! record/reader — последовательное чтение кадров TFRecord с проверкой CRC.
//!
//! Формат кадра:
//!   u64    length                      (LE)
//!   u32    masked_crc32c(length bytes) (LE)
//!   byte   payload[length]
//!   u32    masked_crc32c(payload)      (LE)
//!
//! Поведение read():
//! - 0 байт на границе записи → Ok(None) (чистый EOF);
//! - любой недочёт внутри кадра (включая 1..7 байт длины) → Truncated;
//! - length > i32::MAX → RecordTooLarge (буфер не выделяется);
//! - crc_check=false: поля CRC читаются и отбрасываются (без seek — поток может быть
//!   не-seekable), сравнение не выполняется.
//!
//! После любой ошибки позиция потока остаётся там, где оборвалось чтение; ресинхронизации нет.
//!
//! Использование:
//!   let mut rdr = RecordReader::new(BufReader::new(file), true);
//!   while let Some(payload) = rdr.read()? {
//!       /* обработка payload */
//!   }

use std::io::{ErrorKind, Read};

use super::checksum::masked_crc32c;
use super::{decode_crc_le, decode_len_le, RecordSource};
use crate::config::ReaderConfig;
use crate::consts::{MAX_RECORD_LEN, PAYLOAD_INITIAL_CAP, REC_CRC_SIZE, REC_LEN_SIZE};
use crate::error::{Field, RecordError, Result};

/// Читатель записей поверх произвольного `Read`.
///
/// Кроме самого потока и неизменяемого флага crc_check состояния не держит.
#[derive(Debug)]
pub struct RecordReader<R> {
    input: R,
    crc_check: bool,
}

impl<R: Read> RecordReader<R> {
    /// Поток должен стоять на границе записи.
    pub fn new(input: R, crc_check: bool) -> Self {
        Self { input, crc_check }
    }

    pub fn with_config(input: R, cfg: &ReaderConfig) -> Self {
        Self::new(input, cfg.crc_check)
    }

    pub fn crc_check(&self) -> bool {
        self.crc_check
    }

    pub fn get_ref(&self) -> &R {
        &self.input
    }

    pub fn get_mut(&mut self) -> &mut R {
        &mut self.input
    }

    pub fn into_inner(self) -> R {
        self.input
    }

    /// Считать следующую запись.
    ///
    /// Возвращает:
    /// - Ok(Some(payload)) — запись прочитана (и проверена, если crc_check);
    /// - Ok(None) — поток исчерпан ровно на границе записи;
    /// - Err(e) — обрыв, превышение размера, несовпадение CRC или I/O ошибка.
    pub fn read(&mut self) -> Result<Option<Vec<u8>>> {
        // Длина: пустой поток здесь — единственный легальный EOF.
        let mut len_bytes = [0u8; REC_LEN_SIZE];
        let got = read_full(&mut self.input, &mut len_bytes)?;
        if got == 0 {
            return Ok(None);
        }
        if got < REC_LEN_SIZE {
            return Err(truncated(Field::Length, REC_LEN_SIZE, got));
        }
        let len = decode_len_le(&len_bytes);

        self.verify_crc(Field::LengthCrc, Field::Length, &len_bytes)?;

        if len > MAX_RECORD_LEN {
            return Err(RecordError::RecordTooLarge { len });
        }

        // Буфер растёт по мере поступления байтов: испорченная длина на коротком потоке
        // не приводит к аллокации в гигабайты.
        let mut payload = Vec::with_capacity((len as usize).min(PAYLOAD_INITIAL_CAP));
        let got = (&mut self.input).take(len).read_to_end(&mut payload)?;
        if (got as u64) < len {
            return Err(RecordError::Truncated {
                field: Field::Payload,
                expected: len,
                got: got as u64,
            });
        }

        self.verify_crc(Field::PayloadCrc, Field::Payload, &payload)?;

        Ok(Some(payload))
    }

    /// Итератор по оставшимся записям.
    pub fn records(&mut self) -> Records<'_, R> {
        Records {
            reader: self,
            done: false,
        }
    }

    /// Прочитать 4-байтовое поле CRC и (если включено) сверить его с masked_crc32c(data).
    /// При выключенной проверке поле всё равно потребляется из потока.
    fn verify_crc(&mut self, crc_field: Field, covered: Field, data: &[u8]) -> Result<()> {
        let mut crc_bytes = [0u8; REC_CRC_SIZE];
        let got = read_full(&mut self.input, &mut crc_bytes)?;
        if got < REC_CRC_SIZE {
            return Err(truncated(crc_field, REC_CRC_SIZE, got));
        }
        if !self.crc_check {
            return Ok(());
        }

        let stored = decode_crc_le(&crc_bytes);
        let computed = masked_crc32c(data);
        if stored != computed {
            return Err(RecordError::ChecksumMismatch {
                field: covered,
                stored,
                computed,
            });
        }
        Ok(())
    }
}

impl<R: Read> RecordSource for RecordReader<R> {
    fn read_record(&mut self) -> Result<Option<Vec<u8>>> {
        self.read()
    }
}

/// Итератор записей. После EOF или первой ошибки возвращает только None.
pub struct Records<'a, R> {
    reader: &'a mut RecordReader<R>,
    done: bool,
}

impl<R: Read> Iterator for Records<'_, R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.reader.read() {
            Ok(Some(payload)) => Some(Ok(payload)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Records<'_, R> {}

#[inline]
fn truncated(field: Field, expected: usize, got: usize) -> RecordError {
    RecordError::Truncated {
        field,
        expected: expected as u64,
        got: got as u64,
    }
}

/// Читать, пока buf не заполнен или поток не вернул 0. Возвращает число прочитанных байт.
/// В отличие от read_exact различает «ничего не прочитано» и «прочитано частично».
fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut n = 0;
    while n < buf.len() {
        match r.read(&mut buf[n..]) {
            Ok(0) => break,
            Ok(k) => n += k,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(n)
}
