// Формат и ошибки
pub mod consts;
pub mod error;
pub mod config;

// Чтение кадров: src/record/{mod,checksum,reader}.rs
pub mod record;

// Удобные реэкспорты
pub use config::{ReaderBuilder, ReaderConfig};
pub use error::{Field, RecordError};
pub use record::{masked_crc32c, RecordReader, RecordSource, Records};
