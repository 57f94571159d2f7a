//! Broadlink IR captures to MOES UFO-R11 (Tuya-Stream) converter.

pub mod block;
pub mod cli;
pub mod compress;
pub mod config;
pub mod constants;
pub mod convert;
pub mod decode;
pub mod encode;
pub mod error;
pub mod level;
pub mod search;

pub use config::Config;
pub use convert::{
    count_commands, ConvertRequest, ConvertResponse, Converter, FileConvertRequest,
    FileConvertResponse,
};
pub use decode::decode;
pub use encode::encode;
pub use error::{BtuError, CompressionError, IrCodeError, Result};
pub use level::{CompressionLevel, GreedyLevel};
