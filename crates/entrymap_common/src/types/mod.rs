pub mod entry_point;
pub mod file_kind;
pub mod manifest;
pub mod output;
pub mod output_asset;
pub mod output_chunk;
