pub mod asset_path;
pub mod base64;
pub mod entry_name;
pub mod indexmap;
