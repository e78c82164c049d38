mod bundler_options;
mod manifest_options;
mod types;

pub use crate::{
  bundler_options::{
    InputOptions, OutputOptions, input_item::InputItem, output_format::OutputFormat,
  },
  manifest_options::{
    ManifestOptions, integrity_strategy::IntegrityStrategy,
    normalized_manifest_options::NormalizedManifestOptions,
  },
  types::{
    entry_point::EntryPoint,
    file_kind::FileKind,
    manifest::{EntrypointFiles, Manifest},
    output::Output,
    output_asset::OutputAsset,
    output_chunk::OutputChunk,
  },
};
