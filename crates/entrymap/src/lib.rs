mod generator;
mod integrity;
mod merge;
mod persist;
mod utils;

pub use entrymap_common::*;
pub use entrymap_error::{BuildError, BuildResult};

pub use crate::generator::ManifestGenerator;
