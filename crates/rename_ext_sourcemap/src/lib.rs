mod collapse_sourcemaps;

pub use crate::collapse_sourcemaps::collapse_sourcemaps;
pub use oxc_sourcemap::{SourceMap, SourceMapBuilder};
