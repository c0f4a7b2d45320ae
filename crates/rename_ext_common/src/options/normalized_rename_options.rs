use std::path::PathBuf;

use rename_ext_utils::filter::PathFilter;

use crate::{ExtensionMapping, ParserOptions};

#[derive(Debug)]
pub struct NormalizedRenameOptions {
  pub cwd: PathBuf,
  pub filter: PathFilter,
  pub mappings: ExtensionMapping,
  pub source_map: bool,
  pub parser: ParserOptions,
}
