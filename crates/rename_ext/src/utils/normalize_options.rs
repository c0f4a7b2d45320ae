use anyhow::Context;
use rename_ext_common::{NormalizedRenameOptions, RenameOptions};
use rename_ext_error::{BuildResult, RenameError};
use rename_ext_utils::filter::PathFilter;

pub fn normalize_options(raw_options: RenameOptions) -> BuildResult<NormalizedRenameOptions> {
  let mappings = raw_options
    .mappings
    .ok_or_else(|| RenameError::InvalidOptions("`mappings` is required".to_string()))?;
  mappings.validate().map_err(RenameError::InvalidOptions)?;

  let cwd = match raw_options.cwd {
    Some(cwd) => cwd,
    None => std::env::current_dir().context("Failed to get current dir")?,
  };

  let filter = PathFilter::new(
    &raw_options.include.unwrap_or_default(),
    &raw_options.exclude.unwrap_or_default(),
    cwd.clone(),
  );

  Ok(NormalizedRenameOptions {
    cwd,
    filter,
    mappings,
    source_map: raw_options.source_map.unwrap_or(true),
    parser: raw_options.parser.unwrap_or_default(),
  })
}
