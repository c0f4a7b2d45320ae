mod extension_renamer;
mod rewrite_stage;
mod types;
mod utils;

pub use crate::{
  extension_renamer::ExtensionRenamer, types::rename_output::RenameOutput,
  utils::rewrite_extension::rewrite_extension,
};
pub use rename_ext_common::*;
pub use rename_ext_error::{BuildError, BuildResult, RenameError};
