pub mod rename_output;

use std::sync::Arc;

use rename_ext_common::NormalizedRenameOptions;

pub type SharedOptions = Arc<NormalizedRenameOptions>;
