mod options;
mod types;

pub use crate::{
  options::{
    RenameOptions, extension_mapping::ExtensionMapping,
    normalized_rename_options::NormalizedRenameOptions, parser_options::ParserOptions,
  },
  types::{
    module_specifier_reference::ModuleSpecifierReference,
    output::{Output, OutputBundle},
    output_asset::OutputAsset,
    output_chunk::OutputChunk,
  },
};
