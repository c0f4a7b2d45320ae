pub mod module_specifier_reference;
pub mod output;
pub mod output_asset;
pub mod output_chunk;
