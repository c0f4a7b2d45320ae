pub mod normalize_options;
pub mod rewrite_extension;
