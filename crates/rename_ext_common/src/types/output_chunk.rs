use oxc_sourcemap::SourceMap;

#[derive(Debug, Clone, Default)]
pub struct OutputChunk {
  pub name: String,
  pub filename: String,
  /// Id of the module this chunk was primarily generated from. `None` for shared chunks.
  pub facade_module_id: Option<String>,
  pub is_entry: bool,
  pub is_dynamic_entry: bool,
  /// Output keys of the chunks statically imported by this one.
  pub imports: Vec<String>,
  pub dynamic_imports: Vec<String>,
  pub code: String,
  pub map: Option<SourceMap>,
}
