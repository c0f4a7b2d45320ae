mod specifier_extractor;
mod specifier_rewriter;
mod text_patcher;

use rename_ext_common::NormalizedRenameOptions;
use rename_ext_ecmascript::EcmaCompiler;
use rename_ext_error::BuildResult;
use rename_ext_sourcemap::{SourceMap, collapse_sourcemaps};

use self::{specifier_rewriter::SpecifierRewriter, text_patcher::TextPatcher};

pub struct RewriteCodeReturn {
  pub code: String,
  /// `None` when source maps are disabled, the chunk's map is then left as it was.
  pub map: Option<SourceMap>,
  pub rewritten_specifiers: usize,
}

/// Parses a chunk's code and rewrites its module specifiers.
///
/// Returns `None` when nothing needed rewriting. `filename` labels errors and is recorded as
/// the source of the regenerated map when the chunk had no map before.
pub fn rewrite_code(
  filename: &str,
  code: &str,
  previous_map: Option<&SourceMap>,
  options: &NormalizedRenameOptions,
) -> BuildResult<Option<RewriteCodeReturn>> {
  let ast = EcmaCompiler::parse(filename, code, options.parser.source_type())?;

  let mut patcher = TextPatcher::new(filename, ast.source());
  let rewritten_specifiers =
    SpecifierRewriter::new(&options.mappings, &mut patcher).rewrite(ast.program())?;

  if !patcher.has_changed() {
    return Ok(None);
  }

  let map = options.source_map.then(|| {
    let patch_map = patcher.to_source_map();
    match previous_map {
      Some(previous_map) => collapse_sourcemaps(previous_map, &patch_map),
      None => patch_map,
    }
  });

  Ok(Some(RewriteCodeReturn { code: patcher.to_text(), map, rewritten_specifiers }))
}
