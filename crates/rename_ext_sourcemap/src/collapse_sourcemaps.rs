use oxc_sourcemap::{SourceMap, SourceMapBuilder};
use rustc_hash::FxHashMap;

/// Chains `patch` (final code -> intermediate code) onto `original` (intermediate code -> sources),
/// giving a map from the final code straight to the original sources.
///
/// Tokens of `patch` that land before the first mapped position of `original` are dropped.
pub fn collapse_sourcemaps(original: &SourceMap, patch: &SourceMap) -> SourceMap {
  let lookup_table = original.generate_lookup_table();

  let mut builder = SourceMapBuilder::default();
  if let Some(file) = patch.get_file().or_else(|| original.get_file()) {
    builder.set_file(file);
  }

  let mut source_ids: FxHashMap<u32, u32> = FxHashMap::default();
  let mut name_ids: FxHashMap<u32, u32> = FxHashMap::default();

  for token in patch.get_tokens() {
    let Some(original_token) =
      original.lookup_token(&lookup_table, token.get_src_line(), token.get_src_col())
    else {
      continue;
    };

    let source_id = original_token.get_source_id().map(|id| {
      *source_ids.entry(id).or_insert_with(|| {
        builder.add_source_and_content(
          original.get_source(id).unwrap_or_default(),
          original.get_source_content(id).unwrap_or_default(),
        )
      })
    });
    let name_id = original_token.get_name_id().map(|id| {
      *name_ids
        .entry(id)
        .or_insert_with(|| builder.add_name(original.get_name(id).unwrap_or_default()))
    });

    builder.add_token(
      token.get_dst_line(),
      token.get_dst_col(),
      original_token.get_src_line(),
      original_token.get_src_col(),
      source_id,
      name_id,
    );
  }

  builder.into_sourcemap()
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tokens(map: &SourceMap) -> Vec<(u32, u32, u32, u32)> {
    map
      .get_tokens()
      .map(|token| {
        (token.get_dst_line(), token.get_dst_col(), token.get_src_line(), token.get_src_col())
      })
      .collect()
  }

  #[test]
  fn maps_final_positions_to_original_sources() {
    // `a('./b.js');x` generated from src/a.ts
    let mut builder = SourceMapBuilder::default();
    let source = builder.add_source_and_content("src/a.ts", "// a.ts");
    let name = builder.add_name("a");
    builder.add_token(0, 0, 3, 4, Some(source), Some(name));
    builder.add_token(0, 2, 3, 6, Some(source), None);
    builder.add_token(0, 11, 5, 0, Some(source), None);
    let original = builder.into_sourcemap();

    // `a('./b.mjs');x` patched from `a('./b.js');x`
    let mut builder = SourceMapBuilder::default();
    let intermediate = builder.add_source_and_content("index.js", "a('./b.js');x");
    builder.add_token(0, 0, 0, 0, Some(intermediate), None);
    builder.add_token(0, 2, 0, 2, Some(intermediate), None);
    builder.add_token(0, 12, 0, 11, Some(intermediate), None);
    let patch = builder.into_sourcemap();

    let collapsed = collapse_sourcemaps(&original, &patch);
    assert_eq!(tokens(&collapsed), vec![(0, 0, 3, 4), (0, 2, 3, 6), (0, 12, 5, 0)]);
    assert_eq!(collapsed.get_source(0), Some("src/a.ts"));
    assert_eq!(collapsed.get_source_content(0), Some("// a.ts"));
    assert_eq!(collapsed.get_name(0), Some("a"));
    assert_eq!(collapsed.get_source(1), None);
  }

  #[test]
  fn keeps_line_structure_across_lines() {
    let mut builder = SourceMapBuilder::default();
    let source = builder.add_source_and_content("src/a.ts", "");
    builder.add_token(0, 0, 0, 0, Some(source), None);
    builder.add_token(1, 0, 7, 2, Some(source), None);
    let original = builder.into_sourcemap();

    let mut builder = SourceMapBuilder::default();
    let intermediate = builder.add_source_and_content("index.js", "");
    builder.add_token(0, 0, 0, 0, Some(intermediate), None);
    builder.add_token(1, 0, 1, 0, Some(intermediate), None);
    let patch = builder.into_sourcemap();

    let collapsed = collapse_sourcemaps(&original, &patch);
    assert_eq!(tokens(&collapsed), vec![(0, 0, 0, 0), (1, 0, 7, 2)]);
  }
}
