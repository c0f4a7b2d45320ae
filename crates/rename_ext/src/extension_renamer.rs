use std::sync::Arc;

use rename_ext_common::{Output, OutputBundle, OutputChunk, RenameOptions};
use rename_ext_error::BuildResult;

use crate::{
  rewrite_stage::{RewriteCodeReturn, rewrite_code},
  types::{SharedOptions, rename_output::RenameOutput},
  utils::{normalize_options::normalize_options, rewrite_extension::rewrite_extension},
};

/// Renames emitted chunks according to an extension mapping and rewrites the specifiers inside
/// them so they keep pointing at the renamed files.
///
/// Meant to run once per build, after chunks were rendered.
#[derive(Debug, Clone)]
pub struct ExtensionRenamer {
  options: SharedOptions,
}

impl ExtensionRenamer {
  pub fn new(options: RenameOptions) -> BuildResult<Self> {
    Ok(Self { options: Arc::new(normalize_options(options)?) })
  }

  /// Consumes `bundle` and returns it renamed, in the same order.
  ///
  /// Only chunks whose facade module passes the include/exclude filter are touched. When two
  /// outputs end up under the same key the later one wins and a warning is reported.
  pub fn rename(&self, bundle: OutputBundle) -> BuildResult<RenameOutput> {
    let mut output = RenameOutput {
      bundle: OutputBundle::with_capacity_and_hasher(bundle.len(), Default::default()),
      warnings: vec![],
    };

    for (key, mut item) in bundle {
      let selected = item.facade_module_id().is_some_and(|id| self.options.filter.is_match(id));
      let key = match &mut item {
        Output::Chunk(chunk) if selected => {
          let rewritten_specifiers = self.rename_chunk(chunk)?;
          let new_key = self.rewrite(&key).unwrap_or_else(|| key.clone());
          tracing::debug!(from = %key, to = %new_key, rewritten_specifiers, "renamed chunk");
          new_key
        }
        _ => {
          tracing::trace!(key = %key, "skipped output");
          key
        }
      };

      if output.bundle.contains_key(&key) {
        tracing::warn!(key = %key, "renamed output overwrites another output");
        output.warnings.push(anyhow::anyhow!(
          "Output {key:?} was emitted more than once after renaming, only the last one is kept"
        ));
      }
      output.bundle.insert(key, item);
    }

    Ok(output)
  }

  fn rewrite(&self, path: &str) -> Option<String> {
    rewrite_extension(path, &self.options.mappings)
  }

  fn rename_chunk(&self, chunk: &mut OutputChunk) -> BuildResult<usize> {
    let original_filename = chunk.filename.clone();
    if let Some(filename) = self.rewrite(&chunk.filename) {
      chunk.filename = filename;
    }

    if let Some(id) = chunk.facade_module_id.as_deref().and_then(|id| self.rewrite(id)) {
      chunk.facade_module_id = Some(id);
    }

    for import in chunk.imports.iter_mut().chain(chunk.dynamic_imports.iter_mut()) {
      if !self.options.filter.is_match(import) {
        continue;
      }
      if let Some(rewritten) = self.rewrite(import) {
        *import = rewritten;
      }
    }

    if chunk.code.is_empty() {
      return Ok(0);
    }

    let Some(RewriteCodeReturn { code, map, rewritten_specifiers }) =
      rewrite_code(&original_filename, &chunk.code, chunk.map.as_ref(), &self.options)?
    else {
      return Ok(0);
    };

    chunk.code = code;
    if map.is_some() {
      chunk.map = map;
    }
    Ok(rewritten_specifiers)
  }
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use rename_ext_common::{ExtensionMapping, OutputAsset, ParserOptions};
  use rename_ext_error::RenameError;
  use rename_ext_sourcemap::SourceMapBuilder;

  use super::*;

  fn renamer(mappings: &[(&str, &str)]) -> ExtensionRenamer {
    renamer_with(mappings, RenameOptions::default())
  }

  fn renamer_with(mappings: &[(&str, &str)], options: RenameOptions) -> ExtensionRenamer {
    ExtensionRenamer::new(RenameOptions {
      mappings: Some(mappings.iter().copied().collect::<ExtensionMapping>()),
      cwd: Some(PathBuf::from("/project")),
      ..options
    })
    .unwrap()
  }

  fn entry(filename: &str, code: &str) -> OutputChunk {
    OutputChunk {
      name: filename.split('.').next().unwrap_or_default().to_string(),
      filename: filename.to_string(),
      facade_module_id: Some(format!("/project/src/{filename}")),
      is_entry: true,
      code: code.to_string(),
      ..Default::default()
    }
  }

  fn bundle(outputs: Vec<Output>) -> OutputBundle {
    outputs.into_iter().map(|output| (output.filename().to_string(), output)).collect()
  }

  fn chunk<'a>(bundle: &'a OutputBundle, key: &str) -> &'a OutputChunk {
    bundle.get(key).and_then(Output::as_chunk).unwrap()
  }

  #[test]
  fn renames_entry_and_its_static_import() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let code = "import x from './util.js';\nconsole.log(x);\n";
    let output = renamer.rename(bundle(vec![entry("index.js", code).into()])).unwrap();

    let keys = output.bundle.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, ["index.mjs"]);
    let chunk = chunk(&output.bundle, "index.mjs");
    assert_eq!(chunk.filename, "index.mjs");
    assert_eq!(chunk.facade_module_id.as_deref(), Some("/project/src/index.mjs"));
    assert_eq!(chunk.code, "import x from './util.mjs';\nconsole.log(x);\n");
    assert!(output.warnings.is_empty());
  }

  #[test]
  fn rewrites_require_calls() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let code = "const x = require('./util.js');";
    let output = renamer.rename(bundle(vec![entry("index.js", code).into()])).unwrap();
    assert_eq!(chunk(&output.bundle, "index.mjs").code, "const x = require('./util.mjs');");
  }

  #[test]
  fn rewrites_star_re_exports() {
    let renamer = renamer(&[(".ts", ".js")]);
    let code = "export * from './types.ts';";
    let output = renamer.rename(bundle(vec![entry("types.ts", code).into()])).unwrap();
    assert_eq!(chunk(&output.bundle, "types.js").code, "export * from './types.js';");
  }

  #[test]
  fn leaves_unmapped_dynamic_imports() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let code = "import('./util.css');";
    let output = renamer.rename(bundle(vec![entry("index.js", code).into()])).unwrap();
    let chunk = chunk(&output.bundle, "index.mjs");
    assert_eq!(chunk.code, code);
    assert!(chunk.map.is_none());
  }

  #[test]
  fn excluded_chunks_are_untouched() {
    let renamer = renamer_with(
      &[(".js", ".mjs")],
      RenameOptions { exclude: Some(vec!["src/legacy.js".to_string()]), ..Default::default() },
    );
    let mut legacy = entry("legacy.js", "import x from './util.js';");
    legacy.imports = vec!["util.js".to_string()];
    let output = renamer.rename(bundle(vec![legacy.into()])).unwrap();

    let chunk = chunk(&output.bundle, "legacy.js");
    assert_eq!(chunk.filename, "legacy.js");
    assert_eq!(chunk.facade_module_id.as_deref(), Some("/project/src/legacy.js"));
    assert_eq!(chunk.imports, ["util.js"]);
    assert_eq!(chunk.code, "import x from './util.js';");
  }

  #[test]
  fn chunks_without_facade_and_assets_are_untouched() {
    let renamer = renamer(&[(".js", ".mjs"), (".css", ".scss")]);
    let shared = OutputChunk {
      filename: "shared-a1b2.js".to_string(),
      code: "export * from './other.js';".to_string(),
      ..Default::default()
    };
    let asset = OutputAsset { filename: "style.css".to_string(), source: "a{}".to_string() };
    let output = renamer.rename(bundle(vec![shared.into(), asset.into()])).unwrap();

    let keys = output.bundle.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, ["shared-a1b2.js", "style.css"]);
    assert_eq!(chunk(&output.bundle, "shared-a1b2.js").code, "export * from './other.js';");
  }

  #[test]
  fn imports_are_filtered_one_by_one() {
    let renamer = renamer_with(
      &[(".js", ".mjs")],
      RenameOptions { exclude: Some(vec!["vendor-*.js".to_string()]), ..Default::default() },
    );
    let mut index = entry("index.js", "");
    index.imports = vec!["shared.js".to_string(), "vendor-react.js".to_string()];
    index.dynamic_imports = vec!["lazy.js".to_string(), "data.json".to_string()];
    let output = renamer.rename(bundle(vec![index.into()])).unwrap();

    let chunk = chunk(&output.bundle, "index.mjs");
    assert_eq!(chunk.imports, ["shared.mjs", "vendor-react.js"]);
    assert_eq!(chunk.dynamic_imports, ["lazy.mjs", "data.json"]);
  }

  #[test]
  fn keeps_bundle_order() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let output = renamer
      .rename(bundle(vec![
        entry("b.js", "").into(),
        OutputAsset { filename: "a.txt".to_string(), source: String::new() }.into(),
        entry("c.cjs", "").into(),
        entry("a.js", "").into(),
      ]))
      .unwrap();
    let keys = output.bundle.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, ["b.mjs", "a.txt", "c.cjs", "a.mjs"]);
  }

  #[test]
  fn reports_key_collisions() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let asset = OutputAsset { filename: "index.mjs".to_string(), source: "asset".to_string() };
    let output = renamer.rename(bundle(vec![entry("index.js", "").into(), asset.into()])).unwrap();

    assert_eq!(output.bundle.len(), 1);
    assert!(matches!(output.bundle.get("index.mjs"), Some(Output::Asset(_))));
    assert_eq!(output.warnings.len(), 1);
    assert!(output.warnings[0].to_string().contains("\"index.mjs\""));
  }

  #[test]
  fn second_pass_without_matching_extension_is_a_no_op() {
    let code = "import a from './a.js';\nexport * from './b.js';\n";
    let mut index = entry("index.js", code);
    index.imports = vec!["a.js".to_string(), "b.js".to_string()];

    let first = renamer(&[(".js", ".mjs")]).rename(bundle(vec![index.into()])).unwrap().bundle;
    let first_chunk = chunk(&first, "index.mjs").clone();

    let second = renamer(&[(".js", ".cjs")]).rename(first).unwrap().bundle;
    let keys = second.keys().map(String::as_str).collect::<Vec<_>>();
    assert_eq!(keys, ["index.mjs"]);
    let second_chunk = chunk(&second, "index.mjs");
    assert_eq!(second_chunk.filename, first_chunk.filename);
    assert_eq!(second_chunk.facade_module_id, first_chunk.facade_module_id);
    assert_eq!(second_chunk.imports, first_chunk.imports);
    assert_eq!(second_chunk.code, first_chunk.code);
  }

  #[test]
  fn generates_a_source_map_for_rewritten_code() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let output =
      renamer.rename(bundle(vec![entry("index.js", "import x from './util.js';").into()])).unwrap();

    let map = chunk(&output.bundle, "index.mjs").map.as_ref().unwrap();
    assert_eq!(map.get_source(0), Some("index.js"));
    assert_eq!(map.get_source_content(0), Some("import x from './util.js';"));
  }

  #[test]
  fn source_map_can_be_disabled() {
    let renamer = renamer_with(
      &[(".js", ".mjs")],
      RenameOptions { source_map: Some(false), ..Default::default() },
    );
    let output =
      renamer.rename(bundle(vec![entry("index.js", "import x from './util.js';").into()])).unwrap();

    let chunk = chunk(&output.bundle, "index.mjs");
    assert_eq!(chunk.code, "import x from './util.mjs';");
    assert!(chunk.map.is_none());
  }

  #[test]
  fn collapses_onto_the_previous_source_map() {
    let mut builder = SourceMapBuilder::default();
    let source = builder.add_source_and_content("src/index.ts", "");
    builder.add_token(0, 0, 2, 0, Some(source), None);
    builder.add_token(0, 14, 2, 14, Some(source), None);
    builder.add_token(0, 25, 2, 30, Some(source), None);

    let mut index = entry("index.js", "import x from './util.js';");
    index.map = Some(builder.into_sourcemap());
    let output = renamer(&[(".js", ".mjs")]).rename(bundle(vec![index.into()])).unwrap();

    let map = chunk(&output.bundle, "index.mjs").map.as_ref().unwrap();
    let lookup_table = map.generate_lookup_table();
    let token = map.lookup_token(&lookup_table, 0, 26).unwrap();
    assert_eq!((token.get_src_line(), token.get_src_col()), (2, 30));
    assert_eq!(token.get_source_id().and_then(|id| map.get_source(id)), Some("src/index.ts"));
  }

  #[test]
  fn typescript_chunks_need_the_parser_option() {
    let code = "import type { A } from './types.ts';\nexport const a: A = 1;\n";

    let err = renamer(&[(".ts", ".js")])
      .rename(bundle(vec![entry("index.ts", code).into()]))
      .unwrap_err();
    assert!(matches!(
      err.downcast_ref::<RenameError>().next(),
      Some(RenameError::ParseFailed { file, .. }) if file == "index.ts"
    ));

    let renamer = renamer_with(
      &[(".ts", ".js")],
      RenameOptions {
        parser: Some(ParserOptions { typescript: true, jsx: false }),
        ..Default::default()
      },
    );
    let output = renamer.rename(bundle(vec![entry("index.ts", code).into()])).unwrap();
    assert_eq!(
      chunk(&output.bundle, "index.js").code,
      "import type { A } from './types.js';\nexport const a: A = 1;\n"
    );
  }

  #[test]
  fn parse_failures_abort_the_pass() {
    let renamer = renamer(&[(".js", ".mjs")]);
    let result = renamer.rename(bundle(vec![
      entry("ok.js", "import './a.js';").into(),
      entry("broken.js", "import from;").into(),
    ]));
    assert!(result.is_err());
  }
}
