use std::path::PathBuf;

use rename_ext::{ExtensionMapping, ExtensionRenamer, OutputBundle, OutputChunk, RenameOptions};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
    .init();

  let renamer = ExtensionRenamer::new(RenameOptions {
    cwd: Some(PathBuf::from("/project")),
    mappings: Some(ExtensionMapping::from_iter([(".js", ".mjs")])),
    ..Default::default()
  })?;

  let entry = OutputChunk {
    name: "index".to_string(),
    filename: "index.js".to_string(),
    facade_module_id: Some("/project/src/index.js".to_string()),
    is_entry: true,
    imports: vec!["util.js".to_string()],
    code: "import { util } from './util.js';\nconst lazy = () => import('./lazy.js');\n"
      .to_string(),
    ..Default::default()
  };
  let bundle: OutputBundle = [("index.js".to_string(), entry.into())].into_iter().collect();

  let output = renamer.rename(bundle)?;
  for (key, item) in &output.bundle {
    if let Some(chunk) = item.as_chunk() {
      tracing::info!("{key}:\n{}", chunk.code);
    }
  }
  Ok(())
}
