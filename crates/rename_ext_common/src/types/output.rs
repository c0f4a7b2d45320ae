use rename_ext_utils::indexmap::FxIndexMap;

use crate::{OutputAsset, OutputChunk};

/// Everything a build emitted, keyed by output file name in emission order.
pub type OutputBundle = FxIndexMap<String, Output>;

#[derive(Debug, Clone)]
pub enum Output {
  Chunk(Box<OutputChunk>),
  Asset(Box<OutputAsset>),
}

impl Output {
  pub fn filename(&self) -> &str {
    match self {
      Self::Chunk(chunk) => &chunk.filename,
      Self::Asset(asset) => &asset.filename,
    }
  }

  pub fn facade_module_id(&self) -> Option<&str> {
    match self {
      Self::Chunk(chunk) => chunk.facade_module_id.as_deref(),
      Self::Asset(_) => None,
    }
  }

  pub fn as_chunk(&self) -> Option<&OutputChunk> {
    match self {
      Self::Chunk(chunk) => Some(chunk),
      Self::Asset(_) => None,
    }
  }
}

impl From<OutputChunk> for Output {
  fn from(chunk: OutputChunk) -> Self {
    Self::Chunk(Box::new(chunk))
  }
}

impl From<OutputAsset> for Output {
  fn from(asset: OutputAsset) -> Self {
    Self::Asset(Box::new(asset))
  }
}
