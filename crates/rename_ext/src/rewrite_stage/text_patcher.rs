use rename_ext_error::{BuildResult, RenameError};
use rename_ext_sourcemap::SourceMap;
use string_wizard::{MagicString, SourceMapOptions};

/// Offset-addressed overwrites on top of one chunk's original code.
///
/// Offsets always refer to the original code, no matter how many overwrites were recorded
/// before. Overwritten ranges must not overlap.
pub struct TextPatcher<'text> {
  filename: &'text str,
  source: &'text str,
  magic_string: MagicString<'text>,
  edits: usize,
}

impl<'text> TextPatcher<'text> {
  pub fn new(filename: &'text str, source: &'text str) -> Self {
    Self { filename, source, magic_string: MagicString::new(source), edits: 0 }
  }

  /// Replaces `source[start..end]` with `replacement`.
  ///
  /// A range that is empty, reversed, out of bounds or splits a character can only come from a
  /// node without a real position, and is reported instead of skipped.
  pub fn overwrite(&mut self, start: u32, end: u32, replacement: String) -> BuildResult<()> {
    let (start_idx, end_idx) = (start as usize, end as usize);
    if start_idx >= end_idx
      || end_idx > self.source.len()
      || !self.source.is_char_boundary(start_idx)
      || !self.source.is_char_boundary(end_idx)
    {
      return Err(
        RenameError::MalformedSpecifierPosition { file: self.filename.to_string(), start, end }
          .into(),
      );
    }

    self.magic_string.update(start_idx, end_idx, replacement);
    self.edits += 1;
    Ok(())
  }

  pub fn has_changed(&self) -> bool {
    self.edits > 0
  }

  pub fn to_text(&self) -> String {
    self.magic_string.to_string()
  }

  /// Map from the patched code back to the original code, which is recorded under `filename`.
  pub fn to_source_map(&self) -> SourceMap {
    self.magic_string.source_map(SourceMapOptions {
      include_content: true,
      source: self.filename.into(),
      ..Default::default()
    })
  }
}
