/// A module specifier literal found in a chunk.
///
/// `start..end` are byte offsets into the chunk's code and include the quotes, `value` is the
/// literal's content without them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModuleSpecifierReference<'a> {
  pub start: u32,
  pub end: u32,
  pub value: &'a str,
}
