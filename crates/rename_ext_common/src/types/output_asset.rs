/// Non-code output, e.g. a copied stylesheet. Assets have no facade module so the rename pass
/// never selects them.
#[derive(Debug, Clone)]
pub struct OutputAsset {
  pub filename: String,
  pub source: String,
}
