use rename_ext_common::OutputBundle;

#[derive(Debug, Default)]
pub struct RenameOutput {
  pub bundle: OutputBundle,
  pub warnings: Vec<anyhow::Error>,
}
