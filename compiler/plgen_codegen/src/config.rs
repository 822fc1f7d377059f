//! Code generation settings.

/// Names and widths used in generated SQL and Python.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodegenConfig {
    /// Procedural language of every generated routine (`LANGUAGE <language>`).
    pub language: String,
    /// Shared dictionary the installer assigns into.
    pub namespace: String,
    /// Name of the generated installer routine.
    pub install_routine: String,
    /// Return type of the installer routine.
    pub install_returns: String,
    /// Spaces added in front of every non-blank body line.
    pub block_indent: usize,
    /// Spaces in front of the `RETURNS` clause.
    pub clause_indent: usize,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        CodegenConfig {
            language: "plpython3u".to_string(),
            namespace: "GD".to_string(),
            install_routine: "_add_to_gd".to_string(),
            install_returns: "TEXT".to_string(),
            block_indent: 4,
            clause_indent: 2,
        }
    }
}
