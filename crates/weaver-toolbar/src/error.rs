//! Error types for the toolbar.

use std::path::PathBuf;

use miette::Diagnostic;

use crate::actions::ToolbarAction;

/// Main error type for toolbar construction and configuration.
///
/// All of these are host misconfiguration, surfaced when the toolbar is built.
/// Per-press problems never reach this type; the dispatcher absorbs them.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ToolbarError {
    /// The editor accessor returned nothing at mount.
    #[error("toolbar has no editor")]
    #[diagnostic(
        code(weaver_toolbar::no_editor),
        help("the editor must exist before the toolbar is mounted against it")
    )]
    NoEditor,

    /// The same action appears twice in an action list.
    #[error("duplicate action `{0}` in toolbar action list")]
    #[diagnostic(code(weaver_toolbar::duplicate_action))]
    DuplicateAction(ToolbarAction),

    /// Configuration could not be loaded or saved.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),
}

/// Errors from reading or writing toolbar configuration files.
#[derive(thiserror::Error, Debug, Diagnostic)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to access config file")]
    #[diagnostic(code(weaver_toolbar::config::io))]
    Io(#[from] std::io::Error),

    #[error("invalid JSON toolbar config")]
    #[diagnostic(code(weaver_toolbar::config::json))]
    Json(#[from] serde_json::Error),

    #[error("invalid TOML toolbar config")]
    #[diagnostic(code(weaver_toolbar::config::toml))]
    TomlDe(#[from] toml::de::Error),

    #[error("failed to serialize toolbar config as TOML")]
    #[diagnostic(code(weaver_toolbar::config::toml))]
    TomlSer(#[from] toml::ser::Error),

    #[error("unsupported config format: {}", .0.display())]
    #[diagnostic(
        code(weaver_toolbar::config::format),
        help("use a `.json` or `.toml` file")
    )]
    UnsupportedFormat(PathBuf),
}
