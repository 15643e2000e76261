//! Error types for binding construction and configuration.

use miette::Diagnostic;

/// Failure to parse a hotkey descriptor such as `"ctrl+shift+c"`.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
pub enum HotkeyParseError {
    #[error("empty hotkey descriptor")]
    #[diagnostic(code(dic::hotkey::empty))]
    Empty,

    #[error("unknown key `{0}` in hotkey descriptor")]
    #[diagnostic(
        code(dic::hotkey::unknown_key),
        help("use a single character or a named key such as `tab`, `space`, `enter`, `f5`")
    )]
    UnknownKey(String),

    #[error("hotkey `{0}` has modifiers but no key")]
    #[diagnostic(code(dic::hotkey::missing_key))]
    MissingKey(String),

    #[error("hotkey `{0}` names more than one key")]
    #[diagnostic(
        code(dic::hotkey::multiple_keys),
        help("only `ctrl`, `alt`, `shift` and `meta` may be combined with a key")
    )]
    MultipleKeys(String),
}

/// Failure to build a binding.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum BindingError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Hotkey(#[from] HotkeyParseError),

    #[error("macro pattern does not compile: {0}")]
    #[diagnostic(code(dic::binding::macro_pattern))]
    InvalidMacro(#[from] regex::Error),
}

/// Failure to read a content-script configuration override.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(dic::config::invalid))]
    Invalid(String),

    #[error("configuration field `{0}` must not be empty")]
    #[diagnostic(code(dic::config::empty_field))]
    EmptyField(&'static str),
}
