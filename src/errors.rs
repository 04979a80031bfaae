#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Syntax(SyntaxError),
    Synthesis(SynthesisError),
    IO(String, std::io::Error), // For general I/O errors not covered by specific types
    Generic(String),            // For simple string-based errors
}

#[derive(Debug)]
pub enum ConfigError {
    FileRead(String, std::io::Error),
    TomlParse(String, toml::de::Error),
}

/// Errors raised while turning Java source text into a syntax model.
#[derive(Debug)]
pub enum SyntaxError {
    UnsupportedLanguage(String),
    ParseError(String),
    QueryError(String),
    InitializationError(String),
}

/// Errors raised while synthesizing accessor method text for a field.
#[derive(Debug)]
pub enum SynthesisError {
    /// A field declaration with an empty name cannot produce a method name.
    EmptyFieldName { class_name: String },
    /// The generated method text does not re-parse into a valid member.
    InvalidMethodText { method_name: String, detail: String },
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Syntax(e) => write!(f, "Syntax analysis error: {}", e),
            AppError::Synthesis(e) => write!(f, "Accessor synthesis error: {}", e),
            AppError::IO(context, e) => write!(f, "I/O error while {}: {}", context, e),
            AppError::Generic(s) => write!(f, "Application error: {}", s),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Syntax(e) => Some(e),
            AppError::Synthesis(e) => Some(e),
            AppError::IO(_, e) => Some(e),
            AppError::Generic(_) => None,
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::FileRead(file, e) => write!(f, "Failed to read file '{}': {}", file, e),
            ConfigError::TomlParse(file, e) => {
                write!(f, "Failed to parse TOML from file '{}': {}", file, e)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::FileRead(_, e) => Some(e),
            ConfigError::TomlParse(_, e) => Some(e),
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SyntaxError::UnsupportedLanguage(lang) => write!(f, "Unsupported language: {}", lang),
            SyntaxError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            SyntaxError::QueryError(msg) => write!(f, "Query error: {}", msg),
            SyntaxError::InitializationError(msg) => write!(f, "Initialization error: {}", msg),
        }
    }
}

impl std::error::Error for SyntaxError {}

impl std::fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SynthesisError::EmptyFieldName { class_name } => {
                write!(f, "Field with empty name in class '{}'", class_name)
            }
            SynthesisError::InvalidMethodText {
                method_name,
                detail,
            } => {
                write!(
                    f,
                    "Generated method '{}' does not parse: {}",
                    method_name, detail
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

// --- From implementations for AppError ---

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<SyntaxError> for AppError {
    fn from(err: SyntaxError) -> Self {
        AppError::Syntax(err)
    }
}

impl From<SynthesisError> for AppError {
    fn from(err: SynthesisError) -> Self {
        AppError::Synthesis(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IO("I/O operation failed".to_string(), err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn mock_toml_error() -> toml::de::Error {
        toml::from_str::<toml::Value>("invalid_toml").err().unwrap()
    }

    #[test]
    fn test_config_error_display() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err_file_read = ConfigError::FileRead("config.toml".to_string(), io_err);
        assert_eq!(
            format!("{}", err_file_read),
            "Failed to read file 'config.toml': file not found"
        );

        let err_toml_parse = ConfigError::TomlParse("config.toml".to_string(), mock_toml_error());
        assert!(
            format!("{}", err_toml_parse)
                .starts_with("Failed to parse TOML from file 'config.toml': ")
        );
    }

    #[test]
    fn test_syntax_error_display() {
        let err_lang = SyntaxError::UnsupportedLanguage("kotlin".to_string());
        assert_eq!(format!("{}", err_lang), "Unsupported language: kotlin");

        let err_parse = SyntaxError::ParseError("unbalanced braces".to_string());
        assert_eq!(format!("{}", err_parse), "Parse error: unbalanced braces");

        let err_query = SyntaxError::QueryError("bad capture".to_string());
        assert_eq!(format!("{}", err_query), "Query error: bad capture");

        let err_init = SyntaxError::InitializationError("no grammar".to_string());
        assert_eq!(format!("{}", err_init), "Initialization error: no grammar");
    }

    #[test]
    fn test_synthesis_error_display() {
        let err_empty = SynthesisError::EmptyFieldName {
            class_name: "User".to_string(),
        };
        assert_eq!(
            format!("{}", err_empty),
            "Field with empty name in class 'User'"
        );

        let err_invalid = SynthesisError::InvalidMethodText {
            method_name: "getCount".to_string(),
            detail: "probe tree contains errors".to_string(),
        };
        assert_eq!(
            format!("{}", err_invalid),
            "Generated method 'getCount' does not parse: probe tree contains errors"
        );
    }

    #[test]
    fn test_app_error_display() {
        let syn_err = SyntaxError::UnsupportedLanguage("go".to_string());
        let app_syn_err = AppError::from(syn_err);
        assert_eq!(
            format!("{}", app_syn_err),
            "Syntax analysis error: Unsupported language: go"
        );

        let synth_err = SynthesisError::EmptyFieldName {
            class_name: "Order".to_string(),
        };
        let app_synth_err = AppError::from(synth_err);
        assert_eq!(
            format!("{}", app_synth_err),
            "Accessor synthesis error: Field with empty name in class 'Order'"
        );

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broke");
        let app_io_err: AppError = io_err.into();
        assert_eq!(
            format!("{}", app_io_err),
            "I/O error while I/O operation failed: pipe broke"
        );

        let app_generic_err = AppError::Generic("Something went wrong".to_string());
        assert_eq!(
            format!("{}", app_generic_err),
            "Application error: Something went wrong"
        );
    }
}
