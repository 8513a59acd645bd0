//! Schema loading from various sources.
//!
//! Handles loading schema and definitions documents from files, strings,
//! readers (stdin), and HTTP URLs.

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::ConvertError;
use crate::registry::DefinitionSource;

#[cfg(feature = "remote")]
use std::time::Duration;

/// Default timeout for HTTP requests (10 seconds).
#[cfg(feature = "remote")]
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Load a schema from a file path.
///
/// # Errors
///
/// Returns `ConvertError::FileNotFound` if the file doesn't exist,
/// or `ConvertError::InvalidJson` if the file isn't valid JSON.
pub fn load_schema(path: &Path) -> Result<Value, ConvertError> {
    if !path.exists() {
        return Err(ConvertError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConvertError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;

    load_schema_str(&content)
}

/// Load a schema from a JSON string.
///
/// # Errors
///
/// Returns `ConvertError::InvalidJson` if the string isn't valid JSON.
pub fn load_schema_str(content: &str) -> Result<Value, ConvertError> {
    serde_json::from_str(content).map_err(|source| ConvertError::InvalidJson { source })
}

/// Load a schema from a reader such as stdin.
///
/// # Errors
///
/// Returns `ConvertError::ReadError` if reading fails, or
/// `ConvertError::InvalidJson` if the content isn't valid JSON.
pub fn load_schema_reader<R: Read>(mut reader: R) -> Result<Value, ConvertError> {
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|source| ConvertError::ReadError {
            path: "<stdin>".into(),
            source,
        })?;
    load_schema_str(&content)
}

/// Load a schema from an HTTP/HTTPS URL.
///
/// Requires the `remote` feature (enabled by default).
///
/// # Errors
///
/// Returns `ConvertError::NetworkError` if the request fails,
/// or the response isn't valid JSON.
#[cfg(feature = "remote")]
pub fn load_schema_url(url: &str) -> Result<Value, ConvertError> {
    let network_error = |source| ConvertError::NetworkError {
        url: url.to_string(),
        source,
    };

    let client = reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()
        .map_err(network_error)?;

    tracing::debug!(url, "fetching schema");
    let response = client.get(url).send().map_err(network_error)?;

    // Check for HTTP errors before parsing
    let response = response.error_for_status().map_err(network_error)?;

    response.json().map_err(network_error)
}

/// Check if a string looks like a URL (starts with http:// or https://).
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load a schema from a file path or URL.
///
/// Automatically detects whether the source is a URL or file path.
/// URL loading requires the `remote` feature.
///
/// # Errors
///
/// Returns appropriate errors based on the source type.
pub fn load_schema_auto(source: &str) -> Result<Value, ConvertError> {
    if is_url(source) {
        #[cfg(feature = "remote")]
        {
            load_schema_url(source)
        }
        #[cfg(not(feature = "remote"))]
        {
            Err(ConvertError::FileNotFound {
                path: std::path::PathBuf::from(source),
            })
        }
    } else {
        load_schema(Path::new(source))
    }
}

/// Load a definitions file (or URL) as a definitions source.
///
/// The document may hold `definitions` and `alt_definitions`; other keys are
/// ignored.
///
/// # Errors
///
/// Returns loading errors as for [`load_schema_auto`], or
/// `ConvertError::InvalidDefinitions` if the tables are malformed.
pub fn load_definitions(source: &str) -> Result<DefinitionSource, ConvertError> {
    let document = load_schema_auto(source)?;
    let definitions = DefinitionSource::from_value(&document)?;
    tracing::debug!(
        source,
        definitions = definitions.definitions.len(),
        "loaded definitions"
    );
    Ok(definitions)
}
