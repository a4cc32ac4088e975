//! Env-file reader - resolves an environment variable to a file path and
//! returns the file's content.
//!
//! Typical use is loading secrets mounted into a container:
//! `ENCRYPT_KEY_FILE=/run/secrets/encrypt_key` instead of putting the key
//! itself into the environment.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::sync::Arc;

use crate::error::EnvFileError;
use crate::infrastructure::config::ReaderConfig;
use crate::infrastructure::environment::SystemEnvironment;
use crate::infrastructure::ports::{EnvironmentPort, PropertyStorePort};
use crate::infrastructure::property_store::system_properties;

/// Reads files named by environment variables.
///
/// Content is read as UTF-8, split into lines and rejoined with
/// [`ReaderConfig::line_separator`]. A value counts as blank when it is empty
/// or whitespace only.
pub struct EnvFileReader {
    environment: Arc<dyn EnvironmentPort>,
    properties: Arc<dyn PropertyStorePort>,
    config: ReaderConfig,
}

impl EnvFileReader {
    pub fn new(
        environment: Arc<dyn EnvironmentPort>,
        properties: Arc<dyn PropertyStorePort>,
    ) -> Self {
        Self {
            environment,
            properties,
            config: ReaderConfig::default(),
        }
    }

    /// Reader over the OS environment, publishing into [`system_properties`].
    pub fn system() -> Self {
        Self::new(Arc::new(SystemEnvironment::new()), system_properties())
    }

    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Read the file named by `env_name`, failing if the variable or the file
    /// is blank. Same as `read_with(env_name, true)`.
    pub fn read(&self, env_name: &str) -> Result<String, EnvFileError> {
        self.read_with(env_name, true)
    }

    /// Read the file named by `env_name`.
    ///
    /// # Arguments
    /// * `env_name` - Environment variable holding the file path
    /// * `required` - When false, an unset/blank variable or a blank file
    ///   yields an empty string instead of an error
    ///
    /// # Errors
    /// * `VariableNotSet` - variable unset or blank and `required`
    /// * `FileEmpty` - file content blank and `required`
    /// * `Io` - the file could not be opened or read, regardless of `required`
    pub fn read_with(&self, env_name: &str, required: bool) -> Result<String, EnvFileError> {
        let path = match self.environment.get_var(env_name) {
            Some(path) if !is_blank(&path) => path,
            _ => {
                if required {
                    return Err(EnvFileError::variable_not_set(env_name));
                }
                tracing::warn!(
                    env_name,
                    "Optional environment variable is not set, using empty content"
                );
                return Ok(String::new());
            }
        };

        tracing::debug!(env_name, path = %path, "Reading file named by environment variable");

        let content = read_lines_joined(Path::new(&path), &self.config.line_separator)
            .map_err(|e| EnvFileError::io(path.as_str(), e))?;

        if !is_blank(&content) {
            return Ok(content);
        }
        if required {
            return Err(EnvFileError::file_empty(path));
        }

        tracing::warn!(env_name, path = %path, "Optional file is blank, using empty content");
        Ok(String::new())
    }

    /// Read every env-file in `env_names_to_properties` and store each content
    /// under its property name.
    ///
    /// Every entry is required. The first failure stops the batch; properties
    /// stored before it are kept.
    pub fn read_and_set<I, K, P>(&self, env_names_to_properties: I) -> Result<(), EnvFileError>
    where
        I: IntoIterator<Item = (K, P)>,
        K: AsRef<str>,
        P: AsRef<str>,
    {
        for (env_name, property) in env_names_to_properties {
            let (env_name, property) = (env_name.as_ref(), property.as_ref());
            let content = self.read(env_name)?;
            self.properties.set_property(property, &content);

            tracing::info!(env_name, property, "Stored env-file content as property");
        }

        Ok(())
    }
}

/// Join the file's lines with `separator`. No trailing separator is added.
fn read_lines_joined(path: &Path, separator: &str) -> io::Result<String> {
    let mut text = String::new();
    BufReader::new(File::open(path)?).read_to_string(&mut text)?;

    Ok(split_lines(&text).join(separator))
}

/// Split on `\r\n`, `\r` or `\n`. A terminator at the very end does not start
/// another line.
fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let (mut start, mut index) = (0, 0);

    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&text[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&text[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }

    lines
}

fn is_blank(value: &str) -> bool {
    value.chars().all(is_whitespace)
}

/// Whitespace without the no-break spaces (U+00A0, U+2007, U+202F) and NEL,
/// plus the ASCII separators U+001C..=U+001F.
fn is_whitespace(c: char) -> bool {
    match c {
        '\u{00A0}' | '\u{2007}' | '\u{202F}' | '\u{0085}' => false,
        '\u{001C}'..='\u{001F}' => true,
        c => c.is_whitespace(),
    }
}
