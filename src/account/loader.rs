//! Batch loading of accounts from line-oriented input files.

use std::fs;
use std::path::Path;

use crate::account::{Account, SecretKey};
use crate::config::schema::InputConfig;

/// Errors that abort the whole run during account loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error(
        "input files must have the same number of lines \
         (keys: {keys}, proxies: {proxies}, recipients: {recipients})"
    )]
    LengthMismatch {
        keys: usize,
        proxies: usize,
        recipients: usize,
    },
}

fn read_lines(path: &Path) -> Result<Vec<String>, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(content.lines().map(|line| line.to_string()).collect())
}

/// Load the three parallel input files and build accounts.
///
/// The files must be of equal length or the whole run aborts. Records
/// with an invalid recipient or secret key are logged and skipped; an
/// empty proxy line means direct connection.
pub fn load_accounts(inputs: &InputConfig) -> Result<Vec<Account>, LoadError> {
    let keys = read_lines(Path::new(&inputs.keys_path))?;
    let proxies = read_lines(Path::new(&inputs.proxies_path))?;
    let recipients = read_lines(Path::new(&inputs.recipients_path))?;

    if keys.len() != proxies.len() || keys.len() != recipients.len() {
        return Err(LoadError::LengthMismatch {
            keys: keys.len(),
            proxies: proxies.len(),
            recipients: recipients.len(),
        });
    }

    let mut accounts = Vec::with_capacity(keys.len());
    for ((key, proxy), recipient) in keys.into_iter().zip(proxies).zip(recipients) {
        let proxy = {
            let trimmed = proxy.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        match Account::new(SecretKey::new(key), &recipient, proxy) {
            Ok(account) => accounts.push(account),
            Err(e) => {
                tracing::error!(error = %e, "Skipping record");
            }
        }
    }
    Ok(accounts)
}
