//! Entry body reading from `--body` or piped stdin.

use std::io::{self, IsTerminal, Read};

use crate::errors::CliError;

/// Read a required entry body from `--body` or piped stdin.
pub fn read_entry_body(body: Option<String>) -> anyhow::Result<String> {
    read_optional_body(body)?.ok_or_else(|| {
        CliError::invalid_input("No entry body provided; use --body or pipe content via stdin")
            .into()
    })
}

/// Read a body if one was supplied. An empty pipe counts as no body.
pub fn read_optional_body(body: Option<String>) -> anyhow::Result<Option<String>> {
    if let Some(value) = body {
        return validate_body(value).map(Some);
    }

    if io::stdin().is_terminal() {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| anyhow::anyhow!("Failed to read stdin: {}", e))?;
    let trimmed = buffer.trim_end().to_string();
    if trimmed.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed))
}

fn validate_body(value: String) -> anyhow::Result<String> {
    if value.trim().is_empty() {
        return Err(CliError::invalid_input("--body cannot be empty").into());
    }
    Ok(value)
}
