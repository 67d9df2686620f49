//! Environment variable helpers.

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read a secret-bearing environment variable verbatim.
///
/// Blank values count as unset, but surrounding whitespace is part of the
/// secret and is kept.
pub(crate) fn secret_env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// True when `.env` loading has been switched off with `DOTENV_DISABLED=1|true`.
pub(crate) fn dotenv_disabled() -> bool {
    matches!(
        env_var_or_none(crate::constants::ENV_DOTENV_DISABLED).as_deref(),
        Some("1") | Some("true")
    )
}
