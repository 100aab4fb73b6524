use tracing::debug;

/// Resolve a credential value. A value starting with `$` is read from the
/// environment variable it names; if that variable is unset the value is
/// treated as missing.
pub fn resolve_credential(value: &str) -> Option<String> {
    resolve_credential_with(value, |name| std::env::var(name).ok())
}

pub fn resolve_credential_with<F>(value: &str, lookup: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let value = value.trim();
    let resolved = match value.strip_prefix('$') {
        Some(var_name) => {
            let found = lookup(var_name);
            debug!(var = %var_name, found = found.is_some(), "Resolving credential from environment");
            found
        }
        None => Some(value.to_string()),
    };
    resolved.filter(|v| !v.trim().is_empty())
}

/// Replace every occurrence of `secret` in `text` with `[REDACTED]`.
/// Secrets shorter than four characters are left alone.
pub fn redact_credentials(text: &str, secret: &str) -> String {
    if secret.len() < 4 {
        return text.to_string();
    }
    text.replace(secret, "[REDACTED]")
}
