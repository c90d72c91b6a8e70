//! Environment variable expansion for configuration strings.

use crate::ConfigError;

/// Expand `${VAR}` references in a configuration value.
///
/// `${VAR}` expands to the value of `VAR` and errors when it is unset;
/// `${VAR:-default}` falls back to `default` instead. Strings without a
/// `${` marker come back unchanged, as does bare `$VAR` without braces.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_string());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, MissingVar> {
        match std::env::var(var) {
            Ok(val) => Ok(Some(val)),
            Err(_) => Err(MissingVar {
                name: var.to_string(),
            }),
        }
    })
    .map(|cow| cow.into_owned())
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_string(),
        message: format!("${{{0}}} not set", e.cause.name),
    })
}

/// Lookup failure carried out of the shellexpand context closure.
struct MissingVar {
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_set_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_SET", "10.0.0.5");
        }
        let result = expand_env("${FOLIO_EXPAND_SET}", "server.host").unwrap();
        assert_eq!(result, "10.0.0.5");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_SET");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_UNSET");
        }
        let result = expand_env("${FOLIO_EXPAND_UNSET:-0.0.0.0}", "server.host").unwrap();
        assert_eq!(result, "0.0.0.0");
    }

    #[test]
    fn test_default_ignored_when_set() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_PRESENT", "real");
        }
        let result = expand_env("${FOLIO_EXPAND_PRESENT:-fallback}", "server.host").unwrap();
        assert_eq!(result, "real");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_PRESENT");
        }
    }

    #[test]
    fn test_missing_var_reports_field() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_MISSING");
        }
        let err = expand_env("${FOLIO_EXPAND_MISSING}", "notes.source_dir").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_EXPAND_MISSING"));
        assert!(err.to_string().contains("notes.source_dir"));
    }

    #[test]
    fn test_literal_unchanged() {
        let result = expand_env("127.0.0.1", "server.host").unwrap();
        assert_eq!(result, "127.0.0.1");
    }

    #[test]
    fn test_embedded_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_EXPAND_DIR", "shared");
        }
        let result = expand_env("/srv/${FOLIO_EXPAND_DIR}/notes", "notes.source_dir").unwrap();
        assert_eq!(result, "/srv/shared/notes");
        unsafe {
            std::env::remove_var("FOLIO_EXPAND_DIR");
        }
    }

    #[test]
    fn test_bare_dollar_untouched() {
        let result = expand_env("$HOME/notes", "notes.source_dir").unwrap();
        assert_eq!(result, "$HOME/notes");
    }
}
