//! `${VAR}` and `${VAR:-default}` expansion for configured base paths.

use crate::ConfigError;

/// Expand environment variable references in a configured value.
///
/// Values without `${` are returned as-is, so a bare `$` in a URL path is
/// never touched. An unset variable without a default is an error naming the
/// field it came from.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |var| -> Result<Option<String>, UnsetVar> {
        std::env::var(var).map(Some).map_err(|_| UnsetVar {
            name: var.to_owned(),
        })
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.name),
    })
}

struct UnsetVar {
    name: String,
}
