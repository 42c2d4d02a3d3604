//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::ExporterConfig;
use super::secret::secret_string;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`ExporterConfig`]
/// 4. Applies environment variable overrides (`GRAFANA_EXPORT_*` prefix)
///
/// Validation is left to the caller, because CLI flags are usually applied
/// on top of the loaded file before the configuration is complete.
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, or the TOML does not parse.
///
/// # Examples
///
/// ```no_run
/// use grafana_export::config::loader::load_config;
///
/// let config = load_config("grafana-export.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<ExporterConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ExportError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        ExportError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    let contents = substitute_env_vars(&contents)?;

    let mut config: ExporterConfig = toml::from_str(&contents)
        .map_err(|e| ExportError::Configuration(format!("Failed to parse TOML: {e}")))?;

    apply_env_overrides(&mut config)?;

    Ok(config)
}

/// Loads the configuration file if one is given, otherwise starts from defaults
///
/// Environment overrides are applied in both cases.
pub fn load_config_or_default(path: Option<&str>) -> Result<ExporterConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            let mut config = ExporterConfig::default();
            apply_env_overrides(&mut config)?;
            Ok(config)
        }
    }
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are left untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| ExportError::Other(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(ExportError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `GRAFANA_EXPORT_*` prefix
///
/// List-valued settings (`FOLDER_NAMES`, `SKIP_RESOURCES`) are comma-separated.
fn apply_env_overrides(config: &mut ExporterConfig) -> Result<()> {
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("GRAFANA_EXPORT_URL") {
        config.grafana.url = val;
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_API_KEY") {
        config.grafana.api_key = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_USERNAME") {
        config.grafana.username = Some(val);
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_PASSWORD") {
        config.grafana.password = Some(secret_string(val));
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_TIMEOUT_SECONDS") {
        config.grafana.timeout_seconds = val.parse().map_err(|_| {
            ExportError::Configuration(format!(
                "GRAFANA_EXPORT_TIMEOUT_SECONDS must be a positive integer, got '{val}'"
            ))
        })?;
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_TLS_VERIFY") {
        config.grafana.tls_verify = val.parse().unwrap_or(true);
    }

    if let Ok(val) = std::env::var("GRAFANA_EXPORT_FOLDER_NAMES") {
        config.export.folder_names = split_list(&val);
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_SKIP_RESOURCES") {
        config.export.skip_resources = split_list(&val);
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_OUTPUT_DIR") {
        config.export.output_dir = val;
    }
    if let Ok(val) = std::env::var("GRAFANA_EXPORT_DRY_RUN") {
        config.export.dry_run = val.parse().unwrap_or(false);
    }

    Ok(())
}

/// Splits a comma-delimited list, trimming entries and dropping empty ones
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;
    use tempfile::NamedTempFile;

    // Serializes tests that touch process environment variables
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn test_split_list() {
        assert_eq!(
            split_list("d_a, d_b ,,d_c"),
            vec!["d_a".to_string(), "d_b".to_string(), "d_c".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_substitute_env_vars() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::set_var("GFX_LOADER_TEST_KEY", "glsa_from_env");

        let input = "api_key = \"${GFX_LOADER_TEST_KEY}\"\n# api_key = \"${NOT_SET_IN_COMMENT}\"";
        let result = substitute_env_vars(input).unwrap();

        assert!(result.contains("api_key = \"glsa_from_env\""));
        assert!(result.contains("${NOT_SET_IN_COMMENT}"));

        std::env::remove_var("GFX_LOADER_TEST_KEY");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("GFX_LOADER_MISSING");

        let err = substitute_env_vars("url = \"${GFX_LOADER_MISSING}\"").unwrap_err();
        assert!(err.to_string().contains("GFX_LOADER_MISSING"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config("/nonexistent/grafana-export.toml").unwrap_err();
        assert!(matches!(err, ExportError::Configuration(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_config_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[grafana").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML"));
    }

    #[test]
    fn test_load_config_or_default_without_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        std::env::remove_var("GRAFANA_EXPORT_URL");

        let config = load_config_or_default(None).unwrap();
        assert_eq!(config.export.output_file, "grafana.tf");
    }
}
