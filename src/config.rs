use serde::Deserialize;

/// Top-level nepdate configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NepdateConfig {
    /// Output settings.
    #[serde(default)]
    pub output: OutputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_true")]
    pub era_suffix: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            style: default_style(),
            era_suffix: true,
        }
    }
}

fn default_style() -> String {
    "iso".to_string()
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config: NepdateConfig = toml::from_str("").unwrap();
        assert_eq!(config.output.style, "iso");
        assert!(config.output.era_suffix);
    }

    #[test]
    fn output_section() {
        let config: NepdateConfig = toml::from_str(
            r#"
            [output]
            style = "long"
            era_suffix = false
            "#,
        )
        .unwrap();
        assert_eq!(config.output.style, "long");
        assert!(!config.output.era_suffix);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<NepdateConfig>("[output]\ncolour = true\n").is_err());
        assert!(toml::from_str::<NepdateConfig>("[input]\n").is_err());
    }
}
