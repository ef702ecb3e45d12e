use crate::config::Settings;
use crate::utils::error::{Result, UniversityError};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MAX_PERFECT_SCORE: f64 = 1000.0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub grading: Option<GradingConfig>,
    pub presentation: Option<PresentationConfig>,
    pub menu: Option<MenuConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GradingConfig {
    pub perfect_score: Option<f64>,
    pub include_ungraded: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresentationConfig {
    pub decorator_prefix: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    pub staff_options: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| UniversityError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| UniversityError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn perfect_score(&self) -> Option<f64> {
        self.grading.as_ref().and_then(|g| g.perfect_score)
    }

    pub fn include_ungraded(&self) -> Option<bool> {
        self.grading.as_ref().and_then(|g| g.include_ungraded)
    }

    pub fn decorator_prefix(&self) -> Option<&str> {
        self.presentation
            .as_ref()
            .and_then(|p| p.decorator_prefix.as_deref())
    }

    pub fn staff_options(&self) -> Option<bool> {
        self.menu.as_ref().and_then(|m| m.staff_options)
    }

    pub fn validate_config(&self) -> Result<()> {
        if let Some(score) = self.perfect_score() {
            validation::validate_finite("grading.perfect_score", score)?;
            validation::validate_range("grading.perfect_score", score, 0.0, MAX_PERFECT_SCORE)?;
        }

        if let Some(prefix) = self.decorator_prefix() {
            validation::validate_non_empty_string("presentation.decorator_prefix", prefix)?;
        }

        Ok(())
    }

    /// Fills anything the file leaves out with the defaults.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        Settings {
            perfect_score: self.perfect_score().unwrap_or(defaults.perfect_score),
            include_ungraded: self.include_ungraded().unwrap_or(defaults.include_ungraded),
            decorator_prefix: self
                .decorator_prefix()
                .map(|p| p.trim().to_string())
                .unwrap_or(defaults.decorator_prefix),
            staff_options: self.staff_options().unwrap_or(defaults.staff_options),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
