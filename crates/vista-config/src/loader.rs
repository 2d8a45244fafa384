use std::path::Path;

use secrecy::ExposeSecret;

use crate::{AnyOrArray, Config};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the provider credentials are blank or the
    /// configured routes are unusable
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_provider()?;
        self.validate_routes()?;
        self.validate_cors()?;
        Ok(())
    }

    fn validate_provider(&self) -> anyhow::Result<()> {
        if self.imagegen.provider.api_key.expose_secret().trim().is_empty() {
            anyhow::bail!("imagegen.provider.api_key must not be empty");
        }

        Ok(())
    }

    fn validate_routes(&self) -> anyhow::Result<()> {
        let image_path = &self.imagegen.path;
        if !image_path.starts_with('/') {
            anyhow::bail!("imagegen.path must start with '/': `{image_path}`");
        }

        let health = &self.server.health;
        if health.enabled {
            if !health.path.starts_with('/') {
                anyhow::bail!("server.health.path must start with '/': `{}`", health.path);
            }

            if health.path == *image_path {
                anyhow::bail!("server.health.path and imagegen.path must differ: `{image_path}`");
            }
        }

        Ok(())
    }

    /// Browsers reject credentialed responses that use wildcards
    fn validate_cors(&self) -> anyhow::Result<()> {
        let Some(ref cors) = self.server.cors else {
            return Ok(());
        };

        if cors.credentials
            && [&cors.origins, &cors.methods, &cors.headers]
                .into_iter()
                .any(|value| *value == AnyOrArray::Any)
        {
            anyhow::bail!("server.cors.credentials requires explicit origins, methods and headers");
        }

        Ok(())
    }
}
