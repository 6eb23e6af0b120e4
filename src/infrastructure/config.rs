// Configuration loading
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SolarConfig {
    pub supabase: SupabaseSettings,
    #[serde(default)]
    pub app: AppSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    /// The anon/service credential. Keep it out of the file and supply it
    /// via SOLAR_SUPABASE__ANON_KEY instead.
    pub anon_key: String,
    #[serde(default = "default_table")]
    pub table: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    #[serde(default = "default_season")]
    pub default_season: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_season: default_season(),
        }
    }
}

fn default_table() -> String {
    "regions_solar_prod_long_geojson".to_string()
}

fn default_season() -> String {
    "annual".to_string()
}

/// Load config/solar.toml, then let SOLAR_-prefixed environment variables
/// override it (double underscore as the section separator, e.g.
/// SOLAR_SUPABASE__ANON_KEY).
pub fn load_solar_config() -> anyhow::Result<SolarConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name("config/solar").required(false))
        .add_source(config::Environment::with_prefix("SOLAR").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_optional_fields() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[supabase]\nurl = \"https://example.supabase.co\"\nanon_key = \"k\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: SolarConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.supabase.table, "regions_solar_prod_long_geojson");
        assert_eq!(cfg.app.default_season, "annual");
    }

    #[test]
    fn test_explicit_values_win() {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(
                "[supabase]\nurl = \"https://example.supabase.co\"\nanon_key = \"k\"\ntable = \"t\"\n[app]\ndefault_season = \"summer\"\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap();
        let cfg: SolarConfig = settings.try_deserialize().unwrap();

        assert_eq!(cfg.supabase.table, "t");
        assert_eq!(cfg.app.default_season, "summer");
    }
}
