//! Configuration types for tabasaran-quran

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::PathBuf, time::Duration};

/// Local translation corpus settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TranslationsConfig {
    /// Directory holding `sura_<N>_tabasaran.json` files (default: "data/translations")
    #[serde(default = "default_translations_dir")]
    pub dir: PathBuf,
}

impl Default for TranslationsConfig {
    fn default() -> Self {
        Self {
            dir: default_translations_dir(),
        }
    }
}

/// Edition identifiers requested from the upstream service
///
/// Each identifier has a fixed role in the merge: the canonical edition drives
/// the verse sequence, the other two only contribute text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditionConfig {
    /// Canonical Arabic script (default: "quran-uthmani")
    #[serde(default = "default_canonical_edition")]
    pub canonical: String,

    /// Latin transliteration (default: "en.transliteration")
    #[serde(default = "default_transliteration_edition")]
    pub transliteration: String,

    /// Reference translation in a fixed third language (default: "ru.kuliev")
    #[serde(default = "default_reference_edition")]
    pub reference: String,
}

impl EditionConfig {
    /// All three identifiers in request order
    pub fn all(&self) -> Vec<String> {
        vec![
            self.canonical.clone(),
            self.transliteration.clone(),
            self.reference.clone(),
        ]
    }
}

impl Default for EditionConfig {
    fn default() -> Self {
        Self {
            canonical: default_canonical_edition(),
            transliteration: default_transliteration_edition(),
            reference: default_reference_edition(),
        }
    }
}

/// Upstream verse service settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RemoteConfig {
    /// API base URL (default: "https://api.alquran.cloud/v1")
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Editions requested for a full chapter
    #[serde(default)]
    pub editions: EditionConfig,

    /// Request timeout (default: 30 seconds)
    #[serde(default = "default_request_timeout", with = "duration_serde")]
    pub request_timeout: Duration,

    /// How long successful responses are reused (default: 1 hour, None disables)
    #[serde(default = "default_cache_ttl", with = "optional_duration_serde")]
    pub cache_ttl: Option<Duration>,

    /// User agent sent upstream
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            editions: EditionConfig::default(),
            request_timeout: default_request_timeout(),
            cache_ttl: default_cache_ttl(),
            user_agent: default_user_agent(),
        }
    }
}

/// Fixed strings of the opening formula (bismillah)
///
/// The prefix length and transliteration are tied to the exact strings served
/// by the `quran-uthmani` and `en.transliteration` editions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningFormulaConfig {
    /// Canonical text used for the pseudo-verse 0
    #[serde(default = "default_formula_canonical")]
    pub canonical_text: String,

    /// Number of characters stripped from the trimmed canonical text of verse 1 (default: 38)
    #[serde(default = "default_formula_prefix_chars")]
    pub canonical_prefix_chars: usize,

    /// Transliteration used for verse 0 and stripped from verse 1
    #[serde(default = "default_formula_transliteration")]
    pub transliteration_prefix: String,

    /// Reference translation used for verse 0
    #[serde(default = "default_formula_reference")]
    pub reference_translation: String,
}

impl Default for OpeningFormulaConfig {
    fn default() -> Self {
        Self {
            canonical_text: default_formula_canonical(),
            canonical_prefix_chars: default_formula_prefix_chars(),
            transliteration_prefix: default_formula_transliteration(),
            reference_translation: default_formula_reference(),
        }
    }
}

/// Chapter listing settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ListingConfig {
    /// Maximum chapter pipelines in flight while building the listing (default: 8)
    #[serde(default = "default_max_concurrent_fetches")]
    pub max_concurrent_fetches: usize,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            max_concurrent_fetches: default_max_concurrent_fetches(),
        }
    }
}

/// API and external server integration configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServerIntegrationConfig {
    /// REST API configuration
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,

    /// Enable Swagger UI at /swagger-ui (default: true)
    #[serde(default = "default_true")]
    pub swagger_ui: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
            swagger_ui: true,
        }
    }
}

/// Main configuration
///
/// Every section has defaults, so `Config::default()` serves the public
/// upstream API with translations read from `data/translations`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// Local translation corpus
    #[serde(default)]
    pub translations: TranslationsConfig,

    /// Upstream verse service
    #[serde(default)]
    pub remote: RemoteConfig,

    /// Opening-formula constants
    #[serde(default)]
    pub opening_formula: OpeningFormulaConfig,

    /// Chapter listing
    #[serde(default)]
    pub listing: ListingConfig,

    /// API server
    #[serde(default)]
    pub server: ServerIntegrationConfig,
}

impl Config {
    /// Check settings that would otherwise fail at request time
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] naming the offending key.
    pub fn validate(&self) -> Result<()> {
        url::Url::parse(&self.remote.base_url).map_err(|e| {
            Error::config("remote.base_url", format!("invalid base URL: {e}"))
        })?;

        let editions = &self.remote.editions;
        for (key, value) in [
            ("remote.editions.canonical", &editions.canonical),
            ("remote.editions.transliteration", &editions.transliteration),
            ("remote.editions.reference", &editions.reference),
        ] {
            if value.trim().is_empty() || value.contains(',') {
                return Err(Error::config(
                    key,
                    format!("edition identifier {value:?} must be non-empty and contain no commas"),
                ));
            }
        }

        if self.opening_formula.canonical_prefix_chars == 0 {
            return Err(Error::config(
                "opening_formula.canonical_prefix_chars",
                "prefix length must be positive",
            ));
        }

        if self.listing.max_concurrent_fetches == 0 {
            return Err(Error::config(
                "listing.max_concurrent_fetches",
                "must allow at least one fetch",
            ));
        }

        let formula_chars = self.opening_formula.canonical_text.trim().chars().count();
        if formula_chars != self.opening_formula.canonical_prefix_chars {
            tracing::warn!(
                formula_chars,
                prefix_chars = self.opening_formula.canonical_prefix_chars,
                "Opening formula length differs from the configured strip length"
            );
        }

        Ok(())
    }

    /// Load configuration from a JSON file and validate it
    ///
    /// # Errors
    ///
    /// Returns an I/O or serialization error if the file cannot be read or
    /// parsed, or [`Error::Config`] if validation fails.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }
}

fn default_translations_dir() -> PathBuf {
    PathBuf::from("data/translations")
}

fn default_canonical_edition() -> String {
    "quran-uthmani".to_string()
}

fn default_transliteration_edition() -> String {
    "en.transliteration".to_string()
}

fn default_reference_edition() -> String {
    "ru.kuliev".to_string()
}

fn default_base_url() -> String {
    "https://api.alquran.cloud/v1".to_string()
}

fn default_request_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_cache_ttl() -> Option<Duration> {
    Some(Duration::from_secs(3600))
}

fn default_user_agent() -> String {
    concat!("tabasaran-quran/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_formula_canonical() -> String {
    "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ".to_string()
}

fn default_formula_prefix_chars() -> usize {
    38
}

fn default_formula_transliteration() -> String {
    "Bismillahir-Rahmanir-Rahim".to_string()
}

fn default_formula_reference() -> String {
    "Во имя Аллаха, Милостивого, Милосердного!".to_string()
}

fn default_max_concurrent_fetches() -> usize {
    8
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_true() -> bool {
    true
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

// Optional Duration serialization helper
mod optional_duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match duration {
            Some(d) => serializer.serialize_some(&d.as_secs()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = Option::<u64>::deserialize(deserializer)?;
        Ok(secs.map(Duration::from_secs))
    }
}
