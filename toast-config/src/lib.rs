use config::{builder::DefaultState, Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

mod demo;
pub use demo::*;

pub use toast_queue::ToastSettings;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[allow(unused)]
pub struct Configuration {
    pub toast: ToastSettings,
    pub demo: DemoConfig,
}

impl Configuration {
    /// Defaults, overridden by `config.toml` and then `devel.toml` when present
    pub fn load() -> Result<Self, ConfigError> {
        Self::layered(|conf| conf
            .add_source(File::with_name("config.toml").required(false))
            .add_source(File::with_name("devel.toml").required(false)))
    }

    /// Defaults, overridden by the given TOML document
    pub fn from_toml(toml: &str) -> Result<Self, ConfigError> {
        Self::layered(|conf| conf.add_source(File::from_str(toml, FileFormat::Toml)))
    }

    fn layered<F>(sources: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState>,
    {
        let defaults = Config::try_from(&Configuration::default())?;

        let conf = sources(Config::builder().add_source(defaults))
            .build()?;

        conf.try_deserialize()
    }
}
