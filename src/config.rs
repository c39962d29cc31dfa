use serde::Deserialize;
use strum_macros::{AsRefStr, EnumString};
use thiserror::Error;

/**
 * Options accepted by the plugin, e.g. `["bind_methods", { "production": true }]`.
 */
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
  /**
   * Run the transform even when the host reports a production build.
   */
  #[serde(default)]
  pub production: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("malformed bind_methods config: {0}")]
  Malformed(#[from] serde_json::Error),
}

impl Config {
  pub fn from_json(raw: &str) -> Result<Config, ConfigError> {
    // hosts pass an empty string when the plugin is listed without options
    if raw.trim().is_empty() {
      return Ok(Config::default());
    }
    Ok(serde_json::from_str(raw)?)
  }
}

/**
 * The kind of build the host is running, as reported by `NODE_ENV` or the swc `env` context.
 */
#[derive(Debug, Clone, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum BuildEnv {
  Production,
  Development,
  Test,
  #[strum(disabled)]
  Other(String),
  #[strum(disabled)]
  Unset,
}

impl BuildEnv {
  pub fn from_name(name: Option<&str>) -> BuildEnv {
    match name {
      None | Some("") => BuildEnv::Unset,
      Some(name) => name
        .parse()
        .unwrap_or_else(|_| BuildEnv::Other(name.to_owned())),
    }
  }

  /**
   * Reads `NODE_ENV`. Native hosts call this once at startup.
   */
  pub fn from_process() -> BuildEnv {
    BuildEnv::from_name(std::env::var("NODE_ENV").ok().as_deref())
  }

  pub fn is_production(&self) -> bool {
    *self == BuildEnv::Production
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
  Enabled,
  Disabled,
}

impl Activation {
  /**
   * Production builds only run the transform when the config opts in. Every other build always runs it.
   */
  pub fn resolve(env: &BuildEnv, config: &Config) -> Activation {
    if env.is_production() && !config.production {
      Activation::Disabled
    } else {
      Activation::Enabled
    }
  }

  pub fn is_enabled(self) -> bool {
    self == Activation::Enabled
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_production_opt_in() {
    let config = Config::from_json(r#"{ "production": true }"#).unwrap();
    assert!(config.production);
  }

  #[test]
  fn empty_config_is_default() {
    assert_eq!(Config::from_json("").unwrap(), Config::default());
    assert_eq!(Config::from_json("{}").unwrap(), Config::default());
  }

  #[test]
  fn rejects_unknown_keys() {
    let err = Config::from_json(r#"{ "prod": true }"#).unwrap_err();
    assert!(err.to_string().starts_with("malformed bind_methods config"));
  }

  #[test]
  fn parses_env_names() {
    assert_eq!(BuildEnv::from_name(Some("production")), BuildEnv::Production);
    assert_eq!(
      BuildEnv::from_name(Some(" Production ")),
      BuildEnv::Other(" Production ".to_owned())
    );
    assert_eq!(BuildEnv::from_name(Some("test")), BuildEnv::Test);
    assert_eq!(
      BuildEnv::from_name(Some("staging")),
      BuildEnv::Other("staging".to_owned())
    );
    assert_eq!(BuildEnv::from_name(Some("")), BuildEnv::Unset);
    assert_eq!(BuildEnv::from_name(None), BuildEnv::Unset);
  }

  #[test]
  fn reads_node_env() {
    std::env::set_var("NODE_ENV", "production");
    assert_eq!(BuildEnv::from_process(), BuildEnv::Production);

    std::env::remove_var("NODE_ENV");
    assert_eq!(BuildEnv::from_process(), BuildEnv::Unset);
  }

  #[test]
  fn production_requires_opt_in() {
    let opted_in = Config { production: true };
    let default = Config::default();

    assert_eq!(
      Activation::resolve(&BuildEnv::Production, &default),
      Activation::Disabled
    );
    assert_eq!(
      Activation::resolve(&BuildEnv::Production, &opted_in),
      Activation::Enabled
    );
  }

  #[test]
  fn non_production_always_runs() {
    let default = Config::default();

    for env in [
      BuildEnv::Development,
      BuildEnv::Test,
      BuildEnv::Unset,
      BuildEnv::Other("staging".to_owned()),
    ] {
      assert!(Activation::resolve(&env, &default).is_enabled());
    }
  }
}
