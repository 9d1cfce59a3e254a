use crate::models::{error::Configuration, Locations};
use color_eyre::Result;
use config::{Config, ConfigError, Environment};
use secrecy::SecretString;
use std::env;
use tap::Tap;
use tracing::{debug, info, warn};

const PREFIX: &str = "tgmbk";

#[tracing::instrument]
pub fn new_config() -> Result<Application> {
    let s = Config::builder()
        .add_source(Environment::with_prefix(PREFIX))
        .set_override_option("port", env::var("PORT").ok())?
        .build()?;

    debug!("Reading bot token");
    let token: SecretString = required(&s, "token")?.into();
    info!("Read bot token");

    let locations = required(&s, "locations")?
        .parse::<Locations>()?
        .tap_dbg(|locations| debug!(?locations));
    info!(count = locations.len(), "Read locations");

    // Everything else is optional and falls back to the defaults
    let base: tgmbk_cfg::Config = s.try_deserialize()?;

    Ok(Application::new(base, token, locations))
}

fn required(settings: &Config, key: &str) -> Result<String, Configuration> {
    match settings.get_string(key) {
        Ok(value) if !value.is_empty() => Ok(value),
        Ok(_) | Err(ConfigError::NotFound(_)) => Err(Configuration::Missing {
            variable: format!("{PREFIX}_{key}").to_uppercase(),
        }),
        Err(source) => Err(source.into()),
    }
}

#[derive(Clone, Debug)]
pub struct Application {
    pub base: tgmbk_cfg::Config,
    pub token: SecretString,
    pub locations: Locations,
}

impl Application {
    #[must_use]
    pub fn new(base: tgmbk_cfg::Config, token: SecretString, locations: Locations) -> Self {
        if locations.len() != Locations::EXPECTED_LEN {
            warn!(
                count = locations.len(),
                expected = Locations::EXPECTED_LEN,
                "Unexpected number of locations"
            );
        }
        Self {
            base,
            token,
            locations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use test_case::test_case;

    fn settings(key: &str, value: &str) -> Config {
        Config::builder().set_override(key, value).unwrap().build().unwrap()
    }

    #[test]
    fn required_present() {
        let s = settings("token", "123:abc");
        assert_eq!(required(&s, "token").unwrap(), "123:abc");
    }

    #[test_case("token", "" ; "when empty")]
    #[test_case("other", "123:abc" ; "when absent")]
    fn required_missing(key: &str, value: &str) {
        let s = settings(key, value);
        let err = required(&s, "token").unwrap_err();
        assert!(matches!(
            err,
            Configuration::Missing { ref variable } if variable == "TGMBK_TOKEN"
        ));
    }

    // The only test touching the process environment, so cases run in sequence.
    #[test]
    fn new_config_from_environment() {
        env::set_var("TGMBK_TOKEN", "123:abc");
        env::set_var("TGMBK_LOCATIONS", " A,B , C,D,E,F,G");
        env::set_var("TGMBK_TIMEZONE", "Europe/Berlin");
        env::set_var("PORT", "9999");

        let app = new_config().unwrap();
        assert_eq!(app.token.expose_secret(), "123:abc");
        assert_eq!(app.locations.len(), 7);
        assert_eq!(app.locations.get(0), Some(" A"));
        assert_eq!(app.locations.get(1), Some("B "));
        assert_eq!(app.base.port, 9999);
        assert_eq!(app.base.timezone, "Europe/Berlin");
        assert_eq!(app.base.api_url, "https://api.telegram.org");

        env::remove_var("PORT");
        let app = new_config().unwrap();
        assert_eq!(app.base.port, 8080);

        env::set_var("PORT", "");
        assert!(new_config().is_err());
        env::remove_var("PORT");

        env::set_var("TGMBK_TOKEN", "");
        let err = new_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "required environment variable TGMBK_TOKEN is missing or empty"
        );
        assert!(matches!(
            err.downcast_ref::<Configuration>(),
            Some(Configuration::Missing { .. })
        ));

        env::set_var("TGMBK_TOKEN", "123:abc");
        env::remove_var("TGMBK_LOCATIONS");
        let err = new_config().unwrap_err();
        assert_eq!(
            err.to_string(),
            "required environment variable TGMBK_LOCATIONS is missing or empty"
        );

        for key in ["TGMBK_TOKEN", "TGMBK_TIMEZONE"] {
            env::remove_var(key);
        }
    }

    #[test]
    fn locations_kept_verbatim() {
        let s = settings("locations", "L0, L1,L2");
        let locations: Locations = required(&s, "locations").unwrap().parse().unwrap();
        assert_eq!(locations.get(1), Some(" L1"));
    }
}
