use super::Config;

impl Config {
    pub fn apply_env_overrides(&mut self) {
        if let Ok(user) = std::env::var("LINKBOT_BITLY_USER")
            && !user.is_empty()
        {
            self.shortener.user = user;
        }

        if let Ok(key) = std::env::var("LINKBOT_BITLY_API_KEY")
            && !key.is_empty()
        {
            self.shortener.api_key = key;
        }

        if let Ok(timeout_str) = std::env::var("LINKBOT_TIMEOUT_SECS")
            && let Ok(timeout) = timeout_str.parse::<u64>()
            && timeout > 0
        {
            self.links.timeout_secs = timeout;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_env::{ENV_LOCK, EnvVarGuard};
    use super::*;

    #[test]
    fn bitly_credentials_from_env() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _user = EnvVarGuard::set("LINKBOT_BITLY_USER", "treslek");
        let _key = EnvVarGuard::set("LINKBOT_BITLY_API_KEY", "R_123");

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.shortener.user, "treslek");
        assert_eq!(config.shortener.api_key, "R_123");
        assert!(config.shortener.is_configured());
    }

    #[test]
    fn empty_env_keeps_file_values() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        let _user = EnvVarGuard::set("LINKBOT_BITLY_USER", "");
        let _key = EnvVarGuard::unset("LINKBOT_BITLY_API_KEY");

        let mut config = Config::default();
        config.shortener.user = "from-file".into();
        config.apply_env_overrides();
        assert_eq!(config.shortener.user, "from-file");
    }

    #[test]
    fn timeout_override_ignores_garbage_and_zero() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(std::sync::PoisonError::into_inner);

        let mut config = Config::default();
        {
            let _timeout = EnvVarGuard::set("LINKBOT_TIMEOUT_SECS", "soon");
            config.apply_env_overrides();
            assert_eq!(config.links.timeout_secs, 10);
        }
        {
            let _timeout = EnvVarGuard::set("LINKBOT_TIMEOUT_SECS", "0");
            config.apply_env_overrides();
            assert_eq!(config.links.timeout_secs, 10);
        }
        let _timeout = EnvVarGuard::set("LINKBOT_TIMEOUT_SECS", "5");
        config.apply_env_overrides();
        assert_eq!(config.links.timeout_secs, 5);
    }
}
