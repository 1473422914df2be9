#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskdeck::libs::config::{Config, ServerConfig};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this binary share the HOME environment variable
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn read_without_file_returns_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.server.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn save_and_read_roundtrip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            server: Some(ServerConfig {
                api_url: "https://tasks.example.com".to_string(),
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.server().unwrap().api_url, "https://tasks.example.com");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn missing_server_module_is_an_error(_ctx: &mut ConfigTestContext) {
        let config = Config::default();
        assert!(config.server().is_err());
    }
}
