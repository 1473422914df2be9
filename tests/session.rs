#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use taskdeck::api::TokenProvider;
    use taskdeck::libs::session::SessionStore;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    // Tests in this binary share the HOME environment variable
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct SessionTestContext {
        _guard: MutexGuard<'static, ()>,
        _temp_dir: TempDir,
    }

    impl TestContext for SessionTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            SessionTestContext {
                _guard: guard,
                _temp_dir: temp_dir,
            }
        }
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn token_is_absent_before_login(_ctx: &mut SessionTestContext) {
        let store = SessionStore::new().unwrap();
        assert_eq!(store.token(), None);
        assert_eq!(store.session(), None);
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn saved_token_is_returned_and_trimmed(_ctx: &mut SessionTestContext) {
        let store = SessionStore::new().unwrap();
        store.save("  jwt-token-value \n").unwrap();
        assert_eq!(store.token().as_deref(), Some("jwt-token-value"));
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn clear_removes_the_session(_ctx: &mut SessionTestContext) {
        let store = SessionStore::new().unwrap();
        store.save("jwt-token-value").unwrap();
        store.clear().unwrap();
        assert_eq!(store.session(), None);

        // Clearing again is not an error
        store.clear().unwrap();
    }

    #[test_context(SessionTestContext)]
    #[test]
    fn blank_token_file_means_no_session(_ctx: &mut SessionTestContext) {
        let store = SessionStore::new().unwrap();
        store.save("   ").unwrap();
        assert_eq!(store.session(), None);
    }

    #[test_context(SessionTestContext)]
    #[cfg(unix)]
    #[test]
    fn unusable_storage_location_is_an_error_not_a_missing_session(ctx: &mut SessionTestContext) {
        // Point HOME below a regular file so the data directory cannot be
        // created; construction must fail instead of reporting "no token"
        let blocker = ctx._temp_dir.path().join("blocker");
        std::fs::write(&blocker, b"not a directory").unwrap();
        std::env::set_var("HOME", &blocker);

        assert!(SessionStore::new().is_err());
    }
}
