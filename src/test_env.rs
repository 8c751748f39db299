//! Serialized environment overrides for config tests.

use std::sync::Mutex;

static ENV_MUTEX: Mutex<()> = Mutex::new(());

const ISOLATED_VARS: &[&str] = &["XDG_CONFIG_HOME", "HOME"];

/// Environment variable state to restore after a test
struct EnvState {
    saved: Vec<(String, Option<String>)>,
}

impl EnvState {
    fn capture(keys: impl IntoIterator<Item = String>) -> Self {
        Self {
            saved: keys
                .into_iter()
                .map(|key| {
                    let value = std::env::var(&key).ok();
                    (key, value)
                })
                .collect(),
        }
    }

    fn restore(self) {
        for (key, value) in self.saved {
            match value {
                Some(value) => std::env::set_var(&key, value),
                None => std::env::remove_var(&key),
            }
        }
    }
}

/// Run `f` with every `TAGO_*` variable cleared, `XDG_CONFIG_HOME` and `HOME`
/// pointed nowhere useful, and `vars` applied on top. Restores afterwards.
pub fn with_env<F, R>(vars: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _guard = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());

    let mut keys: Vec<String> = std::env::vars()
        .map(|(key, _)| key)
        .filter(|key| key.starts_with("TAGO_"))
        .collect();
    keys.extend(ISOLATED_VARS.iter().map(|key| key.to_string()));
    keys.extend(vars.iter().map(|(key, _)| key.to_string()));
    let state = EnvState::capture(keys.clone());

    for key in &keys {
        std::env::remove_var(key);
    }
    std::env::set_var("HOME", "/nonexistent-tago-home");
    for (key, value) in vars {
        match value {
            Some(value) => std::env::set_var(key, value),
            None => std::env::remove_var(key),
        }
    }

    let result = f();
    state.restore();
    result
}
