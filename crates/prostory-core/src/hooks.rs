// ── Error hooks ──
//
// Application-level error reporting. The render pass reports every failed
// fetch here; the default registry just logs.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use tracing::error;

/// Receives errors raised while building or rendering pages.
pub trait ErrorHook: Send + Sync {
    fn on_app_error(&self, error: &(dyn StdError + 'static));

    /// `info` names the place the error surfaced, e.g. `fetch lodges-all`.
    fn on_render_error(&self, error: &(dyn StdError + 'static), info: &str);
}

/// Logs every error through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHook;

impl ErrorHook for LoggingHook {
    fn on_app_error(&self, err: &(dyn StdError + 'static)) {
        error!(error = %err, "App error");
    }

    fn on_render_error(&self, err: &(dyn StdError + 'static), info: &str) {
        error!(error = %err, info, "Render error");
    }
}

/// Ordered set of hooks, all of which see every error.
#[derive(Clone, Default)]
pub struct ErrorHooks {
    hooks: Vec<Arc<dyn ErrorHook>>,
}

impl fmt::Debug for ErrorHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorHooks")
            .field("hooks", &self.hooks.len())
            .finish()
    }
}

impl ErrorHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding only [`LoggingHook`].
    pub fn logging() -> Self {
        let mut hooks = Self::new();
        hooks.register(LoggingHook);
        hooks
    }

    pub fn register(&mut self, hook: impl ErrorHook + 'static) {
        self.hooks.push(Arc::new(hook));
    }

    pub fn with(mut self, hook: impl ErrorHook + 'static) -> Self {
        self.register(hook);
        self
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn app_error(&self, err: &(dyn StdError + 'static)) {
        for hook in &self.hooks {
            hook.on_app_error(err);
        }
    }

    pub fn render_error(&self, err: &(dyn StdError + 'static), info: &str) {
        for hook in &self.hooks {
            hook.on_render_error(err, info);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;

    use crate::error::{FetchError, FetchErrorKind};

    #[derive(Default)]
    struct Recorder {
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl ErrorHook for Recorder {
        fn on_app_error(&self, err: &(dyn StdError + 'static)) {
            self.seen.lock().unwrap().push(format!("app: {err}"));
        }

        fn on_render_error(&self, err: &(dyn StdError + 'static), info: &str) {
            self.seen.lock().unwrap().push(format!("{info}: {err}"));
        }
    }

    #[test]
    fn every_hook_sees_every_error() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let hooks = ErrorHooks::logging().with(Recorder { seen: Arc::clone(&seen) });
        assert_eq!(hooks.len(), 2);

        let err = FetchError::new(FetchErrorKind::Http, 404, Some("Не найдено.".into()));
        hooks.render_error(&err, "fetch lodge-9");
        hooks.app_error(&err);

        assert_eq!(
            *seen.lock().unwrap(),
            vec![
                "fetch lodge-9: Не найдено. (HTTP 404)".to_owned(),
                "app: Не найдено. (HTTP 404)".to_owned(),
            ]
        );
    }

    #[test]
    fn empty_registry_is_a_no_op() {
        let hooks = ErrorHooks::new();
        assert!(hooks.is_empty());
        hooks.app_error(&FetchError::network());
    }
}
