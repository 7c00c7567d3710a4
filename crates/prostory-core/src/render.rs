// ── Render pass ──
//
// A render pass is one server render or one client hydration. It owns the
// coalescing cache for its lifetime, decides which descriptors run in its
// phase, and turns fetch outcomes into `AsyncData` for page code.

use std::fmt;

use prostory_api::Collection;
use serde::de::DeserializeOwned;
use serde_json::Value;
use strum::Display;
use tracing::{debug, warn};

use crate::cache::FetchCache;
use crate::error::FetchError;
use crate::gateway::Gateway;
use crate::hooks::ErrorHooks;

// ── Phase and mode ──────────────────────────────────────────────────

/// Where a render pass executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Phase {
    Server,
    Client,
}

/// Whether a fetch runs during server rendering or waits for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FetchMode {
    #[default]
    Server,
    /// Skipped on the server; the page renders the default first.
    Deferred,
}

impl FetchMode {
    /// Map a `runOnServer`-style flag to a mode.
    pub fn from_run_on_server(run_on_server: bool) -> Self {
        if run_on_server { Self::Server } else { Self::Deferred }
    }

    pub fn runs_in(self, phase: Phase) -> bool {
        match self {
            Self::Server => true,
            Self::Deferred => phase == Phase::Client,
        }
    }
}

// ── Untyped options ─────────────────────────────────────────────────

/// Options for [`RenderPass::get`].
#[derive(Debug, Clone, PartialEq)]
pub struct FetchOptions {
    pub key: String,
    /// Returned when the fetch does not run in this phase.
    pub default: Value,
    pub mode: FetchMode,
}

impl FetchOptions {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: Value::Null,
            mode: FetchMode::Server,
        }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = default;
        self
    }

    pub fn deferred(mut self) -> Self {
        self.mode = FetchMode::Deferred;
        self
    }
}

// ── Typed descriptors ───────────────────────────────────────────────

type Decoder<T> = fn(Value) -> Result<T, prostory_api::Error>;

/// A typed, keyed backend read with its default value.
pub struct FetchDescriptor<T> {
    pub path: String,
    pub key: String,
    pub default: fn() -> T,
    pub mode: FetchMode,
    decode: Decoder<T>,
}

impl<T> fmt::Debug for FetchDescriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FetchDescriptor")
            .field("path", &self.path)
            .field("key", &self.key)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}

impl<T> FetchDescriptor<T> {
    pub fn new(
        path: impl Into<String>,
        key: impl Into<String>,
        default: fn() -> T,
        decode: Decoder<T>,
    ) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
            default,
            mode: FetchMode::Server,
            decode,
        }
    }

    pub fn with_mode(mut self, mode: FetchMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn deferred(self) -> Self {
        self.with_mode(FetchMode::Deferred)
    }

    /// Decode a raw response into `T`.
    pub fn decode(&self, raw: Value) -> Result<T, FetchError> {
        (self.decode)(raw).map_err(FetchError::from)
    }
}

impl<I: DeserializeOwned> FetchDescriptor<Vec<I>> {
    /// A collection read: any response shape normalizes to a list,
    /// defaulting to empty.
    pub fn list(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(path, key, Vec::new, |raw| Collection::from(raw).decode())
    }
}

impl<I: DeserializeOwned> FetchDescriptor<Option<I>> {
    /// A single-record read, defaulting to `None`.
    pub fn item(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(path, key, || None, decode_value)
    }
}

impl<T: DeserializeOwned + Default> FetchDescriptor<T> {
    /// An object read whose `null` response means `T::default()`.
    pub fn object(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::new(path, key, T::default, |raw| {
            if raw.is_null() {
                Ok(T::default())
            } else {
                decode_value(raw)
            }
        })
    }
}

fn decode_value<T: DeserializeOwned>(raw: Value) -> Result<T, prostory_api::Error> {
    T::deserialize(&raw).map_err(|e| prostory_api::Error::Deserialization {
        message: e.to_string(),
        body: raw.to_string(),
    })
}

// ── Results ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    /// Not run in this phase; `data` is the default.
    Idle,
    Success,
    /// Failed; `data` is the default and `error` is set.
    Error,
}

/// Outcome of a descriptor as page code sees it: data is always present.
#[derive(Debug, Clone, PartialEq)]
pub struct AsyncData<T> {
    pub key: String,
    pub data: T,
    pub error: Option<FetchError>,
    pub status: FetchStatus,
}

impl<T> AsyncData<T> {
    fn idle(key: String, data: T) -> Self {
        Self {
            key,
            data,
            error: None,
            status: FetchStatus::Idle,
        }
    }

    fn success(key: String, data: T) -> Self {
        Self {
            key,
            data,
            error: None,
            status: FetchStatus::Success,
        }
    }

    fn failed(key: String, data: T, error: FetchError) -> Self {
        Self {
            key,
            data,
            error: Some(error),
            status: FetchStatus::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == FetchStatus::Success
    }

    pub fn is_idle(&self) -> bool {
        self.status == FetchStatus::Idle
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncData<U> {
        AsyncData {
            key: self.key,
            data: f(self.data),
            error: self.error,
            status: self.status,
        }
    }

    /// The data on success or idle, the error otherwise.
    pub fn into_result(self) -> Result<T, FetchError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.data),
        }
    }
}

// ── RenderPass ──────────────────────────────────────────────────────

/// One server render or client hydration, with its own coalescing cache.
#[derive(Debug)]
pub struct RenderPass {
    gateway: Gateway,
    phase: Phase,
    cache: FetchCache,
    hooks: ErrorHooks,
}

impl RenderPass {
    /// A fresh pass with an empty cache and the logging hook installed.
    pub fn new(gateway: Gateway, phase: Phase) -> Self {
        Self {
            gateway,
            phase,
            cache: FetchCache::new(),
            hooks: ErrorHooks::logging(),
        }
    }

    pub fn server(gateway: Gateway) -> Self {
        Self::new(gateway, Phase::Server)
    }

    pub fn client(gateway: Gateway) -> Self {
        Self::new(gateway, Phase::Client)
    }

    pub fn with_hooks(mut self, hooks: ErrorHooks) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn gateway(&self) -> &Gateway {
        &self.gateway
    }

    pub fn cache(&self) -> &FetchCache {
        &self.cache
    }

    pub fn hooks(&self) -> &ErrorHooks {
        &self.hooks
    }

    /// Untyped read of `path` under `options.key`.
    ///
    /// Returns `options.default` without touching the network when the
    /// mode does not run in this phase.
    pub async fn get(&self, path: &str, options: &FetchOptions) -> Result<Value, FetchError> {
        if !options.mode.runs_in(self.phase) {
            debug!(key = %options.key, phase = %self.phase, "fetch deferred");
            return Ok(options.default.clone());
        }
        self.fetch(path, &options.key).await
    }

    /// Run a typed descriptor.
    ///
    /// Never fails: errors are carried in the returned [`AsyncData`]
    /// alongside the descriptor's default.
    pub async fn use_fetch<T>(&self, descriptor: FetchDescriptor<T>) -> AsyncData<T> {
        let FetchDescriptor {
            path,
            key,
            default,
            mode,
            decode,
        } = descriptor;

        if !mode.runs_in(self.phase) {
            debug!(key = %key, phase = %self.phase, "fetch deferred");
            return AsyncData::idle(key, default());
        }

        let outcome = self.fetch(&path, &key).await.and_then(|raw| {
            decode(raw).map_err(|e| {
                let first = self.cache.claim_decode_report(&key);
                if first {
                    warn!(key = %key, error = %e, "response does not match the expected shape");
                }
                let err = FetchError::from(e);
                if first {
                    self.hooks.render_error(&err, &format!("decode {key}"));
                }
                err
            })
        });

        match outcome {
            Ok(data) => AsyncData::success(key, data),
            Err(err) => AsyncData::failed(key, default(), err),
        }
    }

    async fn fetch(&self, path: &str, key: &str) -> Result<Value, FetchError> {
        self.cache
            .get_or_fetch(key, || async move {
                let outcome = self.gateway.get(path).await;
                if let Err(err) = &outcome {
                    self.hooks.render_error(err, &format!("fetch {key}"));
                }
                outcome
            })
            .await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prostory_api::models::HeroSection;
    use serde_json::json;

    #[test]
    fn modes_by_phase() {
        assert!(FetchMode::Server.runs_in(Phase::Server));
        assert!(FetchMode::Server.runs_in(Phase::Client));
        assert!(!FetchMode::Deferred.runs_in(Phase::Server));
        assert!(FetchMode::Deferred.runs_in(Phase::Client));
        assert_eq!(FetchMode::from_run_on_server(false), FetchMode::Deferred);
    }

    #[test]
    fn list_descriptor_normalizes_every_shape() {
        let descriptor = FetchDescriptor::<Vec<u32>>::list("/x/", "x");
        assert_eq!(descriptor.decode(json!(null)).unwrap(), Vec::<u32>::new());
        assert_eq!(descriptor.decode(json!([1, 2])).unwrap(), vec![1, 2]);
        assert_eq!(descriptor.decode(json!({ "results": [3] })).unwrap(), vec![3]);
        assert!((descriptor.default)().is_empty());
    }

    #[test]
    fn item_descriptor_defaults_to_none() {
        let descriptor = FetchDescriptor::<Option<u32>>::item("/x/1/", "x-1");
        assert_eq!((descriptor.default)(), None);
        assert_eq!(descriptor.decode(json!(null)).unwrap(), None);
        assert_eq!(descriptor.decode(json!(7)).unwrap(), Some(7));
    }

    #[test]
    fn object_descriptor_treats_null_as_default() {
        let descriptor = FetchDescriptor::<HeroSection>::object("/hero/", "hero");
        assert!(descriptor.decode(json!(null)).unwrap().images.is_empty());
        assert!((descriptor.default)().images.is_empty());
    }

    #[test]
    fn decode_errors_are_decode_kind() {
        let descriptor = FetchDescriptor::<Option<u32>>::item("/x/1/", "x-1");
        let err = descriptor.decode(json!("seven")).unwrap_err();
        assert_eq!(err.kind, crate::error::FetchErrorKind::Decode);
    }

    #[test]
    fn async_data_map_keeps_status() {
        let data = AsyncData::success("news".to_owned(), vec![1, 2, 3]).map(|v| v.len());
        assert_eq!(data.data, 3);
        assert!(data.is_success());
        assert_eq!(data.into_result().unwrap(), 3);

        let failed = AsyncData::failed("news".to_owned(), 0, FetchError::network());
        assert_eq!(failed.status, FetchStatus::Error);
        assert!(failed.into_result().is_err());
    }
}
