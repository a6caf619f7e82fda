use axum::extract::FromRef;
use fxhash::FxHashMap;
use ihub_domain::capabilities::Capabilities;
use ihub_domain::config::ApiConfig;
use ihub_domain::registry::{FeatureSlice, InitializedSlice};
use std::any::TypeId;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ApiStateError {
    #[error("state validation error: {0}")]
    Validation(Cow<'static, str>),
    #[error("state missing feature slice: {0}")]
    MissingSlice(Cow<'static, str>),
}

#[derive(Debug)]
pub struct ApiStateInner {
    pub config: ApiConfig,
    pub capabilities: Capabilities,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

/// Shared application state: configuration, compiled-in capabilities, and
/// the registry of initialized feature slices.
#[derive(Debug, Clone)]
pub struct ApiState {
    inner: Arc<ApiStateInner>,
}

impl ApiState {
    #[must_use]
    pub fn builder() -> ApiStateBuilder {
        ApiStateBuilder::default()
    }

    #[must_use]
    pub fn get_slice<T: FeatureSlice>(&self) -> Option<&T> {
        self.inner
            .slices
            .get(&TypeId::of::<T>())
            .and_then(|initialized| initialized.state.as_any().downcast_ref::<T>())
    }

    /// Returns a reference to the slice if it is registered.
    ///
    /// # Errors
    /// Returns an error if the slice is not registered.
    pub fn try_get_slice<T: FeatureSlice>(&self) -> Result<&T, ApiStateError> {
        self.get_slice::<T>()
            .ok_or_else(|| ApiStateError::MissingSlice(std::any::type_name::<T>().into()))
    }
}

impl Deref for ApiState {
    type Target = ApiStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<ApiState> for ApiConfig {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<ApiState> for Capabilities {
    fn from_ref(state: &ApiState) -> Self {
        state.inner.capabilities
    }
}

#[derive(Debug, Default)]
pub struct ApiStateBuilder {
    config: Option<ApiConfig>,
    capabilities: Capabilities,
    slices: FxHashMap<TypeId, InitializedSlice>,
}

impl ApiStateBuilder {
    #[must_use]
    pub fn config(mut self, config: ApiConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub const fn capabilities(mut self, capabilities: Capabilities) -> Self {
        self.capabilities = capabilities;
        self
    }

    #[must_use]
    pub fn register_slice(mut self, slice: InitializedSlice) -> Self {
        self.slices.insert(slice.id, slice);
        self
    }

    /// Registers multiple slices at once.
    #[must_use]
    pub fn register_slices<I>(mut self, slices: I) -> Self
    where
        I: IntoIterator<Item = InitializedSlice>,
    {
        for slice in slices {
            self.slices.insert(slice.id, slice);
        }
        self
    }

    /// Finalizes the state.
    ///
    /// # Errors
    /// Returns an error if no configuration was provided.
    pub fn build(self) -> Result<ApiState, ApiStateError> {
        let config =
            self.config.ok_or_else(|| ApiStateError::Validation("ApiConfig not provided".into()))?;

        Ok(ApiState {
            inner: Arc::new(ApiStateInner {
                config,
                capabilities: self.capabilities,
                slices: self.slices,
            }),
        })
    }
}
