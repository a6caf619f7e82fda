use ihub_domain::capabilities::Capabilities;
use ihub_domain::config::ApiConfig;
use ihub_domain::registry::{FeatureSlice, InitializedSlice};
use ihub_kernel::server::state::ApiState;
use std::any::Any;

#[derive(Debug)]
struct DummySlice {
    label: &'static str,
}

impl FeatureSlice for DummySlice {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[test]
fn state_requires_config() {
    assert!(ApiState::builder().build().is_err());
}

#[test]
fn state_registers_and_resolves_slices() {
    let state = ApiState::builder()
        .config(ApiConfig::default())
        .capabilities(Capabilities { raster: true })
        .register_slice(InitializedSlice::new(DummySlice { label: "catalog" }))
        .build()
        .expect("state build");

    assert!(state.capabilities.raster);
    assert_eq!(state.try_get_slice::<DummySlice>().expect("slice").label, "catalog");
}

#[test]
fn missing_slice_is_an_error() {
    let state = ApiState::builder().config(ApiConfig::default()).build().expect("state build");

    assert!(state.try_get_slice::<DummySlice>().is_err());
}
