#![allow(clippy::useless_conversion)] // Triggered by PyO3 #[pyfunction] wrapper expansion.

include!("api/bindings/shared.rs");
include!("api/bindings/decode.rs");
include!("api/bindings/utils.rs");
include!("api/bindings/register.rs");
