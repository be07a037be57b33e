//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the structured logger used by the binary.
//!
//! The compact format hides the module prefix (`with_target(false)`); every
//! gateway and page line carries a `resource` field instead, so lines stay
//! short but filterable.
//!
//! ## What Gets Traced
//!
//! - **Gateways**: startup, each request (`debug`), its outcome (`info`/`warn`)
//!   and shutdown with the number of requests served.
//! - **Pages**: load/mutation dispatch with the page `generation`, arrivals,
//!   rollbacks, and stale completions that were dropped.
//! - **Typed clients**: an `instrument` span per call.
//!
//! ## Usage
//!
//! ```bash
//! # Outcomes only
//! RUST_LOG=info cargo run -p front-desk
//!
//! # Payloads and dispatch details
//! RUST_LOG=debug cargo run -p front-desk
//!
//! # Just the framework
//! RUST_LOG=page_framework=debug cargo run -p front-desk
//! ```
//!
//! With `RUST_LOG=info` a first page load looks like:
//!
//! ```text
//! INFO Gateway started resource="/api/reservas"
//! INFO Listed resource="/api/reservas" count=12
//! INFO Loaded resource="/api/reservas" generation=1 count=12
//! INFO Lookup arrived resource="/api/reservas" source="/api/clientes" generation=1
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
