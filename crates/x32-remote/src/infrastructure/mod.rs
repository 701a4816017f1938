//! Infrastructure layer for the remote.
//!
//! Contains OS-facing adapters: the UDP socket the console listens on and
//! file-system storage for the TOML configuration.
//!
//! **Dependency rule**: this layer may depend on `application` and `x32_core`,
//! but MUST NOT be imported by the `application` layer.

pub mod network;
pub mod storage;
