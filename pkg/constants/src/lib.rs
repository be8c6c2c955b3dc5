//! Centralized constants for the project membership core.
//!
//! All project-wide constant values live here.
//! Change a value in one place and it applies everywhere.

pub mod kubeconfig;
pub mod rbac;
