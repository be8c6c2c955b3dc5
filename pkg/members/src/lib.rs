//! Project membership core.
//!
//! Reconciles the member roster of a project against the live
//! service-account objects of its namespace, mutates the roster via
//! read-modify-merge-patch against the external declarative store, and
//! derives bootstrap kubeconfigs for project-managed service accounts.

pub mod error;
pub mod kubeconfig;
pub mod lifecycle;
pub mod mutator;
pub mod resolver;
pub mod roles;
pub mod service;
pub mod store;

pub use error::MemberError;
pub use service::MemberService;
