//! Per-particle forces acting on the pointer displacement.
pub mod pointer;
pub mod spring;
