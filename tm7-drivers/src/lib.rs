//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in tm7-core:
//!
//! - Periodic timer over any millisecond clock (embassy-time optional)
//! - Buffered 7-segment driver on top of a wire-level segment bus

#![no_std]
#![deny(unsafe_code)]

pub mod segment;
pub mod timer;
