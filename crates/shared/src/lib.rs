//! Wire and domain types shared by the digest core and its front ends.

pub mod domain;
pub mod error;
pub mod protocol;
