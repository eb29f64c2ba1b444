pub mod digest;

pub use digest::{DigestConfig, SecondarySource};
