//! Machine learning components.
//!
//! The only model shipped today is the incremental frequency-voting
//! classifier in [`classifier`].

pub mod classifier;
