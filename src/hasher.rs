//! Hasher selection for [`Set`](crate::Set).
//!
//! By default every set hashes its elements with the standard library's
//! `RandomState` (SipHash), which resists HashDoS. Two cargo features swap in
//! faster, non-resistant hashers for trusted-input workloads:
//!
//! - `fxhash`: [`rustc_hash::FxBuildHasher`]
//! - `ahash`: [`ahash::RandomState`]
//!
//! When both are enabled, `fxhash` wins.

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(feature = "fxhash")]
pub type SetHasher = rustc_hash::FxBuildHasher;

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type SetHasher = ahash::RandomState;

/// The `BuildHasher` used by every [`Set`](crate::Set).
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type SetHasher = std::collections::hash_map::RandomState;
