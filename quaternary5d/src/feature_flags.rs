//! Information about the available feature flags
//!
//! # "std"
//!
//! **Enabled by default**
//!
//! Links against the standard library, and implements [std::error::Error] for
//! [crate::Error]. Without it the crate is `no_std` and only needs `alloc`.
//!
//! Example:
//! ```toml
//! quaternary5d = { version = "...", default-features = false }
//! ```
//!
//! # "shape-asserts"
//!
//! Makes [crate::apply::quaternary5d] run [crate::apply::validate5d] before
//! traversing, and panic with the mismatch if the arrays do not conform to the
//! shape. This only happens when `debug_assertions` are on, so release builds
//! keep the unchecked behavior.
//!
//! Example:
//! ```toml
//! quaternary5d = { version = "...", features = ["shape-asserts"] }
//! ```

/// Whether [crate::apply::quaternary5d] validates shapes before traversing.
/// Configure with crate features.
pub const SHAPE_ASSERTS: bool = cfg!(all(feature = "shape-asserts", debug_assertions));
