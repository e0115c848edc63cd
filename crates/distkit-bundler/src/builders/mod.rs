//! Bundle generation and minification.
//!
//! A [`BundleInput`] describes the library once (entry, working directory,
//! global name); each call to [`BundleInput::generate`] serializes it into one
//! [`DistFormat`].
//!
//! # Examples
//!
//! ```no_run
//! use distkit_bundler::{BundleInput, DistFormat};
//!
//! # async fn example() -> distkit_bundler::Result<()> {
//! let input = BundleInput::new("mod.js").cwd("./tinycolor").name("tinycolor");
//!
//! let umd = input.generate(DistFormat::Umd).await?;
//! let esm = input.generate(DistFormat::Esm).await?;
//! assert!(esm.code.contains("export"));
//! # let _ = umd;
//! # Ok(())
//! # }
//! ```

pub(crate) mod executor;
mod format;
mod input;
mod minify;

pub use format::DistFormat;
pub use input::{BundleInput, GeneratedCode};
pub use minify::{MinifyLevel, minify};
