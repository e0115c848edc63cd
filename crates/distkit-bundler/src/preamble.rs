//! Comment blocks prepended to generated files.
//!
//! These strings are published alongside the bundles and must stay byte-stable.

/// Prepended to the UMD files served from CDNs.
///
/// Ends with two spaces and no newline.
pub const CDN_PREAMBLE: &str = "// This file is autogenerated.
// It's here at this path for backwards compatibility for links to it
// but the npm package now exports both CJS and ESM.
// See https://github.com/bgrins/TinyColor/ for instructions.
  ";

/// Prepended to the CJS module.
pub const CJS_PREAMBLE: &str = "// This file is autogenerated. It's used to publish CJS to npm.\n";

/// Prepended to the ESM module.
pub const ESM_PREAMBLE: &str = "// This file is autogenerated. It's used to publish ESM to npm.\n";
