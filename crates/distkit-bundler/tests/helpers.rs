//! Shared fixtures for distkit-bundler integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

pub const MOD_JS: &str = r#"import { brightness } from './src/brightness.js';

function tinycolor(color) {
  return {
    color,
    isDark() {
      return brightness(color) < 128;
    },
  };
}

tinycolor.version = '1.4.2';

export default tinycolor;
"#;

pub const BRIGHTNESS_JS: &str = r#"const CHANNELS = { black: [0, 0, 0], white: [255, 255, 255] };

export function brightness(name) {
  const [r, g, b] = CHANNELS[name] || [0, 0, 0];
  return (r * 299 + g * 587 + b * 114) / 1000;
}
"#;

pub const TEST_JS: &str = r#"import { assert } from 'node:assert';
import tinycolor from './mod.js';
// TEST_BEGINS_HERE
test('black is dark', () => {
  assert.ok(tinycolor('black').isDark());
});
"#;

pub const CJS_TEMPLATE: &str = r#"const tinycolor = require('./tinycolor.js');
const { test } = require('node:test');
const assert = require('node:assert');
// CONTENT_GOES_HERE
"#;

pub const ESM_TEMPLATE: &str = r#"import tinycolor from './tinycolor.js';
import { test } from 'node:test';
import assert from 'node:assert';
// CONTENT_GOES_HERE
"#;

/// A project with every input a packaging run reads.
pub fn create_project() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    let root = dir.path();

    write(root, "mod.js", MOD_JS);
    write(root, "src/brightness.js", BRIGHTNESS_JS);
    write(root, "test.js", TEST_JS);
    write(root, "npm/cjs/test_template.js", CJS_TEMPLATE);
    write(root, "npm/esm/test_template.js", ESM_TEMPLATE);
    write(root, "README.md", "# tinycolor\n");
    write(root, "LICENSE", "MIT License\n");

    dir
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, content).expect("write fixture");
}

pub fn read(root: &Path, relative: &str) -> String {
    fs::read_to_string(root.join(relative))
        .unwrap_or_else(|e| panic!("failed to read {relative}: {e}"))
}
