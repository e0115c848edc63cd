//! End-to-end packaging runs against a fixture project.

mod helpers;

use std::path::Path;

use distkit_bundler::preamble::{CDN_PREAMBLE, CJS_PREAMBLE, ESM_PREAMBLE};
use distkit_bundler::{
    DistFormat, Error, IssueSeverity, MinifyLevel, PackageOptions, Packager, minify,
};
use helpers::{create_project, read};

const EXPECTED_OUTPUTS: &[&str] = &[
    "npm/tinycolor.js",
    "npm/dist/tinycolor-min.js",
    "tinycolor.js",
    "dist/tinycolor-min.js",
    "npm/cjs/tinycolor.js",
    "npm/cjs/test.js",
    "npm/esm/tinycolor.js",
    "npm/esm/test.js",
    "npm/README.md",
    "npm/LICENSE",
];

fn expected_harness(template: &str) -> String {
    let start = helpers::TEST_JS.find("// TEST_BEGINS_HERE").unwrap();
    let excerpt = &helpers::TEST_JS[start..helpers::TEST_JS.len() - 1];
    template.replacen("// CONTENT_GOES_HERE", excerpt, 1)
}

#[tokio::test]
async fn run_writes_every_output_in_order() {
    let project = create_project();
    let root = project.path();

    let report = Packager::new(PackageOptions::new(root))
        .run()
        .await
        .expect("packaging run");

    let written: Vec<_> = report
        .written
        .iter()
        .map(|f| f.path.strip_prefix(root).unwrap().to_path_buf())
        .collect();
    let expected: Vec<_> = EXPECTED_OUTPUTS.iter().map(|p| Path::new(p).to_path_buf()).collect();
    assert_eq!(written, expected);

    for file in &report.written {
        let on_disk = std::fs::metadata(&file.path).expect("output exists").len();
        assert_eq!(on_disk as usize, file.bytes, "{}", file.path.display());
    }
}

#[tokio::test]
async fn cdn_files_carry_preamble_and_legacy_copies_do_not() {
    let project = create_project();
    let root = project.path();

    Packager::new(PackageOptions::new(root))
        .write_cdn_umd()
        .await
        .expect("cdn step");

    let cdn = read(root, "npm/tinycolor.js");
    let legacy = read(root, "tinycolor.js");
    assert_eq!(cdn, format!("{CDN_PREAMBLE}{legacy}"));
    assert!(legacy.contains("tinycolor"));

    let cdn_min = read(root, "npm/dist/tinycolor-min.js");
    let legacy_min = read(root, "dist/tinycolor-min.js");
    assert_eq!(cdn_min, format!("{CDN_PREAMBLE}{legacy_min}"));
    assert!(legacy_min.len() < legacy.len());
}

#[tokio::test]
async fn minified_bundle_is_valid_script() {
    let project = create_project();
    let root = project.path();

    Packager::new(PackageOptions::new(root))
        .write_cdn_umd()
        .await
        .expect("cdn step");

    let minified = read(root, "dist/tinycolor-min.js");
    // Re-parsing through the minifier fails on invalid syntax.
    minify(&minified, DistFormat::Umd, MinifyLevel::Whitespace).expect("minified output parses");
    assert!(minified.contains("tinycolor"));
    assert!(minified.contains("1.4.2"));
}

#[tokio::test]
async fn no_legacy_skips_root_copies() {
    let project = create_project();
    let root = project.path();

    let written = Packager::new(PackageOptions::new(root).legacy_copies(false))
        .write_cdn_umd()
        .await
        .expect("cdn step");

    assert_eq!(written.len(), 2);
    assert!(!root.join("tinycolor.js").exists());
    assert!(!root.join("dist").exists());
}

#[tokio::test]
async fn cjs_module_is_umd_with_cjs_preamble() {
    let project = create_project();
    let root = project.path();

    Packager::new(PackageOptions::new(root))
        .write_npm_cjs()
        .await
        .expect("cjs step");

    let module = read(root, "npm/cjs/tinycolor.js");
    assert!(module.starts_with(CJS_PREAMBLE));
    assert!(module.contains("module.exports"));

    let harness = read(root, "npm/cjs/test.js");
    assert_eq!(harness, expected_harness(helpers::CJS_TEMPLATE));
    assert!(!harness.contains("// CONTENT_GOES_HERE"));
}

#[tokio::test]
async fn harness_without_marker_pastes_whole_test_file() {
    let project = create_project();
    let root = project.path();
    let source = "const tinycolor = require('./tinycolor.js');\ntest('red', () => {});\n";
    helpers::write(root, "test.js", source);

    Packager::new(PackageOptions::new(root))
        .write_npm_cjs()
        .await
        .expect("cjs step");

    let harness = read(root, "npm/cjs/test.js");
    let expected = helpers::CJS_TEMPLATE.replacen(
        "// CONTENT_GOES_HERE",
        &source[..source.len() - 1],
        1,
    );
    assert_eq!(harness, expected);
    assert!(harness.contains("test('red', () => {});\n"));
}

#[tokio::test]
async fn esm_module_exports_default() {
    let project = create_project();
    let root = project.path();

    Packager::new(PackageOptions::new(root))
        .write_npm_esm()
        .await
        .expect("esm step");

    let module = read(root, "npm/esm/tinycolor.js");
    assert!(module.starts_with(ESM_PREAMBLE));
    assert!(module.contains("export"));
    assert!(!module.contains("module.exports"));

    assert_eq!(
        read(root, "npm/esm/test.js"),
        expected_harness(helpers::ESM_TEMPLATE)
    );
}

#[tokio::test]
async fn custom_name_changes_global_and_paths() {
    let project = create_project();
    let root = project.path();

    Packager::new(
        PackageOptions::new(root)
            .name("chroma")
            .npm_dir("publish")
            .minify(MinifyLevel::None),
    )
    .write_cdn_umd()
    .await
    .expect("cdn step");

    let bundle = read(root, "publish/chroma.js");
    assert!(bundle.contains("chroma"));
    // Without minification both files hold the same code.
    assert_eq!(bundle, read(root, "publish/dist/chroma-min.js"));
}

#[tokio::test]
async fn missing_entry_aborts_run() {
    let project = create_project();
    let root = project.path();
    std::fs::remove_file(root.join("mod.js")).unwrap();

    let err = Packager::new(PackageOptions::new(root))
        .run()
        .await
        .expect_err("run must fail");

    assert!(matches!(err, Error::Bundler(_)), "got {err:?}");
    assert!(!root.join("npm/tinycolor.js").exists());
}

#[tokio::test]
async fn missing_template_keeps_earlier_outputs() {
    let project = create_project();
    let root = project.path();
    std::fs::remove_file(root.join("npm/esm/test_template.js")).unwrap();

    let err = Packager::new(PackageOptions::new(root))
        .run()
        .await
        .expect_err("run must fail");

    assert!(matches!(err, Error::InputNotFound(_)), "got {err:?}");
    assert!(root.join("npm/cjs/test.js").exists());
    assert!(root.join("npm/esm/tinycolor.js").exists());
    assert!(!root.join("npm/esm/test.js").exists());
    assert!(!root.join("npm/README.md").exists());
}

#[test]
fn check_passes_on_complete_project() {
    let project = create_project();
    assert!(Packager::new(PackageOptions::new(project.path())).check().is_empty());
}

#[test]
fn check_reports_unreadable_test_source_as_error_not_missing() {
    let project = create_project();
    let root = project.path();
    std::fs::write(root.join("test.js"), [0xff, 0xfe, 0x00]).unwrap();

    let issues = Packager::new(PackageOptions::new(root)).check();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].severity, IssueSeverity::Error);
    assert!(!issues[0].message.contains("not found"), "{}", issues[0].message);
    assert!(issues[0].message.starts_with("test source could not be read"));
}

#[test]
fn check_reports_missing_test_source() {
    let project = create_project();
    let root = project.path();
    std::fs::remove_file(root.join("test.js")).unwrap();

    let issues = Packager::new(PackageOptions::new(root)).check();
    assert_eq!(issues.len(), 1);
    assert_eq!(issues[0].message, "test source not found");
}
