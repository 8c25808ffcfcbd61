// Parse and validate the WGSL sources with naga so a typo fails on the host
// instead of at pipeline creation in the browser.

use naga::valid::{Capabilities, ValidationFlags, Validator};

fn validate(label: &str, src: &str) {
    let module = naga::front::wgsl::parse_str(src)
        .unwrap_or_else(|e| panic!("{label}: {}", e.emit_to_string(src)));
    Validator::new(ValidationFlags::all(), Capabilities::all())
        .validate(&module)
        .unwrap_or_else(|e| panic!("{label}: {e:?}"));
}

#[test]
fn foliage_shader_is_valid() {
    let src = tree_core::foliage_wgsl();
    assert!(!src.contains("{{"), "unfilled placeholder");
    assert!(src.contains("0.8 + seed * 0.4"));
    validate("foliage", &src);
}

#[test]
fn sprite_shader_is_valid() {
    validate("sprite", tree_core::SPRITE_WGSL);
}

#[test]
fn post_shader_is_valid() {
    validate("post", tree_core::POST_WGSL);
}
