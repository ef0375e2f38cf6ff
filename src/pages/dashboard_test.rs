use super::*;

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Generate Summary");
    assert_eq!(submit_label(true), "Generating Summary...");
}
