#[test]
fn ectl_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/ectl_error_pass.rs");
}
