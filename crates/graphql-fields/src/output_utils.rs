pub(crate) const RED_X: &str = "\u{274C}";

/// Rewrites the `<input>` placeholder in library diagnostics to the name of
/// the input they belong to (a file path, `<query>` or `<stdin>`).
pub(crate) fn label_diagnostic(diagnostic: &str, label: &str) -> String {
    diagnostic.replace("<input>", label)
}
