use crate::GraphQLSourceSpan;

/// Implemented by every AST node.
///
/// Nodes implement this via `#[inherent] impl AstNode`, so the methods are
/// callable without importing the trait while generic code (diagnostics,
/// tests) can still bound on it.
pub trait AstNode {
    /// The source range this node was parsed from.
    fn span(&self) -> GraphQLSourceSpan;

    /// Appends this node's original text to `sink`.
    ///
    /// `source` must be the text the node was parsed from; a span that does
    /// not fall inside it appends nothing.
    fn append_source(&self, sink: &mut String, source: &str) {
        if let Some(slice) = self.span().source_slice(source) {
            sink.push_str(slice);
        }
    }

    /// Returns this node's original text.
    fn to_source(&self, source: &str) -> String {
        let mut sink = String::new();
        self.append_source(&mut sink, source);
        sink
    }
}
