//! React component generation

use crate::document::LayoutDocument;

/// Component shell emitted for every document
pub const REACT_SHELL: &str = "import React from 'react';

export default function GeneratedComponent() {
  return (
    <div className=\"canvas\">
      {/* Generated React component */}
    </div>
  );
}
";

/// Render the React component
///
/// The output does not depend on the document yet; elements are not walked.
pub fn render_react(_doc: &LayoutDocument) -> String {
    REACT_SHELL.to_string()
}
