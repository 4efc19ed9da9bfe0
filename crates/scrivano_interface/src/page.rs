//! View traits over the host page.
//!
//! The page itself (markup, layout, event plumbing) belongs to the host;
//! the controller only needs to read named form fields, replace the text
//! of one output region, and look both up by identifier.

use std::sync::Arc;

/// Read access to a form's current field values.
pub trait FormView: Send + Sync {
    /// Current string value of the named field, as the form control holds
    /// it, or `None` when the form has no such field.
    fn field(&self, name: &str) -> Option<String>;
}

/// Write access to the output region.
///
/// Rendering is plain text: `set_text` replaces the region's entire text
/// content. Markup in `text` is displayed literally, never interpreted.
pub trait OutputView: Send + Sync {
    /// Replace the region's text content.
    fn set_text(&self, text: &str);
}

/// Element lookup on the host document.
pub trait PageView {
    /// The form with the given identifier, if present.
    fn form(&self, id: &str) -> Option<Arc<dyn FormView>>;

    /// The output region with the given identifier, if present.
    fn output(&self, id: &str) -> Option<Arc<dyn OutputView>>;
}
