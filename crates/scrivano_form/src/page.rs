//! In-memory page model.
//!
//! A minimal stand-in for the host document: named forms and output
//! regions registered by identifier. Tests and the CLI drive the
//! controller against it; a real host supplies its own `PageView`.

use scrivano_interface::{FormView, OutputView, PageView};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

/// A form holding named string field values.
#[derive(Debug, Default)]
pub struct MemoryForm {
    fields: RwLock<HashMap<String, String>>,
}

impl MemoryForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value, adding the field if it does not exist.
    pub fn set_field(&self, name: impl Into<String>, value: impl Into<String>) {
        self.fields
            .write()
            .expect("Field map lock poisoned")
            .insert(name.into(), value.into());
    }
}

impl FormView for MemoryForm {
    fn field(&self, name: &str) -> Option<String> {
        self.fields
            .read()
            .expect("Field map lock poisoned")
            .get(name)
            .cloned()
    }
}

/// An output region holding plain text.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    text: RwLock<String>,
}

impl MemoryOutput {
    /// Creates an empty output region.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text content of the region.
    pub fn text(&self) -> String {
        self.text.read().expect("Output lock poisoned").clone()
    }
}

impl OutputView for MemoryOutput {
    fn set_text(&self, text: &str) {
        *self.text.write().expect("Output lock poisoned") = text.to_string();
    }
}

/// A page assembled from forms and output regions keyed by identifier.
///
/// # Examples
///
/// ```
/// use scrivano_form::page::{MemoryForm, MemoryOutput, MemoryPage};
/// use scrivano_interface::PageView;
/// use std::sync::Arc;
///
/// let form = Arc::new(MemoryForm::new());
/// form.set_field("topic", "Rust");
///
/// let page = MemoryPage::new()
///     .with_form("content-form", Arc::clone(&form))
///     .with_output("output-content", Arc::new(MemoryOutput::new()));
///
/// assert!(page.form("content-form").is_some());
/// assert!(page.output("missing").is_none());
/// ```
#[derive(Default)]
pub struct MemoryPage {
    forms: HashMap<String, Arc<MemoryForm>>,
    outputs: HashMap<String, Arc<MemoryOutput>>,
}

impl MemoryPage {
    /// Creates an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form under an identifier.
    pub fn with_form(mut self, id: impl Into<String>, form: Arc<MemoryForm>) -> Self {
        self.forms.insert(id.into(), form);
        self
    }

    /// Register an output region under an identifier.
    pub fn with_output(mut self, id: impl Into<String>, output: Arc<MemoryOutput>) -> Self {
        self.outputs.insert(id.into(), output);
        self
    }
}

impl PageView for MemoryPage {
    fn form(&self, id: &str) -> Option<Arc<dyn FormView>> {
        self.forms
            .get(id)
            .map(|form| Arc::clone(form) as Arc<dyn FormView>)
    }

    fn output(&self, id: &str) -> Option<Arc<dyn OutputView>> {
        self.outputs
            .get(id)
            .map(|output| Arc::clone(output) as Arc<dyn OutputView>)
    }
}
