//! Form controller for the Scrivano content generation client.
//!
//! [`FormController`] mediates between a form's input fields and the
//! remote generation endpoint, and reflects the request lifecycle in a
//! designated output region. The host page, the transport, and the error
//! channel are all injected collaborators; see `scrivano_interface`.

mod controller;
pub mod page;

pub use controller::{
    FIELD_LENGTH, FIELD_STYLE, FIELD_TOPIC, FormController, MSG_GENERATION_FAILED,
    STATUS_GENERATING,
};
