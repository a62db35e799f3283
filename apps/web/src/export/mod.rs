//! Export Trigger: hands the rendered preview to the browser's print/PDF pipeline.

pub mod handlers;
pub mod page;
