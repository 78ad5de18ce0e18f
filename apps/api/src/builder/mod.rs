// Resume Builder: validates structured resume records, stores them as JSON files
// keyed by a generated id, and renders them back as Markdown.

pub mod handlers;
pub mod models;
pub mod render;
pub mod store;
