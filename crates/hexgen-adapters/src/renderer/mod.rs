//! Template rendering adapters implementing the `TemplateEngine` port.

pub mod tera_renderer;

pub use tera_renderer::TeraRenderer;
