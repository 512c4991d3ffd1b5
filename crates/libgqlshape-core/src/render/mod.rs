mod render_error;
mod renderer;

pub use render_error::RenderError;
pub use renderer::Renderer;
