pub mod common;
pub mod config_renderer;
pub mod modules_renderer;

pub use common::{render_footer, render_header, render_loading, render_navigation};
pub use config_renderer::render_config;
pub use modules_renderer::render_modules;
