//! HTML output: body fragments for each block and inline construct, and the
//! fixed page shell they are wrapped in.

pub mod html;
pub mod template;

pub use template::render_page;
