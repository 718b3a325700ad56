// Render module split into focused submodules, one per pane plus shared
// style and layout helpers.

pub mod content;
pub mod folders;
pub mod full;
pub mod modeline;
pub mod snippets;
pub mod styles;
pub mod util;

pub use full::render_full;
