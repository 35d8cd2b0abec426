//! UI Components
//!
//! Page sections and the file cabinet widget.

mod hero;
mod about_section;
mod projects_section;
mod file_cabinet;
mod project_links;

pub use hero::Hero;
pub use about_section::AboutSection;
pub use projects_section::ProjectsSection;
pub use file_cabinet::FileCabinet;
pub use project_links::ProjectLinks;
