pub mod content;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod resume;
pub mod showcase;

pub use resume::ResumeScreen;
pub use showcase::ShowcaseScreen;
