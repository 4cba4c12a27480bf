pub mod confirm;
pub mod help;
pub mod input;
pub mod loading;
pub mod notice;
pub mod scroll;
pub mod sidebar;
pub mod transcript;
pub mod utils;

pub use confirm::ConfirmDelete;
pub use loading::Loading;
pub use notice::Notice;
pub use scroll::Scroll;
pub use sidebar::Sidebar;
pub use transcript::Transcript;
