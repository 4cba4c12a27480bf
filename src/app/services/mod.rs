pub mod action;
pub mod events;
pub mod shutdown;

pub use action::ActionService;
pub use events::EventService;
pub use shutdown::ShutdownCoordinator;
