pub mod constants;
pub mod models;
pub mod utils;

pub use models::*;
pub use utils::*;

pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sent with every request to the endpoint.
pub fn user_agent() -> String {
    format!("{}/{}", APP_NAME, VERSION)
}

/// Start-up progress on stderr, printed only with `general.verbose = true`.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::config::Configuration::instance().general.verbose {
            eprintln!($($arg)*);
        }
    };
}

pub use verbose;
