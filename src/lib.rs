// Library exports for integration tests and the desktop binary

pub mod config;
pub mod geocoding;
pub mod trip;
pub mod ui;

// Re-export AppContext at crate root for easier access
pub use ui::AppContext;

// Test support (only available with test-utils feature)
#[cfg(any(test, feature = "test-utils"))]
pub mod test_support;
