//! Core application logic and configuration

/// Application configuration
pub mod config;

/// Application state management
pub mod app_state;

/// Factory pattern for app creation
pub mod factory;

/// Tracing subscriber setup
pub mod logging;

// Re-export commonly used items
pub use self::app_state::AppState;
pub use self::config::Config;
pub use self::factory::create_app_state;
