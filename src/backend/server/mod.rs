//! Server Module
//!
//! Configuration, application state and initialization.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration and database loading
//! └── init.rs         - App creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env` reads and validates the environment
//! 2. **Database**: the SQLite pool is opened and migrations applied
//! 3. **State Creation**: token service and stores are built once
//! 4. **Router Creation**: routes and middleware are configured

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::create_app;
pub use state::{AppState, BcryptCost};
