pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains all configuration constants for the dashboard,
    //! organized by functional area.

    // =============================================================================
    // API CONFIGURATION
    // =============================================================================

    /// Base URL of the hosted terminology service.
    pub const DEFAULT_API_URL: &str = "https://namaste-ipab.onrender.com";

    /// Environment variable that overrides the API base URL.
    pub const API_URL_ENV_VAR: &str = "NAMASTE_API_URL";

    /// API endpoints, relative to the base URL.
    pub mod endpoints {
        pub const INGEST_NAMASTE: &str = "ingest/namaste";
        pub const SYNC_ICD11: &str = "sync/icd11";
        pub const AUTOCOMPLETE: &str = "autocomplete";
        pub const MAP: &str = "map";
        pub const AUDIT: &str = "audit";
    }

    /// HTTP client timeouts
    pub mod http {
        use std::time::Duration;

        /// Connect timeout in seconds
        pub const CONNECT_TIMEOUT_SECS: u64 = 10;

        /// Whole-request timeout in seconds. The hosted service sleeps when idle
        /// and a sync can take a while, so this is generous.
        pub const REQUEST_TIMEOUT_SECS: u64 = 120;

        pub const fn connect_timeout() -> Duration {
            Duration::from_secs(CONNECT_TIMEOUT_SECS)
        }

        pub const fn request_timeout() -> Duration {
            Duration::from_secs(REQUEST_TIMEOUT_SECS)
        }
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// How long the splash screen stays up before the dashboard opens (milliseconds)
    pub const SPLASH_DURATION_MS: u64 = 2000;

    /// Key event poll interval (milliseconds)
    pub const UI_POLL_INTERVAL_MS: u64 = 100;

    /// Maximum number of characters accepted by an input box
    pub const MAX_INPUT_LEN: usize = 512;

    // =============================================================================
    // CONFIG FILE
    // =============================================================================

    /// Directory under $HOME that holds the config file
    pub const CONFIG_DIR: &str = ".namaste";

    /// Config file name
    pub const CONFIG_FILE: &str = "config.json";
}
