pub mod cli_consts {
    //! Dashboard Configuration Constants

    // =============================================================================
    // QUEUE CONFIGURATION
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    /// Capacity of the activity event channel shared by the logger, router and loader.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// Capacity of the load result channel.
    pub const LOAD_QUEUE_SIZE: usize = 16;

    // =============================================================================
    // NETWORK CONFIGURATION
    // =============================================================================

    pub mod http {
        use std::time::Duration;

        /// Connect and request timeout for the data client (seconds)
        pub const TIMEOUT_SECS: u64 = 10;

        pub const fn timeout() -> Duration {
            Duration::from_secs(TIMEOUT_SECS)
        }
    }

    /// Fixture server defaults
    pub mod server {
        /// Default port of the fixture server
        pub const DEFAULT_PORT: u16 = 3000;

        /// Web root served when `--root` is not given; JSON lives under `<root>/data`
        pub const DEFAULT_ROOT: &str = "fixtures";
    }

    // =============================================================================
    // UI CONFIGURATION
    // =============================================================================

    /// Key event poll interval (milliseconds)
    pub const UI_POLL_MS: u64 = 100;
}
