// =============================================================================
// Application Identity
// =============================================================================

/// Application name in title case (for display and platform directories)
pub const APP_NAME: &str = "Catalog";

/// Unix-style dotfile folder name
pub const APP_DOT_FOLDER: &str = ".catalog";

// =============================================================================
// Configuration Files
// =============================================================================

/// Config file name
pub const CONFIG_FILE_NAME: &str = "catalog.json";

/// Environment variable for config file path
pub const ENV_CONFIG: &str = "CATALOG_CONFIG";

// =============================================================================
// Environment Variables - Server
// =============================================================================

/// Environment variable for server host
pub const ENV_HOST: &str = "CATALOG_HOST";

/// Environment variable for server port
pub const ENV_PORT: &str = "CATALOG_PORT";

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "CATALOG_LOG";

// =============================================================================
// Server Defaults
// =============================================================================

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Default log filter when neither CATALOG_LOG nor RUST_LOG is set
pub const DEFAULT_LOG_FILTER: &str = "info,catalog=info,catalog_server=info";

// =============================================================================
// Environment Variables - Storage
// =============================================================================

/// Environment variable to override data directory
pub const ENV_DATA_DIR: &str = "CATALOG_DATA_DIR";

/// Environment variable for the database file path
pub const ENV_DATABASE: &str = "CATALOG_DATABASE";

// =============================================================================
// SQLite Database
// =============================================================================

/// SQLite database filename
pub const SQLITE_DB_FILENAME: &str = "catalog.db";

/// SQLite connection pool max connections
pub const SQLITE_MAX_CONNECTIONS: u32 = 5;

/// SQLite busy timeout in seconds
pub const SQLITE_BUSY_TIMEOUT_SECS: u64 = 30;

/// SQLite cache size (negative = KB, so -64000 = 64MB)
pub const SQLITE_CACHE_SIZE: &str = "-64000";

/// SQLite WAL auto-checkpoint threshold in pages
pub const SQLITE_WAL_AUTOCHECKPOINT: &str = "1000";

/// Interval between explicit WAL checkpoints
pub const SQLITE_CHECKPOINT_INTERVAL_SECS: u64 = 300;

// =============================================================================
// Product Catalog
// =============================================================================

/// Companies a product may belong to
pub const PRODUCT_COMPANIES: &[&str] = &["ikea", "liddy", "caressa", "marcos"];

/// Rating given to products that do not specify one
pub const DEFAULT_PRODUCT_RATING: f64 = 4.5;

// =============================================================================
// Query Shaping
// =============================================================================

/// Page used when `page` is missing or invalid (1-based)
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when `limit` is missing or invalid
pub const DEFAULT_LIMIT: u32 = 10;

/// Number of products in the static featured listing
pub const FEATURED_LIMIT: u32 = 4;

// =============================================================================
// HTTP
// =============================================================================

/// Default request body limit
pub const DEFAULT_BODY_LIMIT: usize = 1024 * 1024;

// =============================================================================
// Shutdown
// =============================================================================

/// Maximum time to wait for registered background tasks on shutdown
pub const SHUTDOWN_TIMEOUT_SECS: u64 = 30;
