// src/config/consts.rs

// Sources
pub const CURVE_URL: &str =
    "https://guides.gsh-servers.com/path-of-titans/guides/curve-overrides/alderons/";
pub const CURVE_FILE: &str = "dinos.json";
pub const WIKI_FILE: &str = "wiki_dinos.json";

// Net config
pub const USER_AGENT: &str = "dino_stats/0.1";
pub const TIMEOUT_SECS: u64 = 15;

// Local files
pub const CONFIG_FILE: &str = "dino_stats.conf";
pub const LOG_FILE: &str = ".store/debug.log";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
