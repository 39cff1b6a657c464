// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.etnet.com.hk/www/eng/stocks/realtime/";
pub const USER_AGENT: &str = concat!("fin_statement/", env!("CARGO_PKG_VERSION"));
pub const REQUEST_TIMEOUT_SECS: u64 = 15;

// Extraction
pub const TABLE_SELECTOR: &str = "table.figureTable";
pub const MAX_TABLES: usize = 11; // page tail holds unrelated figure tables

// Render
pub const BLANK_ZERO: bool = true;
