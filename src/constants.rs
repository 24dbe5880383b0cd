/// User agent string for HTTP requests
pub const USER_AGENT: &str = "dragcast/0.1.0 (contact@example.com)";

/// National Weather Service API base URL, used for active alerts
pub const NWS_API_BASE: &str = "https://api.weather.gov";

/// Open-Meteo forecast API base URL
pub const OPEN_METEO_API_BASE: &str = "https://api.open-meteo.com/v1";

/// Open-Meteo place search base URL
pub const GEOCODING_API_BASE: &str = "https://geocoding-api.open-meteo.com/v1";

/// BigDataCloud client-side reverse geocoding base URL
pub const REVERSE_GEOCODE_API_BASE: &str = "https://api.bigdatacloud.net/data";

/// Hours shown in the "next hours" strip
pub const DEFAULT_FORECAST_HOURS: u32 = 12;

/// Days requested for the daily forecast
pub const DEFAULT_FORECAST_DAYS: u32 = 5;

/// Tiles in the extended forecast
pub const EXTENDED_FORECAST_DAYS: usize = 3;

/// Place search result limit
pub const LOCATION_SEARCH_LIMIT: u32 = 10;

pub const REQUEST_TIMEOUT_SECS: u64 = 10;
