/// Base URL of the public CALD API, used when `CALD_BASE_URL` is not set
pub const DEFAULT_BASE_URL: &str = "http://cald.yosarin.net";
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// User agent string sent with every request
pub const USER_AGENT: &str = "cald-client/0.1.0";
/// Name of the header carrying the session token
pub const TOKEN_HEADER: &str = "token";
/// Error message of the payload synthesized when a body is not valid JSON
pub const PARSE_ERROR_MESSAGE: &str = "unable to parse json";
/// Address type applied when an address record does not name one
pub const DEFAULT_ADDRESS_TYPE: &str = "permanent residence";
/// Season name used by the season lookup.
///
/// The server is queried with this name whatever year the caller asks for.
/// Kept until the intended lookup is confirmed with the API owner.
pub const SEASON_NAME_FILTER: &str = "2018";
/// Resource holding seasons
pub const SEASON_RESOURCE: &str = "season";
/// Resource holding the player/team/season association
pub const PLAYER_AT_TEAM_RESOURCE: &str = "player_at_team";
