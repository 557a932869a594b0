// API Constants
pub const CHAT_ENDPOINT: &str = "/chat";
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

// Canned reply texts
pub const NO_RESULT_MESSAGE: &str = "Sorry, I couldn't find relevant features.";
pub const ERROR_MESSAGE: &str = "An error occurred. Please try again.";

// UI Constants
pub const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];
pub const USER_AVATAR: &str = "👤";
pub const BOT_AVATAR: &str = "🤖";
