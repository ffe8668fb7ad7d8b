//! Shared constants used across the application

/// Default endpoint for the Gemini generative language API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Assistant greeting seeded as the first transcript turn. Never removed.
pub const GREETING: &str = "Hi! I'm Gemini. How can I help you code today? 💻";

/// Sampling temperature used when none is configured.
pub const DEFAULT_TEMPERATURE: f32 = 0.3;

/// Shortest credential we accept at construction time. Real Google API keys
/// are 39 characters; anything much shorter cannot be one.
pub const MIN_CREDENTIAL_LEN: usize = 20;

/// Environment variable consulted when no credential is submitted interactively.
pub const CREDENTIAL_ENV_VAR: &str = "GOOGLE_API_KEY";
