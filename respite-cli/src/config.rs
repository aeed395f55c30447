use std::path::PathBuf;

/// Resolves the ambient optional API credential. Absence is a first-class
/// condition, not an error: the pipelines degrade to the fallback set.
pub fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
        .iter()
        .find_map(|var| std::env::var(var).ok())
        .filter(|key| !key.trim().is_empty())
}

pub fn default_profile_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".respite").join("profile.json"))
        .unwrap_or_else(|| PathBuf::from("respite-profile.json"))
}
