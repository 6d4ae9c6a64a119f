//! The fixed alias table
//!
//! Maps lowercase free-text keys to canonical application names. Read-only at
//! runtime; the resolver fuzzy-matches user input against the keys.

/// Alias key → canonical app name
pub static APP_ALIASES: &[(&str, &str)] = &[
    ("vs code", "Visual Studio Code"),
    ("vscode", "Visual Studio Code"),
    ("discord", "Discord"),
    ("spotify", "Spotify"),
    ("chrome", "Google Chrome"),
    ("google chrome", "Google Chrome"),
    ("safari", "Safari"),
    ("terminal", "Terminal"),
];

/// Whether `name` is one of the canonical app names in the table
pub fn is_canonical(name: &str) -> bool {
    APP_ALIASES.iter().any(|(_, canonical)| *canonical == name)
}
