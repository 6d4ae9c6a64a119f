//! Launch dispatch
//!
//! [Dispatcher] walks a workspace and decides, per app entry, whether it is a
//! Spotify search command, a known application, a URL or a raw path, then fires
//! the matching [Launcher] call. Every call is fire-and-forget: the launcher
//! never waits for, tracks or manages the spawned processes.
use std::process::Command;

use crate::{
    aliases,
    config::Workspace,
    resolve::{Matcher, SkimRatio, resolve_app_name},
    spotify,
};

/// The two OS open primitives the dispatcher needs
///
/// Injected into [Dispatcher] so tests can record calls instead of spawning
/// real processes.
pub trait Launcher {
    /// Open an application by canonical name or raw path
    fn open_app(&self, name: &str);
    /// Hand a URL or URI to the platform's default handler
    fn open_url(&self, url: &str);
}

/// [Launcher] that spawns real OS processes
///
/// Spawn failures are logged and otherwise ignored; there is nothing useful to
/// surface to the user mid-dispatch.
#[derive(Default)]
pub struct SystemLauncher;

#[cfg(target_os = "macos")]
impl Launcher for SystemLauncher {
    fn open_app(&self, name: &str) {
        if let Err(e) = Command::new("open").args(["-a", name]).spawn() {
            log::warn!("Failed to open app {name}: {e}");
        }
    }

    fn open_url(&self, url: &str) {
        if let Err(e) = Command::new("open").arg(url).spawn() {
            log::warn!("Failed to open url {url}: {e}");
        }
    }
}

#[cfg(not(target_os = "macos"))]
impl Launcher for SystemLauncher {
    fn open_app(&self, name: &str) {
        if let Err(e) = Command::new("gtk-launch").arg(name).spawn() {
            log::warn!("Failed to open app {name}: {e}");
        }
    }

    fn open_url(&self, url: &str) {
        if let Err(e) = Command::new("xdg-open").arg(url).spawn() {
            log::warn!("Failed to open url {url}: {e}");
        }
    }
}

/// Per-entry decision logic for opening a workspace
pub struct Dispatcher<L: Launcher> {
    launcher: L,
    matcher: Box<dyn Matcher>,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            matcher: Box::new(SkimRatio::default()),
        }
    }

    pub fn with_matcher(launcher: L, matcher: Box<dyn Matcher>) -> Self {
        Self { launcher, matcher }
    }

    /// Open every app entry and URL of `workspace`, in list order
    ///
    /// Apps first, then URLs. No retries and no error propagation; a failed
    /// open degrades to nothing observable.
    pub fn open_workspace(&self, workspace: &Workspace) {
        log::info!("Opening workspace: {}", workspace.name);

        for entry in &workspace.apps {
            self.open_app_entry(entry);
        }

        for url in &workspace.urls {
            self.launcher.open_url(url);
        }
    }

    fn open_app_entry(&self, entry: &str) {
        // Spotify search commands take precedence over name resolution.
        if entry.to_lowercase().contains("spotify") {
            if let Some(uri) = spotify::parse_search_command(entry) {
                self.launcher.open_url(&uri);
                return;
            }
        }

        let resolved = resolve_app_name(entry, &*self.matcher);

        if resolved.starts_with(spotify::SEARCH_SCHEME) {
            self.launcher.open_url(&resolved);
        } else if aliases::is_canonical(&resolved) {
            self.launcher.open_app(&resolved);
        } else if is_url(entry) {
            self.launcher.open_url(entry);
        } else {
            // Best-effort: hand the raw entry to the OS as an app name or
            // path, without checking that anything by that name exists.
            self.launcher.open_app(entry);
        }
    }
}

fn is_url(entry: &str) -> bool {
    entry.starts_with("http://")
        || entry.starts_with("https://")
        || entry.starts_with(spotify::SEARCH_SCHEME)
}

#[cfg(test)]
mod test {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    #[derive(Debug, PartialEq, Eq, Clone)]
    enum Call {
        App(String),
        Url(String),
    }

    /// [Launcher] that records calls instead of spawning processes
    #[derive(Default, Clone)]
    struct RecordingLauncher {
        calls: Rc<RefCell<Vec<Call>>>,
    }

    impl Launcher for RecordingLauncher {
        fn open_app(&self, name: &str) {
            self.calls.borrow_mut().push(Call::App(name.to_string()));
        }

        fn open_url(&self, url: &str) {
            self.calls.borrow_mut().push(Call::Url(url.to_string()));
        }
    }

    fn dispatch(workspace: &Workspace) -> Vec<Call> {
        let launcher = RecordingLauncher::default();
        let calls = Rc::clone(&launcher.calls);

        Dispatcher::new(launcher).open_workspace(workspace);

        let calls = calls.borrow();
        calls.clone()
    }

    #[test]
    fn apps_in_order_then_urls_in_order() {
        let workspace = Workspace {
            name: String::from("Work"),
            urls: vec![String::from("http://x")],
            apps: vec![String::from("discord"), String::from("unknown.app")],
        };

        assert_eq!(
            dispatch(&workspace),
            vec![
                Call::App(String::from("Discord")),
                Call::App(String::from("unknown.app")),
                Call::Url(String::from("http://x")),
            ]
        );
    }

    #[test]
    fn spotify_command_opens_search_uri() {
        let workspace = Workspace {
            name: String::from("Music"),
            urls: Vec::new(),
            apps: vec![String::from("Summer 25 playlist on spotify")],
        };

        assert_eq!(
            dispatch(&workspace),
            vec![Call::Url(String::from("spotify:search:Summer%2025"))]
        );
    }

    #[test]
    fn plain_spotify_entry_opens_the_app() {
        // Contains the keyword but is not a search phrase, so it falls through
        // to ordinary resolution.
        let workspace = Workspace {
            name: String::from("Music"),
            urls: Vec::new(),
            apps: vec![String::from("spotify")],
        };

        assert_eq!(dispatch(&workspace), vec![Call::App(String::from("Spotify"))]);
    }

    #[test]
    fn raw_spotify_uri_opens_directly() {
        let workspace = Workspace {
            name: String::from("Music"),
            urls: Vec::new(),
            apps: vec![String::from("spotify:playlist:37i9dQZF1DXcBWIGoYBM5M")],
        };

        assert_eq!(
            dispatch(&workspace),
            vec![Call::Url(String::from(
                "spotify:playlist:37i9dQZF1DXcBWIGoYBM5M"
            ))]
        );
    }

    #[test]
    fn http_entry_in_apps_opens_as_url() {
        let workspace = Workspace {
            name: String::from("Web"),
            urls: Vec::new(),
            apps: vec![String::from("https://example.com")],
        };

        assert_eq!(
            dispatch(&workspace),
            vec![Call::Url(String::from("https://example.com"))]
        );
    }

    /// [Matcher] that only accepts exact key matches
    struct ExactMatcher;

    impl Matcher for ExactMatcher {
        fn similarity(&self, candidate: &str, input: &str) -> Option<f64> {
            (candidate == input).then_some(1.0)
        }
    }

    #[test]
    fn dispatcher_accepts_an_alternate_matcher() {
        let workspace = Workspace {
            name: String::from("Work"),
            urls: Vec::new(),
            apps: vec![String::from("discord"), String::from("discrd")],
        };

        let launcher = RecordingLauncher::default();
        let calls = Rc::clone(&launcher.calls);

        Dispatcher::with_matcher(launcher, Box::new(ExactMatcher)).open_workspace(&workspace);

        // The exact matcher resolves the first entry but refuses the typo'd
        // one, which falls through to the raw-app path.
        assert_eq!(
            *calls.borrow(),
            vec![
                Call::App(String::from("Discord")),
                Call::App(String::from("discrd")),
            ]
        );
    }

    #[test]
    fn empty_workspace_opens_nothing() {
        let workspace = Workspace {
            name: String::from("Empty"),
            urls: Vec::new(),
            apps: Vec::new(),
        };

        assert_eq!(dispatch(&workspace), Vec::new());
    }
}
