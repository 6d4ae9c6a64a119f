use gtk::prelude::*;
use relm4::prelude::*;
use time::OffsetDateTime;
use time::macros::format_description;

mod clock;
mod rows;

use common::{Config, Dispatcher, SystemLauncher, Workspace, load_config, save_config};
use clock::CLOCK;
use rows::{
    EntryRow, EntryRowOutput, WorkspaceButton, WorkspaceButtonOutput, WorkspaceRow,
    WorkspaceRowOutput,
};

const DATE_TIME_FORMAT: &[time::format_description::BorrowedFormatItem<'_>] = format_description!(
    "[weekday repr:long], [month repr:long] [day] • [hour repr:12]:[minute] [period]"
);

const CSS: &str = "
window { background-color: #e6f0d4; }
.title { font-size: 24px; font-weight: bold; color: #1a3d1a; }
.heading { font-size: 18px; font-weight: bold; color: #1a3d1a; }
.subheading { font-size: 15px; font-weight: bold; color: #1a3d1a; }
.hint { font-size: 11px; color: #4b634b; }
.clock { font-size: 11px; color: #4b634b; }
.workspace-btn { background-color: #b4d6a9; color: #1a3d1a; font-weight: bold; border-radius: 12px; min-height: 40px; }
.workspace-btn:hover { background-color: #a3c895; }
.list-row { background-color: white; border-radius: 10px; padding: 4px 8px; }
";

/// Which page the window currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Main,
    Settings,
    /// Editing the workspace at this position
    Edit(usize),
}

pub struct App {
    config: Config,
    page: Page,
    dispatcher: Dispatcher<SystemLauncher>,
    time: OffsetDateTime,
    workspace_buttons: FactoryVecDeque<WorkspaceButton>,
    workspace_rows: FactoryVecDeque<WorkspaceRow>,
    url_rows: FactoryVecDeque<EntryRow>,
    app_rows: FactoryVecDeque<EntryRow>,
}

#[derive(Debug)]
pub enum AppMsg {
    OpenWorkspace(usize),
    /// A digit key was pressed somewhere in the window
    Hotkey(u32),
    ShowMain,
    ShowSettings,
    EditWorkspace(usize),
    AddWorkspace(String),
    RemoveWorkspace(usize),
    MoveWorkspaceUp(usize),
    MoveWorkspaceDown(usize),
    RenameWorkspace(String),
    AddUrl(String),
    RemoveUrl(usize),
    MoveUrlUp(usize),
    MoveUrlDown(usize),
    EditUrl(usize, String),
    AddApp(String),
    RemoveApp(usize),
    MoveAppUp(usize),
    MoveAppDown(usize),
    EditApp(usize, String),
    Tick(OffsetDateTime),
}

#[relm4::component(pub)]
impl SimpleComponent for App {
    type Init = ();
    type Input = AppMsg;
    type Output = ();

    view! {
        #[name(main_window)]
        gtk::Window {
            set_title: Some("Sprout"),
            set_default_size: (400, 540),
            set_resizable: false,

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, keyval, _, _| {
                    if let Some(digit) = keyval.to_unicode().and_then(|c| c.to_digit(10)) {
                        sender.input(AppMsg::Hotkey(digit));
                    }

                    gtk::glib::Propagation::Proceed
                },
            },

            gtk::Box {
                set_orientation: gtk::Orientation::Vertical,
                set_spacing: 10,
                set_margin_all: 10,

                // Main page
                gtk::Box {
                    #[watch]
                    set_visible: model.page == Page::Main,
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 10,

                    gtk::Label {
                        set_label: "Sprout 🌱",
                        set_css_classes: &["title"],
                    },

                    gtk::ScrolledWindow {
                        set_vexpand: true,
                        set_min_content_height: 250,

                        #[local_ref]
                        workspace_box -> gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_spacing: 6,
                        },
                    },

                    gtk::Button {
                        set_label: "Settings ⚙",
                        set_halign: gtk::Align::Center,
                        connect_clicked => AppMsg::ShowSettings,
                    },

                    gtk::Label {
                        set_label: "Press 1-9 to open workspaces",
                        set_css_classes: &["hint"],
                    },

                    gtk::Label {
                        set_halign: gtk::Align::End,
                        set_css_classes: &["clock"],
                        #[watch]
                        set_label: &model.clock_text(),
                    },
                },

                // Settings page
                gtk::Box {
                    #[watch]
                    set_visible: model.page == Page::Settings,
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 10,

                    gtk::Label {
                        set_label: "Workspaces",
                        set_css_classes: &["heading"],
                    },

                    gtk::ScrolledWindow {
                        set_vexpand: true,

                        #[local_ref]
                        settings_box -> gtk::Box {
                            set_orientation: gtk::Orientation::Vertical,
                            set_spacing: 6,
                        },
                    },

                    gtk::Entry {
                        set_placeholder_text: Some("New workspace name…"),
                        connect_activate[sender] => move |entry| {
                            let name = entry.text().to_string();
                            entry.set_text("");
                            sender.input(AppMsg::AddWorkspace(name));
                        },
                    },

                    gtk::Button {
                        set_label: "Back",
                        set_halign: gtk::Align::Center,
                        connect_clicked => AppMsg::ShowMain,
                    },
                },

                // Edit page
                gtk::Box {
                    #[watch]
                    set_visible: matches!(model.page, Page::Edit(_)),
                    set_orientation: gtk::Orientation::Vertical,
                    set_spacing: 8,

                    gtk::Label {
                        #[watch]
                        set_label: &model.edit_title(),
                        set_css_classes: &["heading"],
                    },

                    gtk::Entry {
                        set_placeholder_text: Some("Rename workspace…"),
                        connect_activate[sender] => move |entry| {
                            let name = entry.text().to_string();
                            entry.set_text("");
                            sender.input(AppMsg::RenameWorkspace(name));
                        },
                    },

                    gtk::Label {
                        set_label: "URLs",
                        set_css_classes: &["subheading"],
                    },

                    #[local_ref]
                    url_box -> gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 4,
                    },

                    gtk::Entry {
                        set_placeholder_text: Some("Add URL…"),
                        connect_activate[sender] => move |entry| {
                            let url = entry.text().to_string();
                            entry.set_text("");
                            sender.input(AppMsg::AddUrl(url));
                        },
                    },

                    gtk::Label {
                        set_label: "Apps",
                        set_css_classes: &["subheading"],
                    },

                    gtk::Label {
                        set_label: "Tip: fuzzy names like 'vs code' or commands like 'Summer 25 playlist on spotify' work here.",
                        set_wrap: true,
                        set_css_classes: &["hint"],
                    },

                    #[local_ref]
                    app_box -> gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 4,
                    },

                    gtk::Entry {
                        set_placeholder_text: Some("Add app or command…"),
                        connect_activate[sender] => move |entry| {
                            let app = entry.text().to_string();
                            entry.set_text("");
                            sender.input(AppMsg::AddApp(app));
                        },
                    },

                    gtk::Button {
                        set_label: "Back",
                        set_halign: gtk::Align::Center,
                        connect_clicked => AppMsg::ShowSettings,
                    },
                },
            }
        }
    }

    fn init(
        _: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        clock::init_update_loop();

        let workspace_buttons = FactoryVecDeque::builder()
            .launch(gtk::Box::default())
            .forward(sender.input_sender(), |out| match out {
                WorkspaceButtonOutput::Open(i) => AppMsg::OpenWorkspace(i.current_index()),
            });

        let workspace_rows = FactoryVecDeque::builder()
            .launch(gtk::Box::default())
            .forward(sender.input_sender(), |out| match out {
                WorkspaceRowOutput::MoveUp(i) => AppMsg::MoveWorkspaceUp(i.current_index()),
                WorkspaceRowOutput::MoveDown(i) => AppMsg::MoveWorkspaceDown(i.current_index()),
                WorkspaceRowOutput::Edit(i) => AppMsg::EditWorkspace(i.current_index()),
                WorkspaceRowOutput::Remove(i) => AppMsg::RemoveWorkspace(i.current_index()),
            });

        let url_rows = FactoryVecDeque::builder()
            .launch(gtk::Box::default())
            .forward(sender.input_sender(), |out| match out {
                EntryRowOutput::MoveUp(i) => AppMsg::MoveUrlUp(i.current_index()),
                EntryRowOutput::MoveDown(i) => AppMsg::MoveUrlDown(i.current_index()),
                EntryRowOutput::Remove(i) => AppMsg::RemoveUrl(i.current_index()),
                EntryRowOutput::Edited(i, text) => AppMsg::EditUrl(i.current_index(), text),
            });

        let app_rows = FactoryVecDeque::builder()
            .launch(gtk::Box::default())
            .forward(sender.input_sender(), |out| match out {
                EntryRowOutput::MoveUp(i) => AppMsg::MoveAppUp(i.current_index()),
                EntryRowOutput::MoveDown(i) => AppMsg::MoveAppDown(i.current_index()),
                EntryRowOutput::Remove(i) => AppMsg::RemoveApp(i.current_index()),
                EntryRowOutput::Edited(i, text) => AppMsg::EditApp(i.current_index(), text),
            });

        let mut model = App {
            config: load_config(),
            page: Page::Main,
            dispatcher: Dispatcher::new(SystemLauncher),
            time: CLOCK.read().time(),
            workspace_buttons,
            workspace_rows,
            url_rows,
            app_rows,
        };

        model.sync_workspaces();

        CLOCK.subscribe_optional(sender.input_sender(), |clock| {
            Some(AppMsg::Tick(clock.time()))
        });

        let workspace_box = model.workspace_buttons.widget();
        let settings_box = model.workspace_rows.widget();
        let url_box = model.url_rows.widget();
        let app_box = model.app_rows.widget();

        let widgets = view_output!();

        relm4::set_global_css(CSS);

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, _sender: ComponentSender<Self>) {
        match msg {
            AppMsg::OpenWorkspace(index) => self.open_workspace(index),
            AppMsg::Hotkey(digit) => {
                // Hotkeys only act on the main page; out-of-range digits are a
                // no-op.
                if self.page == Page::Main {
                    if let Some(index) = hotkey_target(digit, self.config.workspaces.len()) {
                        self.open_workspace(index);
                    }
                }
            }
            AppMsg::ShowMain => {
                self.page = Page::Main;
                self.sync_workspaces();
            }
            AppMsg::ShowSettings => {
                self.page = Page::Settings;
                self.sync_workspaces();
            }
            AppMsg::EditWorkspace(index) => {
                if index < self.config.workspaces.len() {
                    self.page = Page::Edit(index);
                    self.sync_entries();
                }
            }
            AppMsg::AddWorkspace(name) => {
                let name = name.trim();

                if !name.is_empty() {
                    self.config.workspaces.push(Workspace {
                        name: name.to_string(),
                        ..Workspace::default()
                    });
                    self.persist();
                    self.sync_workspaces();
                }
            }
            AppMsg::RemoveWorkspace(index) => {
                if index < self.config.workspaces.len() {
                    self.config.workspaces.remove(index);
                    self.persist();
                    self.sync_workspaces();
                }
            }
            AppMsg::MoveWorkspaceUp(index) => {
                if index > 0 && index < self.config.workspaces.len() {
                    self.config.workspaces.swap(index - 1, index);
                    self.persist();
                    self.sync_workspaces();
                }
            }
            AppMsg::MoveWorkspaceDown(index) => {
                if index + 1 < self.config.workspaces.len() {
                    self.config.workspaces.swap(index, index + 1);
                    self.persist();
                    self.sync_workspaces();
                }
            }
            AppMsg::RenameWorkspace(name) => {
                let name = name.trim().to_string();

                if !name.is_empty() {
                    if let Some(index) = self.current_edit() {
                        if let Some(ws) = self.config.workspaces.get_mut(index) {
                            ws.name = name;
                            self.persist();
                        }
                    }
                }
            }
            AppMsg::AddUrl(url) => self.mutate_entries(|ws| {
                let url = url.trim();

                if url.is_empty() {
                    return false;
                }

                ws.urls.push(url.to_string());
                true
            }),
            AppMsg::RemoveUrl(index) => self.mutate_entries(|ws| {
                if index >= ws.urls.len() {
                    return false;
                }

                ws.urls.remove(index);
                true
            }),
            AppMsg::MoveUrlUp(index) => self.mutate_entries(|ws| {
                if index == 0 || index >= ws.urls.len() {
                    return false;
                }

                ws.urls.swap(index - 1, index);
                true
            }),
            AppMsg::MoveUrlDown(index) => self.mutate_entries(|ws| {
                if index + 1 >= ws.urls.len() {
                    return false;
                }

                ws.urls.swap(index, index + 1);
                true
            }),
            AppMsg::EditUrl(index, text) => {
                self.mutate_entries(|ws| replace_entry(&mut ws.urls, index, &text));
            }
            AppMsg::AddApp(app) => self.mutate_entries(|ws| {
                let app = app.trim();

                if app.is_empty() {
                    return false;
                }

                ws.apps.push(app.to_string());
                true
            }),
            AppMsg::RemoveApp(index) => self.mutate_entries(|ws| {
                if index >= ws.apps.len() {
                    return false;
                }

                ws.apps.remove(index);
                true
            }),
            AppMsg::MoveAppUp(index) => self.mutate_entries(|ws| {
                if index == 0 || index >= ws.apps.len() {
                    return false;
                }

                ws.apps.swap(index - 1, index);
                true
            }),
            AppMsg::MoveAppDown(index) => self.mutate_entries(|ws| {
                if index + 1 >= ws.apps.len() {
                    return false;
                }

                ws.apps.swap(index, index + 1);
                true
            }),
            AppMsg::EditApp(index, text) => {
                self.mutate_entries(|ws| replace_entry(&mut ws.apps, index, &text));
            }
            AppMsg::Tick(time) => self.time = time,
        }
    }
}

impl App {
    fn current_edit(&self) -> Option<usize> {
        match self.page {
            Page::Edit(index) => Some(index),
            _ => None,
        }
    }

    fn open_workspace(&self, index: usize) {
        if let Some(ws) = self.config.workspaces.get(index) {
            self.dispatcher.open_workspace(ws);
        } else {
            log::debug!("No workspace at position: {}", index + 1);
        }
    }

    fn persist(&self) {
        save_config(&self.config);
    }

    /// Rebuild the workspace lists on the main and settings pages
    fn sync_workspaces(&mut self) {
        {
            let mut buttons = self.workspace_buttons.guard();
            buttons.clear();

            for ws in &self.config.workspaces {
                buttons.push_back(ws.name.clone());
            }
        }

        let mut rows = self.workspace_rows.guard();
        rows.clear();

        for ws in &self.config.workspaces {
            rows.push_back(ws.name.clone());
        }
    }

    /// Rebuild the URL and app lists for the workspace being edited
    fn sync_entries(&mut self) {
        let Some(ws) = self
            .current_edit()
            .and_then(|i| self.config.workspaces.get(i))
        else {
            return;
        };

        {
            let mut urls = self.url_rows.guard();
            urls.clear();

            for url in &ws.urls {
                urls.push_back(url.clone());
            }
        }

        let mut apps = self.app_rows.guard();
        apps.clear();

        for app in &ws.apps {
            apps.push_back(app.clone());
        }
    }

    /// Apply `f` to the workspace being edited; persist and re-render when it
    /// reports a change
    fn mutate_entries(&mut self, f: impl FnOnce(&mut Workspace) -> bool) {
        let Some(ws) = self
            .current_edit()
            .and_then(|i| self.config.workspaces.get_mut(i))
        else {
            return;
        };

        if f(ws) {
            self.persist();
            self.sync_entries();
        }
    }

    fn clock_text(&self) -> String {
        self.time.format(&DATE_TIME_FORMAT).unwrap_or_default()
    }

    fn edit_title(&self) -> String {
        self.current_edit()
            .and_then(|i| self.config.workspaces.get(i))
            .map(|ws| format!("Edit {}", ws.name))
            .unwrap_or_default()
    }
}

/// Map a digit key to a workspace position, if one exists
///
/// Digits 1-9 bind to positions 0-8; anything past the current workspace count
/// is a no-op.
fn hotkey_target(digit: u32, workspace_count: usize) -> Option<usize> {
    if !(1..=9).contains(&digit) {
        return None;
    }

    let index = digit as usize - 1;

    (index < workspace_count).then_some(index)
}

/// Replace a list entry in place, keeping its position
///
/// Empty text, out-of-range positions and unchanged text report no change, so
/// nothing is persisted for them.
fn replace_entry(entries: &mut [String], index: usize, text: &str) -> bool {
    let text = text.trim();

    if text.is_empty() {
        return false;
    }

    let Some(entry) = entries.get_mut(index) else {
        return false;
    };

    if *entry == text {
        return false;
    }

    *entry = text.to_string();

    true
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn hotkey_binds_to_position() {
        assert_eq!(hotkey_target(3, 5), Some(2));
        assert_eq!(hotkey_target(1, 1), Some(0));
    }

    #[test]
    fn hotkey_past_workspace_count_is_a_no_op() {
        assert_eq!(hotkey_target(3, 2), None);
        assert_eq!(hotkey_target(9, 0), None);
    }

    #[test]
    fn only_digits_one_to_nine_bind() {
        assert_eq!(hotkey_target(0, 5), None);
    }

    fn sample_entries() -> Vec<String> {
        vec![String::from("http://x"), String::from("discord")]
    }

    #[test]
    fn editing_an_entry_replaces_it_in_place() {
        let mut entries = sample_entries();

        assert!(replace_entry(&mut entries, 1, "vs code"));
        assert_eq!(entries, vec!["http://x", "vs code"]);
    }

    #[test]
    fn editing_with_empty_text_is_a_no_op() {
        let mut entries = sample_entries();

        assert!(!replace_entry(&mut entries, 0, "   "));
        assert_eq!(entries, sample_entries());
    }

    #[test]
    fn editing_out_of_range_is_a_no_op() {
        let mut entries = sample_entries();

        assert!(!replace_entry(&mut entries, 2, "chrome"));
        assert_eq!(entries, sample_entries());
    }

    #[test]
    fn editing_to_the_same_text_reports_no_change() {
        let mut entries = sample_entries();

        assert!(!replace_entry(&mut entries, 0, "http://x"));
    }
}
