//! Factory components for the dynamic lists
//!
//! Three row shapes: the big launch buttons on the main page, workspace rows on
//! the settings page and plain entry rows (URLs and apps) on the edit page.
//! Every row reports its own [DynamicIndex] back to the app, which keeps the
//! list position authoritative.
use gtk::prelude::*;
use relm4::prelude::*;

/// One launch button on the main page
#[derive(Debug)]
pub struct WorkspaceButton {
    index: DynamicIndex,
    name: String,
}

#[derive(Debug)]
pub enum WorkspaceButtonMsg {
    Clicked,
}

#[derive(Debug)]
pub enum WorkspaceButtonOutput {
    Open(DynamicIndex),
}

#[relm4::factory(pub)]
impl FactoryComponent for WorkspaceButton {
    type Init = String;
    type Input = WorkspaceButtonMsg;
    type Output = WorkspaceButtonOutput;
    type CommandOutput = ();
    type ParentWidget = gtk::Box;

    view! {
        #[name(workspace_btn)]
        gtk::Button {
            set_css_classes: &["workspace-btn"],
            set_label: &format!("{}. {}", self.index.current_index() + 1, self.name),
            connect_clicked => WorkspaceButtonMsg::Clicked,
        }
    }

    fn init_model(name: Self::Init, index: &Self::Index, _sender: FactorySender<Self>) -> Self {
        Self {
            index: index.clone(),
            name,
        }
    }

    fn update(&mut self, msg: Self::Input, sender: FactorySender<Self>) {
        match msg {
            WorkspaceButtonMsg::Clicked => {
                let _ = sender.output(WorkspaceButtonOutput::Open(self.index.clone()));
            }
        }
    }
}

/// One workspace on the settings page
#[derive(Debug)]
pub struct WorkspaceRow {
    index: DynamicIndex,
    name: String,
}

#[derive(Debug)]
pub enum WorkspaceRowMsg {
    MoveUp,
    MoveDown,
    Edit,
    Remove,
}

#[derive(Debug)]
pub enum WorkspaceRowOutput {
    MoveUp(DynamicIndex),
    MoveDown(DynamicIndex),
    Edit(DynamicIndex),
    Remove(DynamicIndex),
}

#[relm4::factory(pub)]
impl FactoryComponent for WorkspaceRow {
    type Init = String;
    type Input = WorkspaceRowMsg;
    type Output = WorkspaceRowOutput;
    type CommandOutput = ();
    type ParentWidget = gtk::Box;

    view! {
        #[name(workspace_row)]
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 6,
            set_css_classes: &["list-row"],

            gtk::Label {
                set_label: &self.name,
                set_hexpand: true,
                set_halign: gtk::Align::Start,
            },

            gtk::Button {
                set_label: "↑",
                connect_clicked => WorkspaceRowMsg::MoveUp,
            },
            gtk::Button {
                set_label: "↓",
                connect_clicked => WorkspaceRowMsg::MoveDown,
            },
            gtk::Button {
                set_label: "Edit",
                connect_clicked => WorkspaceRowMsg::Edit,
            },
            gtk::Button {
                set_label: "Remove",
                connect_clicked => WorkspaceRowMsg::Remove,
            },
        }
    }

    fn init_model(name: Self::Init, index: &Self::Index, _sender: FactorySender<Self>) -> Self {
        Self {
            index: index.clone(),
            name,
        }
    }

    fn update(&mut self, msg: Self::Input, sender: FactorySender<Self>) {
        let index = self.index.clone();

        let _ = match msg {
            WorkspaceRowMsg::MoveUp => sender.output(WorkspaceRowOutput::MoveUp(index)),
            WorkspaceRowMsg::MoveDown => sender.output(WorkspaceRowOutput::MoveDown(index)),
            WorkspaceRowMsg::Edit => sender.output(WorkspaceRowOutput::Edit(index)),
            WorkspaceRowMsg::Remove => sender.output(WorkspaceRowOutput::Remove(index)),
        };
    }
}

/// One URL or app entry on the edit page
///
/// The text itself is an entry widget: typing over it and pressing enter
/// replaces the list entry in place.
#[derive(Debug)]
pub struct EntryRow {
    index: DynamicIndex,
    text: String,
}

#[derive(Debug)]
pub enum EntryRowMsg {
    MoveUp,
    MoveDown,
    Remove,
    Edited(String),
}

#[derive(Debug)]
pub enum EntryRowOutput {
    MoveUp(DynamicIndex),
    MoveDown(DynamicIndex),
    Remove(DynamicIndex),
    Edited(DynamicIndex, String),
}

#[relm4::factory(pub)]
impl FactoryComponent for EntryRow {
    type Init = String;
    type Input = EntryRowMsg;
    type Output = EntryRowOutput;
    type CommandOutput = ();
    type ParentWidget = gtk::Box;

    view! {
        #[name(entry_row)]
        gtk::Box {
            set_orientation: gtk::Orientation::Horizontal,
            set_spacing: 6,
            set_css_classes: &["list-row"],

            gtk::Entry {
                set_text: &self.text,
                set_hexpand: true,
                connect_activate[sender] => move |entry| {
                    sender.input(EntryRowMsg::Edited(entry.text().to_string()));
                },
            },

            gtk::Button {
                set_label: "↑",
                connect_clicked => EntryRowMsg::MoveUp,
            },
            gtk::Button {
                set_label: "↓",
                connect_clicked => EntryRowMsg::MoveDown,
            },
            gtk::Button {
                set_label: "✕",
                connect_clicked => EntryRowMsg::Remove,
            },
        }
    }

    fn init_model(text: Self::Init, index: &Self::Index, _sender: FactorySender<Self>) -> Self {
        Self {
            index: index.clone(),
            text,
        }
    }

    fn update(&mut self, msg: Self::Input, sender: FactorySender<Self>) {
        let index = self.index.clone();

        let _ = match msg {
            EntryRowMsg::MoveUp => sender.output(EntryRowOutput::MoveUp(index)),
            EntryRowMsg::MoveDown => sender.output(EntryRowOutput::MoveDown(index)),
            EntryRowMsg::Remove => sender.output(EntryRowOutput::Remove(index)),
            EntryRowMsg::Edited(text) => {
                self.text = text.clone();
                sender.output(EntryRowOutput::Edited(index, text))
            }
        };
    }
}
