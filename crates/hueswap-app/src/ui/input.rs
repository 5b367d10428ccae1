use eframe::egui::{InputState, Key};

use crate::action::{Action, ActionRequestQueue};

struct Trigger {
    key: Key,
    command: bool,
    shift: bool,
}

impl Trigger {
    const fn new(key: Key, command: bool, shift: bool) -> Self {
        Self {
            key,
            command,
            shift,
        }
    }
}

struct Shortcut {
    trigger: Trigger,
    action: Action,
}

impl Shortcut {
    const fn new(trigger: Trigger, action: Action) -> Self {
        Self { trigger, action }
    }

    const fn command(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, false), action)
    }

    const fn command_shift(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, true, true), action)
    }

    const fn plain(key: Key, action: Action) -> Self {
        Self::new(Trigger::new(key, false, false), action)
    }
}

const SHORTCUTS: [Shortcut; 3] = [
    Shortcut::command(Key::R, Action::Reset),
    Shortcut::command_shift(Key::R, Action::ResetAll),
    Shortcut::plain(Key::Escape, Action::ClearSelection),
];

pub fn handle_input(i: &InputState, action_queue: &mut ActionRequestQueue) {
    // `i.modifiers.command` is true when Ctrl (Windows/Linux) or Cmd (Mac) is pressed
    for shortcut in SHORTCUTS {
        let triggered = i.key_pressed(shortcut.trigger.key)
            && i.modifiers.command == shortcut.trigger.command
            && i.modifiers.shift == shortcut.trigger.shift;

        if triggered {
            action_queue.request(shortcut.action);
            return;
        }
    }
}
