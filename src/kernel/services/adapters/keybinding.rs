//! 快捷键：按键 → 命令（支持上下文，可被设置文件覆盖）

use super::settings::{parse_command, parse_keybinding};
use crate::core::event::{Key, KeyCode, KeyModifiers};
use crate::core::Command;
use crate::kernel::services::ports::settings::KeybindingRule;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeybindingContext {
    Global,
    Editor,
}

impl KeybindingContext {
    pub fn parse(value: &str) -> Option<Self> {
        let v = value.trim().to_ascii_lowercase();
        match v.as_str() {
            "global" => Some(Self::Global),
            "editor" => Some(Self::Editor),
            _ => None,
        }
    }
}

pub struct KeybindingService {
    global: FxHashMap<Key, Command>,
    editor: FxHashMap<Key, Command>,
}

impl KeybindingService {
    pub fn new() -> Self {
        Self::with_defaults()
    }

    pub fn with_defaults() -> Self {
        Self {
            global: default_global_keybindings(),
            editor: default_editor_keybindings(),
        }
    }

    /// 默认绑定叠加用户规则；无法解析的规则记录警告后跳过
    pub fn with_rules(rules: &[KeybindingRule]) -> Self {
        let mut service = Self::with_defaults();
        for rule in rules {
            let Some(key) = parse_keybinding(&rule.key) else {
                tracing::warn!(key = %rule.key, "ignoring keybinding with unknown key");
                continue;
            };
            let context = match rule.context.as_deref() {
                None => KeybindingContext::Global,
                Some(raw) => match KeybindingContext::parse(raw) {
                    Some(ctx) => ctx,
                    None => {
                        tracing::warn!(context = %raw, "ignoring keybinding with unknown context");
                        continue;
                    }
                },
            };

            let command = rule.command.trim();
            if command.is_empty() || command == "-" {
                service.unbind(context, &key);
                continue;
            }
            match parse_command(command) {
                Command::Custom(name) => {
                    tracing::warn!(command = %name, "ignoring keybinding with unknown command");
                }
                command => service.bind(context, key, command),
            }
        }
        service
    }

    pub fn resolve(&self, context: KeybindingContext, key: &Key) -> Option<&Command> {
        match context {
            KeybindingContext::Global => self.global.get(key),
            KeybindingContext::Editor => self.editor.get(key).or_else(|| self.global.get(key)),
        }
    }

    pub fn bindings(&self, context: KeybindingContext) -> &FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &self.global,
            KeybindingContext::Editor => &self.editor,
        }
    }

    /// 每个全局命令的快捷键文本，供菜单显示；一个命令绑了多个键时取最短的
    pub fn shortcut_labels(&self) -> FxHashMap<Command, String> {
        let mut labels: FxHashMap<Command, String> = FxHashMap::default();
        for (key, command) in &self.global {
            let label = key.to_string();
            let shorter = labels.get(command).map_or(true, |existing| {
                (label.len(), &label) < (existing.len(), existing)
            });
            if shorter {
                labels.insert(command.clone(), label);
            }
        }
        labels
    }

    pub fn bind(&mut self, context: KeybindingContext, key: Key, command: Command) {
        self.map_mut(context).insert(key, command);
    }

    pub fn unbind(&mut self, context: KeybindingContext, key: &Key) -> Option<Command> {
        self.map_mut(context).remove(key)
    }

    fn map_mut(&mut self, context: KeybindingContext) -> &mut FxHashMap<Key, Command> {
        match context {
            KeybindingContext::Global => &mut self.global,
            KeybindingContext::Editor => &mut self.editor,
        }
    }
}

impl Default for KeybindingService {
    fn default() -> Self {
        Self::new()
    }
}

fn default_global_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(16);

    bindings.insert(Key::ctrl(KeyCode::Char('n')), Command::New);
    bindings.insert(Key::ctrl(KeyCode::Char('o')), Command::Open);
    bindings.insert(Key::ctrl(KeyCode::Char('s')), Command::Save);
    bindings.insert(Key::ctrl(KeyCode::Char('q')), Command::Exit);

    bindings.insert(Key::ctrl(KeyCode::Char('b')), Command::ToggleBold);
    // Ctrl+I / Ctrl+H arrive as Tab / Backspace on most terminals.
    bindings.insert(Key::alt(KeyCode::Char('i')), Command::ToggleItalic);
    bindings.insert(Key::alt(KeyCode::Char('h')), Command::Highlight);

    bindings.insert(Key::simple(KeyCode::F(10)), Command::FocusMenuBar);
    bindings.insert(Key::alt(KeyCode::Char('f')), Command::OpenMenu(0));
    bindings.insert(Key::alt(KeyCode::Char('o')), Command::OpenMenu(1));
    bindings.insert(Key::alt(KeyCode::Char('s')), Command::OpenMenu(2));

    bindings
}

fn default_editor_keybindings() -> FxHashMap<Key, Command> {
    let mut bindings = FxHashMap::default();
    bindings.reserve(32);

    bindings.insert(Key::simple(KeyCode::Left), Command::CursorLeft);
    bindings.insert(Key::simple(KeyCode::Right), Command::CursorRight);
    bindings.insert(Key::simple(KeyCode::Up), Command::CursorUp);
    bindings.insert(Key::simple(KeyCode::Down), Command::CursorDown);
    bindings.insert(Key::simple(KeyCode::Home), Command::CursorLineStart);
    bindings.insert(Key::simple(KeyCode::End), Command::CursorLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Home), Command::CursorFileStart);
    bindings.insert(Key::ctrl(KeyCode::End), Command::CursorFileEnd);

    bindings.insert(Key::shift(KeyCode::Left), Command::SelectLeft);
    bindings.insert(Key::shift(KeyCode::Right), Command::SelectRight);
    bindings.insert(Key::shift(KeyCode::Up), Command::SelectUp);
    bindings.insert(Key::shift(KeyCode::Down), Command::SelectDown);
    bindings.insert(Key::shift(KeyCode::Home), Command::SelectLineStart);
    bindings.insert(Key::shift(KeyCode::End), Command::SelectLineEnd);
    bindings.insert(Key::ctrl(KeyCode::Char('a')), Command::SelectAll);
    bindings.insert(Key::simple(KeyCode::Esc), Command::ClearSelection);

    bindings.insert(Key::simple(KeyCode::Enter), Command::InsertNewline);
    bindings.insert(Key::simple(KeyCode::Tab), Command::InsertTab);
    bindings.insert(Key::simple(KeyCode::Backspace), Command::DeleteBackward);
    bindings.insert(Key::simple(KeyCode::Delete), Command::DeleteForward);

    bindings.insert(Key::simple(KeyCode::PageUp), Command::PageUp);
    bindings.insert(Key::simple(KeyCode::PageDown), Command::PageDown);
    bindings.insert(
        Key::new(KeyCode::Up, KeyModifiers::CONTROL),
        Command::ScrollUp,
    );
    bindings.insert(
        Key::new(KeyCode::Down, KeyModifiers::CONTROL),
        Command::ScrollDown,
    );

    bindings
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/keybinding.rs"]
mod tests;
