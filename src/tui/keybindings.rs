//! Keybinding definitions
//!
//! Defines the keyboard shortcuts of the registration form, used both by the
//! handler and by the hint line at the bottom of the screen.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::form::FormStep;

/// A keybinding definition
#[derive(Debug, Clone)]
pub struct Keybinding {
    /// The key code
    pub key: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
    /// Description of what the key does
    pub description: &'static str,
    /// Context where this keybinding is active
    pub context: KeyContext,
}

/// Context in which a keybinding is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Active everywhere
    Global,
    /// Active before the last step
    Navigation,
    /// Active on the account step
    Account,
    /// Active while a toast is shown
    Toast,
}

/// All keybindings
pub static KEYBINDINGS: &[Keybinding] = &[
    Keybinding {
        key: KeyCode::Tab,
        modifiers: KeyModifiers::NONE,
        description: "Próximo campo",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::BackTab,
        modifiers: KeyModifiers::SHIFT,
        description: "Campo anterior",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Up,
        modifiers: KeyModifiers::NONE,
        description: "Alterar opção",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Próximo",
        context: KeyContext::Navigation,
    },
    Keybinding {
        key: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        description: "Enviar",
        context: KeyContext::Account,
    },
    Keybinding {
        key: KeyCode::Char('p'),
        modifiers: KeyModifiers::CONTROL,
        description: "Mostrar senha",
        context: KeyContext::Account,
    },
    Keybinding {
        key: KeyCode::Esc,
        modifiers: KeyModifiers::NONE,
        description: "Voltar",
        context: KeyContext::Global,
    },
    Keybinding {
        key: KeyCode::Char('d'),
        modifiers: KeyModifiers::CONTROL,
        description: "Fechar aviso",
        context: KeyContext::Toast,
    },
    Keybinding {
        key: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        description: "Sair",
        context: KeyContext::Global,
    },
];

/// Get keybindings for a specific context
pub fn get_keybindings(context: KeyContext) -> Vec<&'static Keybinding> {
    KEYBINDINGS
        .iter()
        .filter(|kb| kb.context == context || kb.context == KeyContext::Global)
        .collect()
}

/// Keybindings that apply on `step`, plus the toast ones when `toast_shown`
pub fn hints_for(step: FormStep, toast_shown: bool) -> Vec<&'static Keybinding> {
    let context = if step.is_last() {
        KeyContext::Account
    } else {
        KeyContext::Navigation
    };
    let mut bindings = get_keybindings(context);
    if toast_shown {
        bindings.extend(KEYBINDINGS.iter().filter(|kb| kb.context == KeyContext::Toast));
    }
    bindings
}

/// Format a keybinding for display
pub fn format_keybinding(kb: &Keybinding) -> String {
    let mut parts = Vec::new();

    if kb.modifiers.contains(KeyModifiers::CONTROL) {
        parts.push("Ctrl");
    }
    if kb.modifiers.contains(KeyModifiers::ALT) {
        parts.push("Alt");
    }
    if kb.modifiers.contains(KeyModifiers::SHIFT) {
        // Only show Shift for non-character keys
        if !matches!(kb.key, KeyCode::Char(_)) {
            parts.push("Shift");
        }
    }

    let key_str = match kb.key {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab | KeyCode::BackTab => "Tab".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Up => "↑↓".to_string(),
        _ => format!("{:?}", kb.key),
    };

    parts.push(&key_str);
    parts.join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_keybinding() {
        let quit = KEYBINDINGS
            .iter()
            .find(|kb| kb.description == "Sair")
            .unwrap();
        assert_eq!(format_keybinding(quit), "Ctrl+c");

        let back = KEYBINDINGS
            .iter()
            .find(|kb| kb.key == KeyCode::BackTab)
            .unwrap();
        assert_eq!(format_keybinding(back), "Shift+Tab");
    }

    #[test]
    fn test_enter_means_submit_only_on_last_step() {
        let first = hints_for(FormStep::Personal, false);
        assert!(first.iter().any(|kb| kb.description == "Próximo"));
        assert!(!first.iter().any(|kb| kb.description == "Enviar"));

        let last = hints_for(FormStep::Account, false);
        assert!(last.iter().any(|kb| kb.description == "Enviar"));
        assert!(last.iter().any(|kb| kb.description == "Mostrar senha"));
    }

    #[test]
    fn test_toast_hint_only_when_shown() {
        assert!(!hints_for(FormStep::Address, false)
            .iter()
            .any(|kb| kb.context == KeyContext::Toast));
        assert!(hints_for(FormStep::Address, true)
            .iter()
            .any(|kb| kb.context == KeyContext::Toast));
    }
}
