//! Property-based tests for the controller and the theme math

use proptest::prelude::*;
use widget_calc::core::{Controller, EMPTY_READOUT};
use widget_calc::theme::{adjust_brightness, is_dark_theme, ThemeColor};

// ===== Strategy definitions =====

/// Any key or button the widget may receive, valid or not
fn token_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        4 => prop::sample::select(vec!["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]),
        1 => Just("."),
        1 => Just("%"),
        2 => prop::sample::select(vec!["+", "-", "*", "/"]),
        1 => prop::sample::select(vec!["=", "Enter"]),
        1 => Just("Backspace"),
        1 => prop::sample::select(vec!["CLEAR", "OFF"]),
        1 => prop::sample::select(vec!["a", "Shift", "ArrowUp", " ", "٣"]),
    ]
}

/// Keys the controller must ignore
fn rejected_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Shift".to_string()),
        Just("Tab".to_string()),
        "[a-zA-Z]",
        "[!@#$^&()]",
    ]
}

fn hex_strategy() -> impl Strategy<Value = String> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| format!("#{r:02x}{g:02x}{b:02x}"))
}

// ===== Controller properties =====

proptest! {
    /// Any well-formed operand typed key by key is echoed verbatim
    #[test]
    fn prop_operand_echoed(operand in r"[0-9]{0,6}\.?[0-9]{0,6}%?") {
        let mut controller = Controller::new();
        for c in operand.chars() {
            controller.handle(&c.to_string());
        }
        prop_assert_eq!(&controller.state().current, &operand);
        let expected = if operand.is_empty() { EMPTY_READOUT } else { operand.as_str() };
        prop_assert_eq!(controller.readout(), expected);
    }

    /// The operand never holds more than one point or percent sign
    #[test]
    fn prop_operand_stays_well_formed(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut controller = Controller::new();
        for token in tokens {
            controller.handle(token);
            let current = &controller.state().current;
            prop_assert!(current.matches('.').count() <= 1, "{current}");
            prop_assert!(current.matches('%').count() <= 1, "{current}");
        }
    }

    /// An empty state always reads "0"
    #[test]
    fn prop_empty_state_reads_zero(tokens in prop::collection::vec(token_strategy(), 0..40)) {
        let mut controller = Controller::new();
        for token in tokens {
            controller.handle(token);
            if controller.state().is_empty() {
                prop_assert_eq!(controller.readout(), EMPTY_READOUT);
            }
        }
    }

    /// Rejected keys change nothing and produce no effects
    #[test]
    fn prop_rejected_keys_are_inert(
        prefix in prop::collection::vec(token_strategy(), 0..20),
        key in rejected_strategy(),
    ) {
        let mut controller = Controller::new();
        for token in prefix {
            controller.handle(token);
        }
        let before = controller.state().clone();
        let history = controller.history().len();

        let effects = controller.handle(&key);

        prop_assert!(effects.is_empty());
        prop_assert_eq!(controller.state(), &before);
        prop_assert_eq!(controller.history().len(), history);
    }

    /// History only ever grows
    #[test]
    fn prop_history_append_only(tokens in prop::collection::vec(token_strategy(), 0..60)) {
        let mut controller = Controller::new();
        let mut seen = Vec::new();
        for token in tokens {
            controller.handle(token);
            let lines = controller.history().lines();
            prop_assert!(lines.len() >= seen.len());
            prop_assert_eq!(&lines[..seen.len()], &seen[..]);
            seen = lines;
        }
    }

    /// Adding two integers matches integer addition
    #[test]
    fn prop_integer_addition(a in 0u32..100_000, b in 0u32..100_000) {
        let mut controller = Controller::new();
        let tokens: Vec<String> = a
            .to_string()
            .chars()
            .map(String::from)
            .chain(std::iter::once("+".to_string()))
            .chain(b.to_string().chars().map(String::from))
            .chain(std::iter::once("=".to_string()))
            .collect();
        for token in &tokens {
            controller.handle(token);
        }
        let expected = u64::from(a) + u64::from(b);
        prop_assert_eq!(controller.readout(), expected.to_string());
        let expected_line = format!("{a} + {b} = {expected}");
        prop_assert_eq!(controller.history().last().map(|e| e.text.as_str()), Some(expected_line.as_str()));
    }
}

// ===== Theme properties =====

proptest! {
    /// A zero shift returns the same color
    #[test]
    fn prop_zero_shift_is_identity(hex in hex_strategy()) {
        prop_assert_eq!(adjust_brightness(&hex, 0.0).unwrap(), hex);
    }

    /// Full darkening reaches black, doubling saturates
    #[test]
    fn prop_shift_extremes(hex in hex_strategy()) {
        prop_assert_eq!(adjust_brightness(&hex, -100.0).unwrap(), "#000000");
        let brighter = ThemeColor::from_hex(&adjust_brightness(&hex, 100.0).unwrap()).unwrap();
        let base = ThemeColor::from_hex(&hex).unwrap();
        prop_assert!(brighter.r >= base.r && brighter.g >= base.g && brighter.b >= base.b);
    }

    /// Output is always #rrggbb, even for huge shifts
    #[test]
    fn prop_shift_output_shape(hex in hex_strategy(), percent in -1000.0f64..1000.0) {
        let out = adjust_brightness(&hex, percent).unwrap();
        prop_assert_eq!(out.len(), 7);
        prop_assert!(out.starts_with('#'));
        prop_assert!(out[1..].chars().all(|c| c.is_ascii_hexdigit()));
    }

    /// Darkness follows the weighted brightness formula
    #[test]
    fn prop_is_dark_matches_formula(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = format!("#{r:02x}{g:02x}{b:02x}");
        let brightness = (f64::from(r) * 299.0 + f64::from(g) * 587.0 + f64::from(b) * 114.0) / 1000.0;
        prop_assert_eq!(is_dark_theme(&hex).unwrap(), brightness < 128.0);
    }
}
