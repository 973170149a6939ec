//! Built-in character presets.
//!
//! Provides the five personas available on every start.

use parlor_types::character::{Avatar, Character, ThemePalette};

fn palette(bubble_background: &str, bubble_text: &str, input_box: &str, name_label: &str) -> ThemePalette {
    ThemePalette {
        bubble_background: bubble_background.to_string(),
        bubble_text: bubble_text.to_string(),
        input_box: input_box.to_string(),
        name_label: name_label.to_string(),
    }
}

fn avatar(slug: &str) -> Avatar {
    Avatar {
        default_image: format!("avatars/{slug}.png"),
        selected_image: format!("avatars/{slug}-selected.png"),
    }
}

/// Returns the built-in character roster, in picker order.
///
/// - **Ada**: retired starship navigator, wistful and curious
/// - **Juniper**: greenhouse botanist, gentle and patient
/// - **Mo**: night-market cook, loud and generous
/// - **Sable**: rain-soaked private detective, dry and suspicious
/// - **Pip**: tinkering workshop robot, eager and literal
pub fn default_characters() -> Vec<Character> {
    vec![
        Character {
            slug: "ada".to_string(),
            name: "Ada".to_string(),
            tagline: "Retired starship navigator".to_string(),
            persona: "You are Ada, a retired starship navigator who spent forty years charting \
                routes between distant colonies. You speak warmly, with a hint of nostalgia, and \
                you love comparing everyday things to the stars."
                .to_string(),
            standing_question: "If you could set a course for anywhere tomorrow, where would you go?"
                .to_string(),
            theme: palette("#1e293b", "#e2e8f0", "#0f172a", "#38bdf8"),
            avatar: avatar("ada"),
        },
        Character {
            slug: "juniper".to_string(),
            name: "Juniper".to_string(),
            tagline: "Greenhouse botanist".to_string(),
            persona: "You are Juniper, a botanist who runs a small greenhouse at the edge of town. \
                You are gentle and patient, you notice small details, and you often relate \
                people's lives to how plants grow."
                .to_string(),
            standing_question: "What's been growing in your life lately?".to_string(),
            theme: palette("#ecfccb", "#1a2e05", "#f7fee7", "#4d7c0f"),
            avatar: avatar("juniper"),
        },
        Character {
            slug: "mo".to_string(),
            name: "Mo".to_string(),
            tagline: "Night-market cook".to_string(),
            persona: "You are Mo, a cook who runs the busiest noodle stall at the night market. \
                You are loud, generous, and funny, and you judge everything by whether it would \
                taste good."
                .to_string(),
            standing_question: "What's the best thing you've eaten this week?".to_string(),
            theme: palette("#7c2d12", "#fff7ed", "#431407", "#fb923c"),
            avatar: avatar("mo"),
        },
        Character {
            slug: "sable".to_string(),
            name: "Sable".to_string(),
            tagline: "Private detective".to_string(),
            persona: "You are Sable, a private detective working out of a cramped office above a \
                jazz bar. You are dry, observant, and a little suspicious of everyone, but you \
                have a soft spot for people in trouble."
                .to_string(),
            standing_question: "So what brings you to my office this late?".to_string(),
            theme: palette("#18181b", "#d4d4d8", "#09090b", "#a1a1aa"),
            avatar: avatar("sable"),
        },
        Character {
            slug: "pip".to_string(),
            name: "Pip".to_string(),
            tagline: "Workshop robot".to_string(),
            persona: "You are Pip, a small workshop robot who loves building gadgets. You are \
                eager and cheerful, you take things a bit too literally, and you get excited \
                about anything with gears."
                .to_string(),
            standing_question: "Want to help me build something today?".to_string(),
            theme: palette("#fef9c3", "#422006", "#fefce8", "#ca8a04"),
            avatar: avatar("pip"),
        },
    ]
}
