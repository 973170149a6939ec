//! `parlor prompt`: print the prompt a fresh conversation would send.

use anyhow::Result;

use parlor_core::character::{default_characters, find_character};
use parlor_core::chat::session::SessionState;
use parlor_core::prompt::PromptBuilder;
use parlor_types::config::GlobalConfig;

/// Print the prompt for `text` as the visitor's first message to `selector`.
pub fn show_prompt(config: &GlobalConfig, selector: &str, text: &str, json: bool) -> Result<()> {
    let (slug, prompt) = first_turn_prompt(config, selector, text)?;

    if json {
        let body = serde_json::json!({
            "character": slug,
            "prompt": prompt,
        });
        println!("{}", serde_json::to_string_pretty(&body)?);
    } else {
        println!("{prompt}");
    }
    Ok(())
}

/// Build the prompt exactly as the first submit to a freshly seeded
/// conversation would.
fn first_turn_prompt(config: &GlobalConfig, selector: &str, text: &str) -> Result<(String, String)> {
    let roster = default_characters();
    let index = find_character(&roster, selector)?;

    let mut state = SessionState::new(roster)?;
    state.select(index);

    let character = state.current_character();
    let builder = PromptBuilder::new(config.prompt.clone());
    let prompt = builder.build(character, state.current_conversation().messages(), text);
    Ok((character.slug.clone(), prompt))
}
