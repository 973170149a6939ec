//! `parlor characters`: show the cast.

use anyhow::Result;
use comfy_table::{presets, Cell, Color, ContentArrangement, Table};
use console::style;

use parlor_core::character::default_characters;
use parlor_types::character::{parse_hex_color, Character};

/// Print the character roster as a table, or as JSON.
pub fn list_characters(json: bool) -> Result<()> {
    let characters = default_characters();

    if json {
        println!("{}", serde_json::to_string_pretty(&characters)?);
        return Ok(());
    }

    println!();
    println!("  {} characters", style(characters.len()).cyan().bold());
    println!();
    println!("{}", character_table(&characters));
    println!();
    println!(
        "  {}",
        style("Start chatting with: parlor chat --character <slug>").dim()
    );
    println!();
    Ok(())
}

pub(crate) fn character_table(characters: &[Character]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("#").fg(Color::White),
        Cell::new("Name").fg(Color::White),
        Cell::new("Slug").fg(Color::White),
        Cell::new("Tagline").fg(Color::White),
        Cell::new("Opens with").fg(Color::White),
    ]);

    for (index, character) in characters.iter().enumerate() {
        let name_color = parse_hex_color(&character.theme.name_label)
            .map(|(r, g, b)| Color::Rgb { r, g, b })
            .unwrap_or(Color::Cyan);

        table.add_row(vec![
            Cell::new(index),
            Cell::new(&character.name).fg(name_color),
            Cell::new(&character.slug).fg(Color::DarkGrey),
            Cell::new(&character.tagline),
            Cell::new(&character.standing_question).fg(Color::DarkGrey),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lists_every_character() {
        let characters = default_characters();
        let rendered = character_table(&characters).to_string();
        for character in &characters {
            assert!(rendered.contains(&character.slug), "missing {}", character.slug);
        }
    }
}
