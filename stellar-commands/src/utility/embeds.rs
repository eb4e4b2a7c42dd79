use stellar_utils::embed::EmbedCard;
use stellar_utils::formatting::capitalize;

use crate::CommandMeta;

pub const HELP_TITLE: &str = "Available Commands";

pub fn unknown_category_message(wanted_category: &str, valid_categories: &[&str]) -> String {
    let valid = valid_categories
        .iter()
        .map(|category| capitalize(category))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Unknown category: {}\nValid categories: {}",
        capitalize(wanted_category),
        valid
    )
}

pub fn grouped_help_description(commands: &[&CommandMeta]) -> String {
    let mut out = String::new();
    let mut current_category: Option<&str> = None;

    for command in commands {
        if current_category != Some(command.category) {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&format!("**{}**\n", capitalize(command.category)));
            current_category = Some(command.category);
        }

        out.push_str(&format!("`{}`: {}\n", command.name, command.desc));
    }

    if out.is_empty() {
        out.push_str("No commands available.");
    }

    out.trim_end().to_owned()
}

pub fn help_card(commands: &[&CommandMeta]) -> EmbedCard {
    EmbedCard::new(HELP_TITLE)
        .description(grouped_help_description(commands))
        .footer("Use !usage <command> for argument details")
}
