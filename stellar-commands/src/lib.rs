pub mod star_rail;
pub mod utility;

use stellar_core::{Data, Error};

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    star_rail::profile::META,
    star_rail::character::META,
    utility::help::META,
    utility::usage::META,
    utility::ping::META,
];

pub fn commands() -> Vec<poise::Command<Data, Error>> {
    vec![
        star_rail::profile::profile(),
        star_rail::character::character(),
        utility::help::help(),
        utility::usage::usage(),
        utility::ping::ping(),
    ]
}
