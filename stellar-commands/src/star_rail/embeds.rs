use stellar_api::model::{Character, LightCone, Player, ProfileData, RelicScore, RelicSet, Stat};
use stellar_utils::embed::{ERROR_EMBED_COLOR, EmbedCard};
use stellar_utils::formatting::{group_thousands, star_rating, truncate_with_ellipsis};

pub const PROFILE_COLOR: u32 = 0x00_ff_00;
pub const FIVE_STAR_COLOR: u32 = 0x99_32_cc;
pub const FOUR_STAR_COLOR: u32 = 0x41_69_e1;

pub const WEB_FOOTER: &str = "🌐 Visit our web version at https://app.hsr-profile.com/";
pub const SIGNATURE_MAX_CHARS: usize = 50;

pub const PLAYER_INFO_FIELD: &str = "📊 Player Info";
pub const SPACE_INFO_FIELD: &str = "🏆 Space Info";
pub const CHARACTERS_FIELD: &str = "👥 Characters";
pub const BASIC_INFO_FIELD: &str = "📋 Basic Info";
pub const LIGHT_CONE_FIELD: &str = "🔆 Light Cone";
pub const STATS_FIELD: &str = "📊 Character Stats";
pub const RELIC_SETS_FIELD: &str = "🛡️ Relic Sets";
pub const RELIC_SCORE_FIELD: &str = "🏆 Relic Score";

pub fn profile_summary_card(profile: &ProfileData) -> EmbedCard {
    let player = &profile.player;

    EmbedCard::new(format!("🌟 {} (UID: {})", player.nickname, player.uid))
        .color(PROFILE_COLOR)
        .field(PLAYER_INFO_FIELD, player_info(player))
        .field(SPACE_INFO_FIELD, space_info(player))
        .field(CHARACTERS_FIELD, character_list(&profile.characters))
        .thumbnail(player.avatar.icon.clone())
        .footer(WEB_FOOTER)
}

pub fn character_detail_card(player: &Player, character: &Character) -> EmbedCard {
    let color = if character.is_five_star() {
        FIVE_STAR_COLOR
    } else {
        FOUR_STAR_COLOR
    };

    EmbedCard::new(format!("{} (E{})", character.name, character.rank))
        .description(format!("{} ({})", player.nickname, player.uid))
        .color(color)
        .field(BASIC_INFO_FIELD, basic_info(character))
        .field(LIGHT_CONE_FIELD, light_cone_info(character.light_cone.as_ref()))
        .field(STATS_FIELD, stats_info(&character.final_stats))
        .field(RELIC_SETS_FIELD, relic_sets_info(&character.relic_sets))
        .field(RELIC_SCORE_FIELD, relic_score_info(character.relic_score.as_ref()))
        .thumbnail(character.portrait.clone())
        .footer(WEB_FOOTER)
}

pub fn profile_not_found_card(detail: &str) -> EmbedCard {
    EmbedCard::new("Profile Not Found")
        .description(format!(
            "**{}**\nPlease check your UID and try again.",
            detail
        ))
        .color(ERROR_EMBED_COLOR)
        .footer("Make sure your profile is public and UID is correct")
}

pub fn server_error_card(uid: &str) -> EmbedCard {
    EmbedCard::new("Server Error")
        .description(format!(
            "**Server is experiencing issues**\nPlease try again later or check if the UID {} is valid.",
            uid
        ))
        .color(ERROR_EMBED_COLOR)
        .footer("This might be due to invalid UID or server maintenance")
}

pub fn usage_message(usage: &str) -> String {
    format!("Usage: `{usage}`")
}

pub fn invalid_uid_message(uid: &str) -> String {
    format!("Invalid UID: {uid}")
}

pub fn http_error_message(status: u16) -> String {
    format!("HTTP Error: {status}")
}

pub fn error_message(description: &str) -> String {
    format!("Error: {description}")
}

pub fn invalid_character_message(total: usize) -> String {
    format!("Invalid character number. Please use 1-{total}")
}

/// `Base` stats and SPD are flat numbers; everything else is a percentage.
pub fn stat_line(stat: &Stat) -> String {
    if stat.name.contains("Base") || stat.name == "SPD" {
        format!("{}: {}", stat.name, group_thousands(stat.value.round() as i64))
    } else {
        format!("{}: {:.1}%", stat.name, stat.value)
    }
}

fn player_info(player: &Player) -> String {
    format!(
        "Level: {}\nWorld Level: {}\nFriends: {}\nSignature: {}",
        player.level,
        player.world_level,
        player.friend_count,
        truncate_with_ellipsis(&player.signature, SIGNATURE_MAX_CHARS)
    )
}

fn space_info(player: &Player) -> String {
    let space = &player.space_info;
    format!(
        "Universe Level: {}\nAvatars: {}\nLight Cones: {}\nRelics: {}\nAchievements: {}",
        space.universe_level,
        space.avatar_count,
        space.light_cone_count,
        space.relic_count,
        space.achievement_count
    )
}

fn character_list(characters: &[Character]) -> String {
    if characters.is_empty() {
        return "No characters on display".to_owned();
    }

    characters
        .iter()
        .enumerate()
        .map(|(idx, character)| {
            format!(
                "{}. {} (Lv.{}) - E{}",
                idx + 1,
                character.name,
                character.level,
                character.rank
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn basic_info(character: &Character) -> String {
    format!(
        "Level: {}\nPath: {}\nElement: {}\nRarity: {}",
        character.level,
        character.path.name,
        character.element.name,
        star_rating(character.rarity)
    )
}

fn light_cone_info(light_cone: Option<&LightCone>) -> String {
    match light_cone {
        Some(cone) => format!(
            "**{}** (S{})\nLevel: {}\nRarity: {}",
            cone.name,
            cone.rank,
            cone.level,
            star_rating(cone.rarity)
        ),
        None => "No Light Cone equipped".to_owned(),
    }
}

fn stats_info(stats: &[Stat]) -> String {
    if stats.is_empty() {
        return "Stats not available".to_owned();
    }

    stats.iter().map(stat_line).collect::<Vec<_>>().join("\n")
}

fn relic_sets_info(sets: &[RelicSet]) -> String {
    if sets.is_empty() {
        return "No relic sets equipped".to_owned();
    }

    sets.iter()
        .map(|set| format!("{} ({}pc)", set.name, set.num))
        .collect::<Vec<_>>()
        .join("\n")
}

fn relic_score_info(score: Option<&RelicScore>) -> String {
    match score {
        Some(score) => format!(
            "Rank: **{}**\nTotal: {}\nAverage: {}",
            score.rank, score.total_score, score.average_score
        ),
        None => "Relic score not available".to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use stellar_api::model::{
        Character, LightCone, NamedRef, Player, ProfileData, RelicScore, RelicSet, Stat,
    };

    use super::{
        BASIC_INFO_FIELD, CHARACTERS_FIELD, FIVE_STAR_COLOR, FOUR_STAR_COLOR, LIGHT_CONE_FIELD,
        PLAYER_INFO_FIELD, PROFILE_COLOR, RELIC_SCORE_FIELD, RELIC_SETS_FIELD, SPACE_INFO_FIELD,
        STATS_FIELD, WEB_FOOTER, character_detail_card, profile_not_found_card,
        profile_summary_card, server_error_card, stat_line,
    };

    fn player() -> Player {
        let mut player = Player {
            nickname: "Stelle".to_owned(),
            uid: "800000001".to_owned(),
            level: 70,
            world_level: 6,
            friend_count: 42,
            signature: "Trailblazing".to_owned(),
            ..Default::default()
        };
        player.avatar.icon = "https://cdn.example/avatar.png".to_owned();
        player.space_info.universe_level = 9;
        player.space_info.avatar_count = 48;
        player.space_info.light_cone_count = 120;
        player.space_info.relic_count = 1500;
        player.space_info.achievement_count = 600;
        player
    }

    fn character(name: &str, rarity: u32) -> Character {
        Character {
            name: name.to_owned(),
            level: 80,
            rank: 2,
            rarity,
            path: NamedRef {
                name: "Nihility".to_owned(),
            },
            element: NamedRef {
                name: "Lightning".to_owned(),
            },
            portrait: format!("https://cdn.example/{name}.png"),
            ..Default::default()
        }
    }

    fn stat(name: &str, value: f64) -> Stat {
        Stat {
            name: name.to_owned(),
            value,
        }
    }

    #[test]
    fn summary_card_lists_sections_in_order() {
        let card = profile_summary_card(&ProfileData {
            player: player(),
            characters: vec![character("Kafka", 5), character("Pela", 4)],
        });

        assert_eq!(card.title, "🌟 Stelle (UID: 800000001)");
        assert_eq!(card.color, PROFILE_COLOR);
        let names = card
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect::<Vec<_>>();
        assert_eq!(names, [PLAYER_INFO_FIELD, SPACE_INFO_FIELD, CHARACTERS_FIELD]);
        assert_eq!(
            card.field_value(PLAYER_INFO_FIELD),
            Some("Level: 70\nWorld Level: 6\nFriends: 42\nSignature: Trailblazing")
        );
        assert_eq!(
            card.field_value(SPACE_INFO_FIELD),
            Some("Universe Level: 9\nAvatars: 48\nLight Cones: 120\nRelics: 1500\nAchievements: 600")
        );
        assert_eq!(card.thumbnail.as_deref(), Some("https://cdn.example/avatar.png"));
        assert_eq!(card.footer.as_deref(), Some(WEB_FOOTER));
    }

    #[test]
    fn character_list_has_one_indexed_line_per_character() {
        let characters = (0..7)
            .map(|idx| character(&format!("Unit {idx}"), 4))
            .collect::<Vec<_>>();
        let card = profile_summary_card(&ProfileData {
            player: player(),
            characters,
        });

        let list = card.field_value(CHARACTERS_FIELD).unwrap();
        let lines = list.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 7);
        for (idx, line) in lines.iter().enumerate() {
            assert!(line.starts_with(&format!("{}. ", idx + 1)));
        }
        assert_eq!(lines[0], "1. Unit 0 (Lv.80) - E2");
    }

    #[test]
    fn empty_showcase_has_single_placeholder_line() {
        let card = profile_summary_card(&ProfileData {
            player: player(),
            characters: Vec::new(),
        });

        let list = card.field_value(CHARACTERS_FIELD).unwrap();
        assert_eq!(list, "No characters on display");
        assert_eq!(list.lines().count(), 1);
        assert!(!list.starts_with("1. "));
    }

    #[test]
    fn long_signatures_are_truncated() {
        let mut player = player();
        player.signature = "x".repeat(80);
        let card = profile_summary_card(&ProfileData {
            player,
            characters: Vec::new(),
        });

        let info = card.field_value(PLAYER_INFO_FIELD).unwrap();
        assert!(info.ends_with(&format!("Signature: {}...", "x".repeat(50))));
    }

    #[test]
    fn stat_lines_follow_name_rules() {
        assert_eq!(stat_line(&stat("Base HP", 1_234.0)), "Base HP: 1,234");
        assert_eq!(stat_line(&stat("Base ATK", 987.6)), "Base ATK: 988");
        assert_eq!(stat_line(&stat("SPD", 134.0)), "SPD: 134");
        assert_eq!(stat_line(&stat("CRIT Rate", 68.456)), "CRIT Rate: 68.5%");
        assert_eq!(stat_line(&stat("SPD Boost", 6.0)), "SPD Boost: 6.0%");
        assert_eq!(stat_line(&stat("Effect Hit Rate", 0.0)), "Effect Hit Rate: 0.0%");
    }

    #[test]
    fn detail_card_with_full_build() {
        let mut kafka = character("Kafka", 5);
        kafka.light_cone = Some(LightCone {
            name: "Patience Is All You Need".to_owned(),
            rank: 1,
            level: 80,
            rarity: 5,
        });
        kafka.final_stats = vec![stat("Base HP", 1086.0), stat("CRIT DMG", 50.0)];
        kafka.relic_sets = vec![
            RelicSet {
                name: "Band of Sizzling Thunder".to_owned(),
                num: 4,
            },
            RelicSet {
                name: "Firmament Frontline: Glamoth".to_owned(),
                num: 2,
            },
        ];
        kafka.relic_score = Some(RelicScore {
            rank: "SS".to_owned(),
            total_score: "182.5".to_owned(),
            average_score: "30.4".to_owned(),
        });

        let card = character_detail_card(&player(), &kafka);

        assert_eq!(card.title, "Kafka (E2)");
        assert_eq!(card.description.as_deref(), Some("Stelle (800000001)"));
        assert_eq!(card.color, FIVE_STAR_COLOR);
        assert_eq!(
            card.field_value(BASIC_INFO_FIELD),
            Some("Level: 80\nPath: Nihility\nElement: Lightning\nRarity: ⭐⭐⭐⭐⭐")
        );
        assert_eq!(
            card.field_value(LIGHT_CONE_FIELD),
            Some("**Patience Is All You Need** (S1)\nLevel: 80\nRarity: ⭐⭐⭐⭐⭐")
        );
        assert_eq!(
            card.field_value(STATS_FIELD),
            Some("Base HP: 1,086\nCRIT DMG: 50.0%")
        );
        assert_eq!(
            card.field_value(RELIC_SETS_FIELD),
            Some("Band of Sizzling Thunder (4pc)\nFirmament Frontline: Glamoth (2pc)")
        );
        assert_eq!(
            card.field_value(RELIC_SCORE_FIELD),
            Some("Rank: **SS**\nTotal: 182.5\nAverage: 30.4")
        );
        assert_eq!(card.thumbnail.as_deref(), Some("https://cdn.example/Kafka.png"));
        assert_eq!(card.footer.as_deref(), Some(WEB_FOOTER));
    }

    #[test]
    fn detail_card_always_emits_placeholders() {
        let card = character_detail_card(&player(), &character("Pela", 4));

        assert_eq!(card.color, FOUR_STAR_COLOR);
        assert_eq!(card.fields.len(), 5);
        assert_eq!(card.field_value(LIGHT_CONE_FIELD), Some("No Light Cone equipped"));
        assert_eq!(card.field_value(STATS_FIELD), Some("Stats not available"));
        assert_eq!(card.field_value(RELIC_SETS_FIELD), Some("No relic sets equipped"));
        assert_eq!(
            card.field_value(RELIC_SCORE_FIELD),
            Some("Relic score not available")
        );
    }

    #[test]
    fn error_cards_mention_next_steps() {
        let not_found = profile_not_found_card("Profile not public");
        let server = server_error_card("800000000");

        assert_eq!(not_found.title, "Profile Not Found");
        assert!(not_found.description.as_deref().unwrap().contains("**Profile not public**"));
        assert!(not_found.description.as_deref().unwrap().contains("check your UID"));
        assert_eq!(server.title, "Server Error");
        assert!(server.description.as_deref().unwrap().contains("UID 800000000 is valid"));
        assert!(server.footer.as_deref().unwrap().contains("server maintenance"));
    }
}
