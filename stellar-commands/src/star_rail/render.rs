use stellar_api::Lookup;
use stellar_api::model::{Character, ProfileData};
use stellar_utils::reply::Reply;
use tracing::{debug, warn};

use crate::star_rail::embeds::{
    character_detail_card, error_message, http_error_message, invalid_character_message,
    invalid_uid_message, profile_not_found_card, profile_summary_card, server_error_card,
};

/// Reply for `profile <uid>`.
pub fn profile_reply(uid: &str, lookup: anyhow::Result<Lookup>) -> Reply {
    match resolve_profile(uid, lookup) {
        Ok(profile) => profile_summary_card(&profile).into(),
        Err(reply) => reply,
    }
}

/// Reply for `character <uid> <index>`; `index` is 1-based.
pub fn character_reply(uid: &str, index: i64, lookup: anyhow::Result<Lookup>) -> Reply {
    let profile = match resolve_profile(uid, lookup) {
        Ok(profile) => profile,
        Err(reply) => return reply,
    };

    match select_character(&profile.characters, index) {
        Some(character) => character_detail_card(&profile.player, character).into(),
        None => {
            debug!(uid, index, total = profile.characters.len(), "character index out of range");
            Reply::text(invalid_character_message(profile.characters.len()))
        }
    }
}

/// Plain-text reply used when Discord refuses the rendered one.
pub fn send_failure_reply(err: &impl std::fmt::Display) -> Reply {
    Reply::text(error_message(&format!("{err:#}")))
}

/// Pick a character by 1-based position.
pub fn select_character(characters: &[Character], index: i64) -> Option<&Character> {
    let position = usize::try_from(index).ok()?.checked_sub(1)?;
    characters.get(position)
}

/// Unwrap a found profile, or turn every other outcome into its reply.
fn resolve_profile(uid: &str, lookup: anyhow::Result<Lookup>) -> Result<ProfileData, Reply> {
    let lookup = match lookup {
        Ok(lookup) => lookup,
        Err(err) => {
            warn!(?err, uid, "profile lookup failed");
            return Err(Reply::text(error_message(&format!("{err:#}"))));
        }
    };

    match lookup {
        Lookup::Found(profile) => Ok(profile),
        Lookup::Rejected { message } => {
            debug!(uid, %message, "profile service rejected lookup");
            Err(Reply::text(error_message(&message)))
        }
        Lookup::NotFound { detail } => Err(profile_not_found_card(&detail).into()),
        Lookup::InvalidUid => Err(Reply::text(invalid_uid_message(uid))),
        Lookup::ServerError => Err(server_error_card(uid).into()),
        Lookup::HttpError { status } => Err(Reply::text(http_error_message(status))),
    }
}
