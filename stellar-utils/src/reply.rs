use crate::embed::EmbedCard;

/// What a command answers with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Card(EmbedCard),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(content) => Some(content),
            Self::Card(_) => None,
        }
    }

    pub fn as_card(&self) -> Option<&EmbedCard> {
        match self {
            Self::Card(card) => Some(card),
            Self::Text(_) => None,
        }
    }

    pub fn into_create_reply(self) -> poise::CreateReply {
        match self {
            Self::Text(content) => poise::CreateReply::default().content(content),
            Self::Card(card) => poise::CreateReply::default().embed(card.to_create_embed()),
        }
    }
}

impl From<EmbedCard> for Reply {
    fn from(card: EmbedCard) -> Self {
        Self::Card(card)
    }
}
