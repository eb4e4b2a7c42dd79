use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x90_55_30;
/// Accent for error cards.
pub const ERROR_EMBED_COLOR: u32 = 0xff_00_00;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

/// A chat card kept as plain data so it can be inspected before sending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmbedCard {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub thumbnail: Option<String>,
    pub footer: Option<String>,
}

impl EmbedCard {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            color: DEFAULT_EMBED_COLOR,
            fields: Vec::new(),
            thumbnail: None,
            footer: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = color;
        self
    }

    /// Append a full-width field.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline: false,
        });
        self
    }

    /// Empty URLs are dropped; Discord rejects them.
    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.thumbnail = if url.trim().is_empty() {
            None
        } else {
            Some(url)
        };
        self
    }

    pub fn footer(mut self, text: impl Into<String>) -> Self {
        self.footer = Some(text.into());
        self
    }

    /// Look up a field value by its name.
    ///
    /// Only used to inspect built cards; commands send cards through
    /// [`EmbedCard::to_create_embed`].
    pub fn field_value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }

    pub fn to_create_embed(&self) -> serenity::CreateEmbed {
        let mut embed = serenity::CreateEmbed::new()
            .title(self.title.clone())
            .color(self.color);

        if let Some(description) = self.description.as_deref() {
            embed = embed.description(description);
        }

        for field in &self.fields {
            embed = embed.field(field.name.clone(), field.value.clone(), field.inline);
        }

        if let Some(url) = self.thumbnail.as_deref() {
            embed = embed.thumbnail(url);
        }

        if let Some(text) = self.footer.as_deref() {
            embed = embed.footer(serenity::CreateEmbedFooter::new(text));
        }

        embed
    }
}
