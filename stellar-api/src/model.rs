use serde::{Deserialize, Deserializer};

/// Envelope returned by the profile service on HTTP 200.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileResponse {
    pub status: String,
    pub data: Option<ProfileData>,
    pub message: Option<String>,
}

impl ProfileResponse {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProfileData {
    pub player: Player,
    pub characters: Vec<Character>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Player {
    pub nickname: String,
    #[serde(deserialize_with = "string_or_number")]
    pub uid: String,
    pub level: u32,
    pub world_level: u32,
    pub friend_count: u32,
    pub signature: String,
    pub avatar: Avatar,
    pub space_info: SpaceInfo,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Avatar {
    pub icon: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct SpaceInfo {
    pub universe_level: u32,
    pub avatar_count: u32,
    pub light_cone_count: u32,
    pub relic_count: u32,
    pub achievement_count: u32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Character {
    pub name: String,
    pub level: u32,
    /// Eidolon count, 0 through 6.
    pub rank: u32,
    pub rarity: u32,
    pub path: NamedRef,
    pub element: NamedRef,
    pub portrait: String,
    pub light_cone: Option<LightCone>,
    #[serde(deserialize_with = "null_as_default")]
    pub final_stats: Vec<Stat>,
    #[serde(deserialize_with = "null_as_default")]
    pub relic_sets: Vec<RelicSet>,
    pub relic_score: Option<RelicScore>,
}

impl Character {
    pub fn is_five_star(&self) -> bool {
        self.rarity == 5
    }
}

/// Path and element objects only carry a display name we care about.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct NamedRef {
    pub name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct LightCone {
    pub name: String,
    /// Superimposition, 1 through 5.
    pub rank: u32,
    pub level: u32,
    pub rarity: u32,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Stat {
    pub name: String,
    pub value: f64,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelicSet {
    pub name: String,
    pub num: u32,
}

/// Scores are shown exactly as the service formats them.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct RelicScore {
    #[serde(deserialize_with = "string_or_number")]
    pub rank: String,
    #[serde(deserialize_with = "string_or_number")]
    pub total_score: String,
    #[serde(deserialize_with = "string_or_number")]
    pub average_score: String,
}

/// Treat an explicit `null` the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        Some(Raw::Text(value)) => value,
        Some(Raw::Number(value)) => value.to_string(),
        None => String::new(),
    })
}
