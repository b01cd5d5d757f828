/// Observable attribute named by a change event.
///
/// The set is closed so consumers can match exhaustively. Each key also has a
/// stable string id (`Display`/`AsRef<str>`), parseable with `FromStr`.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropertyKey {
    /// Field columns or rows changed.
    #[strum(to_string = "field.size")]
    Size,
    /// Cattle joined or left the field.
    #[strum(to_string = "field.cattle")]
    Cattle,
    /// A calf was placed on the field.
    #[strum(to_string = "field.calves")]
    Calves,
    /// Grass grew or was removed.
    #[strum(to_string = "field.grass")]
    Grass,
    /// The field's animation mode changed.
    #[strum(to_string = "field.animation")]
    Animation,
    #[strum(to_string = "element.message")]
    Message,
    #[strum(to_string = "element.position")]
    Position,
    #[strum(to_string = "cattle.direction")]
    Direction,
    #[strum(to_string = "cattle.milk")]
    Milk,
    #[strum(to_string = "cattle.status")]
    Status,
}

impl PropertyKey {
    pub const ALL: [PropertyKey; 10] = [
        PropertyKey::Size,
        PropertyKey::Cattle,
        PropertyKey::Calves,
        PropertyKey::Grass,
        PropertyKey::Animation,
        PropertyKey::Message,
        PropertyKey::Position,
        PropertyKey::Direction,
        PropertyKey::Milk,
        PropertyKey::Status,
    ];

    /// Returns true for keys emitted by a field rather than by an element.
    pub const fn is_field_key(self) -> bool {
        matches!(
            self,
            PropertyKey::Size
                | PropertyKey::Cattle
                | PropertyKey::Calves
                | PropertyKey::Grass
                | PropertyKey::Animation
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn string_ids_are_unique_and_round_trip() {
        let ids: HashSet<String> = PropertyKey::iter().map(|key| key.to_string()).collect();
        assert_eq!(ids.len(), PropertyKey::ALL.len());

        for key in PropertyKey::ALL {
            assert_eq!(key.as_ref().parse::<PropertyKey>(), Ok(key));
        }
        assert_eq!(PropertyKey::Grass.to_string(), "field.grass");
        assert_eq!(PropertyKey::Milk.as_ref(), "cattle.milk");
    }

    #[test]
    fn field_keys_are_the_field_prefixed_ones() {
        for key in PropertyKey::iter() {
            assert_eq!(key.is_field_key(), key.as_ref().starts_with("field."));
        }
    }
}
