use std::fmt;

/// Standard remark an element makes when an operation cannot go ahead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Notice {
    #[strum(to_string = "There is no field ahead of me")]
    NoFieldAhead,
    #[strum(to_string = "There is no field behind me")]
    NoFieldBehind,
    #[strum(to_string = "There is no field to my left")]
    NoFieldLeft,
    #[strum(to_string = "There is no field to my right")]
    NoFieldRight,
    #[strum(to_string = "There is nothing to smoke here")]
    NothingToSmoke,
    #[strum(to_string = "There is no grass here")]
    NoGrass,
    #[strum(to_string = "I have to eat first")]
    MustEatFirst,
    #[strum(to_string = "There is no calf here")]
    NoCalf,
}

/// Content of an element's message slot.
///
/// The slot holds one value at a time; each new message overwrites the
/// previous one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Message {
    #[default]
    Empty,
    Text(String),
    Notice(Notice),
}

impl Message {
    pub fn is_empty(&self) -> bool {
        matches!(self, Message::Empty)
    }

    pub fn notice(&self) -> Option<Notice> {
        match self {
            Message::Notice(notice) => Some(*notice),
            _ => None,
        }
    }
}

impl From<Notice> for Message {
    fn from(notice: Notice) -> Self {
        Message::Notice(notice)
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_owned())
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Empty => Ok(()),
            Message::Text(text) => f.write_str(text),
            Message::Notice(notice) => write!(f, "{notice}"),
        }
    }
}
