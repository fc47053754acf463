use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    #[serde(rename = "S")]
    Small,
    #[serde(rename = "M")]
    Medium,
    #[serde(rename = "L")]
    Large,
}

/// Text shown for the unselected size option.
pub const SIZE_PLACEHOLDER: &str = "----Choose Size----";

impl Size {
    pub const ALL: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

    pub fn code(self) -> &'static str {
        match self {
            Size::Small => "S",
            Size::Medium => "M",
            Size::Large => "L",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Size::Small => "Small",
            Size::Medium => "Medium",
            Size::Large => "Large",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size '{0}'")]
pub struct UnknownSize(pub String);

impl FromStr for Size {
    type Err = UnknownSize;

    /// Surrounding whitespace is ignored; the code itself is case-sensitive.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "S" => Ok(Size::Small),
            "M" => Ok(Size::Medium),
            "L" => Ok(Size::Large),
            _ => Err(UnknownSize(raw.to_string())),
        }
    }
}

/// One of the five toppings on the menu. Serialized as its catalog id ("1".."5").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToppingId {
    #[serde(rename = "1")]
    Pepperoni,
    #[serde(rename = "2")]
    GreenPeppers,
    #[serde(rename = "3")]
    Pineapple,
    #[serde(rename = "4")]
    Mushrooms,
    #[serde(rename = "5")]
    Ham,
}

/// Fixed topping catalog, in display order.
pub const TOPPINGS: [ToppingId; 5] = [
    ToppingId::Pepperoni,
    ToppingId::GreenPeppers,
    ToppingId::Pineapple,
    ToppingId::Mushrooms,
    ToppingId::Ham,
];

impl ToppingId {
    pub fn id(self) -> u8 {
        match self {
            ToppingId::Pepperoni => 1,
            ToppingId::GreenPeppers => 2,
            ToppingId::Pineapple => 3,
            ToppingId::Mushrooms => 4,
            ToppingId::Ham => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ToppingId::Pepperoni => "Pepperoni",
            ToppingId::GreenPeppers => "Green Peppers",
            ToppingId::Pineapple => "Pineapple",
            ToppingId::Mushrooms => "Mushrooms",
            ToppingId::Ham => "Ham",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        TOPPINGS.into_iter().find(|topping| topping.id() == id)
    }
}

impl fmt::Display for ToppingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown topping '{0}'; expected an id between 1 and 5")]
pub struct UnknownTopping(pub String);

impl FromStr for ToppingId {
    type Err = UnknownTopping;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(ToppingId::from_id)
            .ok_or_else(|| UnknownTopping(raw.to_string()))
    }
}
