//! Modifier keywords. Every modifier has an explicit `Undefined` variant
//! standing for "keyword not written".

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Undefined,
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Visibility::Undefined => None,
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Private => Some("private"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Final {
    #[default]
    Undefined,
    Final,
}

impl Final {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Final::Undefined => None,
            Final::Final => Some("final"),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, Final::Final)
    }
}

impl From<bool> for Final {
    fn from(value: bool) -> Self {
        if value { Final::Final } else { Final::Undefined }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Static {
    #[default]
    Undefined,
    Static,
}

impl Static {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Static::Undefined => None,
            Static::Static => Some("static"),
        }
    }

    pub fn is_static(&self) -> bool {
        matches!(self, Static::Static)
    }
}

impl From<bool> for Static {
    fn from(value: bool) -> Self {
        if value { Static::Static } else { Static::Undefined }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Abstract {
    #[default]
    Undefined,
    Abstract,
}

impl Abstract {
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Abstract::Undefined => None,
            Abstract::Abstract => Some("abstract"),
        }
    }

    pub fn is_abstract(&self) -> bool {
        matches!(self, Abstract::Abstract)
    }
}

impl From<bool> for Abstract {
    fn from(value: bool) -> Self {
        if value {
            Abstract::Abstract
        } else {
            Abstract::Undefined
        }
    }
}

/// Join the defined keywords with single spaces, with a trailing space if any.
pub(crate) fn keyword_prefix(keywords: &[Option<&'static str>]) -> String {
    keywords
        .iter()
        .flatten()
        .map(|k| format!("{} ", k))
        .collect()
}
