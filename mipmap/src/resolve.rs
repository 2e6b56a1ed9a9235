use crate::{Density, SizeMapping};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// How a file name is matched against the keys of a [`SizeMapping`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// The first key, in mapping order, whose decimal form occurs anywhere
    /// in the name. `icon_148.png` matches `48` if `48` comes first.
    Substring,
    /// Like [`Strategy::Substring`] but the longest occurring key wins,
    /// ties broken by mapping order.
    Longest,
    /// The first run of digits in the name, looked up exactly.
    #[default]
    Exact,
}

/// A resolved file name: the key that matched and where it routes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Match {
    pub key: u32,
    pub density: Density,
}

impl Strategy {
    pub fn resolve(self, mapping: &SizeMapping, file_name: &str) -> Option<Match> {
        match self {
            Self::Substring => mapping
                .iter()
                .find(|(key, _)| file_name.contains(&key.to_string()))
                .map(|(key, density)| Match { key, density }),
            Self::Longest => {
                let mut best: Option<(usize, Match)> = None;
                for (key, density) in mapping.iter() {
                    let token = key.to_string();
                    if !file_name.contains(&token) {
                        continue;
                    }
                    if best.map_or(true, |(len, _)| token.len() > len) {
                        best = Some((token.len(), Match { key, density }));
                    }
                }
                best.map(|(_, m)| m)
            }
            Self::Exact => {
                let key = first_number(file_name)?;
                mapping.get(key).map(|density| Match { key, density })
            }
        }
    }
}

/// Parses the first maximal run of ASCII digits. Other unicode decimal
/// digits are not treated as part of a size. Runs that overflow `u32` yield
/// `None`.
pub(crate) fn first_number(file_name: &str) -> Option<u32> {
    static DIGITS: OnceLock<Regex> = OnceLock::new();
    let digits = DIGITS.get_or_init(|| Regex::new("[0-9]+").unwrap());
    digits.find(file_name)?.as_str().parse().ok()
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::Longest => write!(f, "longest"),
            Self::Exact => write!(f, "exact"),
        }
    }
}

impl std::str::FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(strategy: &str) -> anyhow::Result<Self> {
        Ok(match strategy {
            "substring" => Self::Substring,
            "longest" => Self::Longest,
            "exact" => Self::Exact,
            _ => anyhow::bail!("unsupported strategy {}", strategy),
        })
    }
}
