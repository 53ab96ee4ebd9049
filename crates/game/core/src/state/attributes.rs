//! The five core attributes and the stat selector used by roll scaling.

/// Selector for a single attribute.
///
/// Serialized upper-case (`STR`, `INT`, ...) to match the content data.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Stat {
    Str,
    Int,
    Cha,
    Con,
    Dex,
}

/// Core attribute block. Each value lies in `[ATTRIBUTE_MIN, ATTRIBUTE_MAX]`
/// once the owning combatant has been built.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Attributes {
    pub str: i32,
    pub int: i32,
    pub cha: i32,
    pub con: i32,
    pub dex: i32,
}

impl Attributes {
    pub fn new(str: i32, int: i32, cha: i32, con: i32, dex: i32) -> Self {
        Self {
            str,
            int,
            cha,
            con,
            dex,
        }
    }

    pub fn get(&self, stat: Stat) -> i32 {
        match stat {
            Stat::Str => self.str,
            Stat::Int => self.int,
            Stat::Cha => self.cha,
            Stat::Con => self.con,
            Stat::Dex => self.dex,
        }
    }

    /// Iterate `(stat, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        use strum::IntoEnumIterator;
        Stat::iter().map(|stat| (stat, self.get(stat)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stat_parses_case_insensitively() {
        assert_eq!("str".parse::<Stat>(), Ok(Stat::Str));
        assert_eq!("DEX".parse::<Stat>(), Ok(Stat::Dex));
        assert_eq!(Stat::Int.to_string(), "INT");
    }

    #[test]
    fn get_matches_fields() {
        let attributes = Attributes::new(3, 0, 1, 2, -1);
        let values: Vec<i32> = attributes.iter().map(|(_, value)| value).collect();
        assert_eq!(values, vec![3, 0, 1, 2, -1]);
    }
}
