use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::codec::Format;
use crate::error::{Result, StoreError};

/// Record category stored under the data root.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr, strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum EntityKind {
    Player,
    Account,
}

impl EntityKind {
    /// Directory name under the data root.
    pub fn dir_name(self) -> &'static str {
        self.into()
    }

    /// Every supported kind, in declaration order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

impl FromStr for EntityKind {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "player" => Ok(Self::Player),
            "account" => Ok(Self::Account),
            other => Err(StoreError::UnsupportedKind(other.to_string())),
        }
    }
}

/// Logical identity of a stored record.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EntityRef {
    pub kind: EntityKind,
    pub id: String,
}

impl EntityRef {
    /// Build a reference, rejecting ids that would escape the kind directory.
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Result<Self> {
        let id = id.into();
        validate_id(&id)?;
        Ok(Self { kind, id })
    }

    /// Parse both halves from strings, e.g. values coming off the wire.
    pub fn parse(kind: &str, id: &str) -> Result<Self> {
        Self::new(kind.parse()?, id)
    }

    /// Path of the record relative to the data root.
    pub fn relative_path(&self) -> PathBuf {
        PathBuf::from(self.kind.dir_name())
            .join(format!("{}.{}", self.id, Format::Json.extension()))
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.id)
    }
}

fn validate_id(id: &str) -> Result<()> {
    let escapes = id.is_empty()
        || id == "."
        || id == ".."
        || id.contains(['/', '\\', '\0']);

    if escapes {
        return Err(StoreError::InvalidId(id.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("player".parse::<EntityKind>().unwrap(), EntityKind::Player);
        assert_eq!("account".parse::<EntityKind>().unwrap(), EntityKind::Account);
    }

    #[test]
    fn test_parse_unknown_kind() {
        for raw in ["npc", "Player", "ACCOUNT", ""] {
            let err = raw.parse::<EntityKind>().unwrap_err();
            assert!(matches!(err, StoreError::UnsupportedKind(k) if k == raw));
        }
    }

    #[test]
    fn test_display_matches_dir_name() {
        assert_eq!(EntityKind::Player.dir_name(), "player");
        assert_eq!(EntityKind::Account.dir_name(), "account");

        for kind in EntityKind::all() {
            assert_eq!(kind.to_string(), kind.dir_name());
            assert_eq!(kind.dir_name().parse::<EntityKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_all_lists_every_kind() {
        let kinds: Vec<EntityKind> = EntityKind::all().collect();
        assert_eq!(kinds, vec![EntityKind::Player, EntityKind::Account]);
    }

    #[test]
    fn test_relative_path() {
        let entity = EntityRef::parse("account", "u1").unwrap();
        assert_eq!(entity.relative_path(), PathBuf::from("account/u1.json"));
        assert_eq!(entity.to_string(), "account/u1");
    }

    #[test]
    fn test_rejects_escaping_ids() {
        for id in ["", ".", "..", "../etc", "a/b", "a\\b", "nul\0"] {
            let err = EntityRef::new(EntityKind::Player, id).unwrap_err();
            assert!(matches!(err, StoreError::InvalidId(_)), "id {id:?}");
        }
    }

    #[test]
    fn test_allows_dotted_ids() {
        let entity = EntityRef::new(EntityKind::Player, "sir.robin").unwrap();
        assert_eq!(entity.relative_path(), PathBuf::from("player/sir.robin.json"));
    }
}
