use std::fmt::{Debug, Formatter, Result as FmtResult};

use rosu_mods::{GameModIntermode, GameMods as GameModsLazer, GameModsIntermode, GameModsLegacy};

/// Collection of game mods.
///
/// Only a few mods influence skill evaluation: hidden increases the reading
/// difficulty, autopilot removes the distance bonus of speed, and
/// rate-changing mods provide the default clock rate.
///
/// This type can be created through its `From<T>` implementations where `T`
/// can be
/// - `u32`
/// - [`rosu_mods::GameModsLegacy`]
/// - [`rosu_mods::GameMods`]
/// - [`rosu_mods::GameModsIntermode`]
/// - [`&rosu_mods::GameModsIntermode`](rosu_mods::GameModsIntermode)
///
/// # Example
///
/// ```
/// use rosu_skills::GameMods;
/// use rosu_mods::{GameModsIntermode, GameModsLegacy, GameMods as GameModsLazer};
///
/// let int = GameMods::from(64 + 8);
/// let legacy = GameMods::from(GameModsLegacy::Hidden | GameModsLegacy::Easy);
/// let lazer = GameMods::from(GameModsLazer::new());
/// let intermode = GameMods::from(GameModsIntermode::new());
/// ```
#[derive(Clone, PartialEq)]
pub struct GameMods {
    inner: GameModsInner,
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.inner {
            GameModsInner::Lazer(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Intermode(ref mods) => Debug::fmt(mods, f),
            GameModsInner::Legacy(ref mods) => Debug::fmt(mods, f),
        }
    }
}

/// Inner type of [`GameMods`] so that remote types contained in variants don't
/// need to be re-exported.
#[derive(Clone, PartialEq)]
enum GameModsInner {
    Lazer(GameModsLazer),
    Intermode(GameModsIntermode),
    Legacy(GameModsLegacy),
}

impl GameMods {
    pub(crate) const DEFAULT: Self = Self {
        inner: GameModsInner::Legacy(GameModsLegacy::NoMod),
    };

    /// Returns the mods' clock rate.
    ///
    /// In case of variable clock rates like for `WindUp`, this will return
    /// `1.0`.
    pub fn clock_rate(&self) -> f64 {
        match self.inner {
            GameModsInner::Lazer(ref mods) => mods.clock_rate().unwrap_or(1.0),
            GameModsInner::Intermode(ref mods) => mods.legacy_clock_rate(),
            GameModsInner::Legacy(mods) => mods.clock_rate(),
        }
    }
}

macro_rules! impl_has_mod {
    ( $( $fn:ident: $name:ident [ $s:literal ], )* ) => {
        impl GameMods {
            $(
                #[doc = "Check whether [`GameMods`] contain `"]
                #[doc = $s]
                #[doc = "`."]
                pub fn $fn(&self) -> bool {
                    match self.inner {
                        GameModsInner::Lazer(ref mods) => {
                            mods.contains_intermode(GameModIntermode::$name)
                        },
                        GameModsInner::Intermode(ref mods) => {
                            mods.contains(GameModIntermode::$name)
                        },
                        GameModsInner::Legacy(mods) => {
                            mods.contains(GameModsLegacy::$name)
                        },
                    }
                }
            )*
        }
    };
}

impl_has_mod! {
    hd: Hidden ["Hidden"],
    ap: Autopilot ["Autopilot"],
}

impl Default for GameMods {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<GameModsLazer> for GameMods {
    fn from(mods: GameModsLazer) -> Self {
        Self {
            inner: GameModsInner::Lazer(mods),
        }
    }
}

impl From<GameModsIntermode> for GameMods {
    fn from(mods: GameModsIntermode) -> Self {
        Self {
            inner: GameModsInner::Intermode(mods),
        }
    }
}

impl From<&GameModsIntermode> for GameMods {
    fn from(mods: &GameModsIntermode) -> Self {
        // If only legacy mods are set, use `GameModsLegacy` and thus avoid
        // allocating an owned `GameModsIntermode` instance.
        match mods.checked_bits() {
            Some(bits) => bits.into(),
            None => mods.to_owned().into(),
        }
    }
}

impl From<GameModsLegacy> for GameMods {
    fn from(mods: GameModsLegacy) -> Self {
        Self {
            inner: GameModsInner::Legacy(mods),
        }
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        GameModsLegacy::from_bits(bits).into()
    }
}

#[cfg(test)]
mod tests {
    use crate::util::float_ext::FloatExt;

    use super::*;

    #[test]
    fn legacy_bits() {
        let mods = GameMods::from(8 + 64);

        assert!(mods.hd());
        assert!(!mods.ap());
        assert!(mods.clock_rate().eq(1.5));
    }

    #[test]
    fn intermode() {
        let mut intermode = GameModsIntermode::new();
        intermode.insert(GameModIntermode::Autopilot);
        intermode.insert(GameModIntermode::HalfTime);

        let mods = GameMods::from(&intermode);

        assert!(mods.ap());
        assert!(!mods.hd());
        assert!(mods.clock_rate().eq(0.75));
    }

    #[test]
    fn default_is_nomod() {
        let mods = GameMods::default();

        assert!(!mods.hd());
        assert!(mods.clock_rate().eq(1.0));
    }
}
