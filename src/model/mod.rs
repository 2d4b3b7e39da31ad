pub mod hit_object;
pub mod mods;
