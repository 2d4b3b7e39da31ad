pub mod difficulty;
pub mod fitts_law;
pub mod float_ext;
pub mod hint;
pub mod strains_vec;
