pub mod classic;
pub mod generate;
pub mod split;
