pub mod corpus;
pub mod kana;
pub mod rime;
pub mod romaji;
pub mod translit;
pub mod unicode;
