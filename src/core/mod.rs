pub mod extension;
pub mod greeting;
