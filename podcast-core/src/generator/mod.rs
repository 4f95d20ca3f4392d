//! Simulated pipeline steps
//!
//! Each generator is a pure function from a parsed request to a response
//! payload. Nothing is scraped, synthesized or rendered.

mod media;
mod script;
mod search;
mod system;

pub use media::{generate_audio, generate_cover, generate_video};
pub use script::generate_script;
pub use search::search_gossips;
pub use system::{health, system_status};
