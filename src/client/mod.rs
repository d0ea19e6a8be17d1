//! Prompt-to-image client: the submission state machine and the capability
//! it drives. All traffic goes through the proxy's `/generate` and `/status`
//! endpoints; the client never holds an API key.

pub mod enums;
pub mod errors;
pub mod models;
pub mod service;
pub mod session;
pub mod structs;
