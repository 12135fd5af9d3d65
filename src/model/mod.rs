//! Data model shared by the client, the renderer and the board.

pub mod dtos;
pub mod structs;

pub use dtos::{MembershipParams, Mutation, MutationOutcome, MutationReply};
pub use structs::{Activity, ActivitySet};
