#![allow(missing_docs, reason = "the public items are small and self-describing")]

pub mod event;
pub mod input;
