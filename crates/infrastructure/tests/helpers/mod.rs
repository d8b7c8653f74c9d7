#![allow(dead_code)]

mod builders;
mod udp;

pub use builders::*;
pub use udp::*;
