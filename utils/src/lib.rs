extern crate core;

pub mod clamp;
#[cfg(feature = "thread-id-fmt")]
pub mod thread_id;

pub use crate::clamp::{clamp, clamp_by, clamped, clamped_by, try_clamp_by};
#[cfg(feature = "thread-id-fmt")]
pub use crate::thread_id::{FormatId, HashedId};
