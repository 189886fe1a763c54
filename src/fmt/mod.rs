//! Line composition: bounded buffer, level colors, time helpers, and the
//! composer that ties them together.

mod buffer;
mod color;
mod compose;
pub mod time;

pub use buffer::BoundedBuffer;
pub use color::{Color, Style};
pub use compose::{ColorMode, DEFAULT_MAX_BUFFER_SIZE, FormatOptions, compose};
pub use time::{
    DEFAULT_TIMESTAMP_FORMAT, format_timestamp, process_info, thread_info, timestamp,
};
