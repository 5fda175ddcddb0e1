mod perf;
mod time_utils;

pub use time_utils::{AppInstant, TimeUtils, ascii_digits, bengali_digits, local_now};
