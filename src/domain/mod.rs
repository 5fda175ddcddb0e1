// Domain types and value objects
mod location;
mod prayer;
mod time_of_day;

// Re-export commonly used types to the world
pub use location::Location;
pub use prayer::Prayer;
pub use time_of_day::{HalfDay, TimeOfDay};
