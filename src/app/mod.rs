mod clock;
mod root;

pub use clock::Clock;
pub use root::App;
