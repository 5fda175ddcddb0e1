use crate::domain::Location;

/// The divisional headquarters the bundled table covers. First entry is the capital.
pub const LOCATIONS: &[Location] = &[
    Location::new("Dhaka", "Dhaka", "ঢাকা"),
    Location::new("Chattogram", "Chattogram", "চট্টগ্রাম"),
    Location::new("Rajshahi", "Rajshahi", "রাজশাহী"),
    Location::new("Khulna", "Khulna", "খুলনা"),
    Location::new("Barishal", "Barishal", "বরিশাল"),
    Location::new("Sylhet", "Sylhet", "সিলেট"),
    Location::new("Rangpur", "Rangpur", "রংপুর"),
    Location::new("Mymensingh", "Mymensingh", "ময়মনসিংহ"),
];

pub const DEFAULT_LOCATION: &Location = &LOCATIONS[0];
