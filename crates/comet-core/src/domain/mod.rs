mod timestamp;

pub use timestamp::UtcDateTime;
