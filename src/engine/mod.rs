pub mod answer;
pub mod hint;
pub mod progress;
