pub mod traits;

// Eta source implementations
pub mod fixed;
pub mod seeded;
