mod generate;

// Generate commands
pub use generate::run_generate;
