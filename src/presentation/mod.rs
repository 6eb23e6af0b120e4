// Presentation layer - Console widgets and the interactive shell
pub mod console;
pub mod shell;
