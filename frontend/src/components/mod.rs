pub mod badge;
pub mod empty_state;
pub mod error;
pub mod forms;
pub mod guard;
pub mod layout;
pub mod postal_code;
pub mod progress;
