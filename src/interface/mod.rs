/// Constructors and status helpers on the generated messages.
pub mod messages;
