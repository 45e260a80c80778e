pub mod countdown;
pub mod messages;
