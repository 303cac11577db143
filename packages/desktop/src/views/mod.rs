mod register;
pub use register::Register;

mod chats;
pub use chats::Chats;
