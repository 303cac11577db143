mod signup;
pub use signup::Signup;

mod chats;
pub use chats::ChatsView;
