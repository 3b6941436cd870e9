mod chat_message;
mod completion;
mod conversation;
mod persona;
mod reply;

pub use chat_message::*;
pub use completion::*;
pub use conversation::*;
pub use persona::*;
pub use reply::*;
