mod keyboard;
mod pointer;

pub use keyboard::wire_keyboard;
pub use pointer::wire_pointer_handlers;
