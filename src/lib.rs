pub mod error;
pub mod index;
pub mod linked_list;
pub mod queue;
pub mod stack;

pub use crate::error::ListError;
pub use crate::index::ListIndex;
pub use crate::linked_list::LinkedList;
pub use crate::queue::Queue;
pub use crate::stack::Stack;
