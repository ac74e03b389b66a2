pub mod linked_list;
pub mod list_command;
pub mod shell;

pub use linked_list::LinkedList;
