//! UI Components

mod new_todo_form;
mod todo_card;
mod todo_list;

pub use new_todo_form::NewTodoForm;
pub use todo_card::TodoCard;
pub use todo_list::TodoList;
