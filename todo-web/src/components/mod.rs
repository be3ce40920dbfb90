pub mod loading;
pub mod todo_composer;
pub mod todo_item;
