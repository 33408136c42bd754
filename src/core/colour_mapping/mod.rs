pub mod teal;
