pub mod author;
