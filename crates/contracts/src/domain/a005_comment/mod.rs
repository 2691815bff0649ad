pub mod aggregate;

pub use aggregate::Comment;
