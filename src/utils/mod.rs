pub mod parsing;

// Re-export commonly used items
pub use parsing::{join_list, split_list};
