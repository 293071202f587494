mod arena;
mod balance;
mod handle;
mod node;
mod raw_tree;

pub(crate) use raw_tree::RawTree;
