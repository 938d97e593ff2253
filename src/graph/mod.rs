/// Bitsets over block identifiers
pub mod bitset;
/// Undirected link graph between blocks
pub mod links;
/// Reachability over the link graph
pub mod traversal;
