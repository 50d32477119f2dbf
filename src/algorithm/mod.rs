/// Binary connection relation from statistics and overlap
pub mod connection;
/// Iterative resolution-doubling loop and bucket pruning
pub mod expansion;
/// Spatial overlap detection between block pairs
pub mod overlap;
/// Pairwise similarity test statistic
pub mod similarity;
