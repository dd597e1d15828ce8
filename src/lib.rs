/// Crypto Asset Scanner
///
/// A static scanner that inspects configuration files for cryptographic
/// material indicators, assigns each finding a coarse risk classification,
/// and persists findings in SQLite for later querying.
pub mod catalog;
pub mod classifier;
pub mod cli;
pub mod error;
pub mod finding;
pub mod logging;
pub mod output;
pub mod scanner;
pub mod storage;

pub use catalog::{Catalog, PatternRule, PatternShape};
pub use classifier::{classify, Classification, RiskStatus};
pub use error::{Error, Result};
pub use finding::{Finding, FindingMetadata};
pub use scanner::{extract, Candidate, Scanner};
pub use storage::AssetStore;
