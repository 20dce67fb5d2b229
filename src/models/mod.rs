//! Makespan domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Instance` | Job processing times + machine count (input) |
//! | `Partition` | Job-to-machine assignment with derived loads (output) |

mod instance;
mod partition;

pub use instance::Instance;
pub use partition::Partition;
