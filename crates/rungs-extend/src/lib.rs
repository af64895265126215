//! Domain extension and order duality
//!
//! Two transforms of an ordered domain, each transporting step providers:
//!
//! - Sentinel extension: `WithTop<T>` / `WithBot<T>` add an artificial
//!   extremal element. Four of the (direction × sentinel) configurations
//!   are constructible; the other two - predecessor across an added top on
//!   a domain with no maximal element, successor across an added bottom on
//!   a domain with no minimal element - are mathematically impossible and
//!   have no constructor here at all.
//! - Order reversal: `Dual<T>` flips the comparison, turning successors
//!   into predecessors and back with no information loss.

pub mod dual;
pub mod with_bot;
pub mod with_top;

pub use dual::Dual;
pub use with_bot::WithBot;
pub use with_top::WithTop;
