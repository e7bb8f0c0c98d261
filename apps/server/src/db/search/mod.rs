//! Employee search: filter normalization, variant policies, predicate
//! construction, SQL rendering, paginated execution and projection.

pub mod engine;
pub mod filter_spec;
pub mod identifier;
pub mod policy;
pub mod predicate;
pub mod projection;
pub mod query_builder;

pub use engine::{PageRequest, PaginatedQueryExecutor, DEFAULT_PAGE_LIMIT};
pub use filter_spec::{FilterField, FilterSpec};
pub use policy::{MatchMode, SearchValidationError, SearchVariant, VariantPolicy};
pub use predicate::{Conjunction, Predicate, PredicateBuilder, PredicateSet};
pub use projection::ProjectionMapper;
pub use query_builder::{BindValue, QueryBuilder};
