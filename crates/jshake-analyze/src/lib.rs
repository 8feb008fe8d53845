//! Effect analysis and inclusion propagation for the jshake bundler core.
//!
//! Two of the three passes live here. The effect analyzer answers, per node,
//! whether evaluating it can be observed outside the node. The inclusion
//! propagator marks the nodes that must survive into the output, consulting
//! the effect analyzer for nodes whose necessity is conditional. Both share
//! the traversal-context save/restore discipline: sibling branches never see
//! each other's control-flow flags.

pub mod context;
pub use context::{EffectContext, IgnoredFlags, IncludeChildren, InclusionContext};

pub mod path;
pub use path::{EMPTY_PATH, ObjectPath, PathSegment, UNKNOWN_PATH};

pub mod values;
pub use values::{LiteralValue, StringMemberEffect, string_member};

pub mod resolver;
pub use resolver::{ConservativeResolver, ScopeResolver};

pub mod state;
pub use state::{CachedEffect, Included, ShakeState};

pub mod init;
pub use init::initialise;

pub mod effects;
pub use effects::{EffectAnalyzer, NodeInteraction};

pub mod include;
pub use include::Includer;
