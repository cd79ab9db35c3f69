pub(crate) use self::arc_consistency::{ac3, Arc};
pub(crate) use self::unary_constraints::enforce_node_consistency;

mod arc_consistency;
mod unary_constraints;
