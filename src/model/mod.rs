mod node;
mod record;
mod value;
mod variable;

pub use node::NodeMeta;
pub use record::{NamedParameter, PersistedInputs, PersistedRecord};
pub use value::{BlockInput, ReferenceSource, ValueExpression, ValueReference};
pub use variable::{OutputField, ParameterBinding, VariableType};
