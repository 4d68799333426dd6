mod custom_list;
mod operand;

pub use custom_list::CustomList;
pub use operand::Operand;
