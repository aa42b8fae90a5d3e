/*!
Databases of a session.

For the moment this is limited to the [variable table](variable::VariableTable), which names each atom of an encoding.
*/

pub mod variable;
