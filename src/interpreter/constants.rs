// Constants for the Lox interpreter

/// Maximum nesting of function calls before a run fails with a stack overflow.
pub const MAX_CALL_DEPTH: usize = 256;

/// Native stack for threads that run Lox code. The tree walker recurses on
/// the native stack, so [`MAX_CALL_DEPTH`] calls with deeply nested bodies
/// must fit here rather than in the caller's default stack.
pub const EVALUATOR_STACK_SIZE: usize = 256 * 1024 * 1024;
