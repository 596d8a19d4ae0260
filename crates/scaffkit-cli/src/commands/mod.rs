//! Command handlers. Each one turns a parsed invocation into calls on
//! `scaffkit-core` and reports the result.

pub mod scaffold;
