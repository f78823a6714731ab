// ============================================================
// Layer 2 - Application / Use Cases
// ============================================================
// Workflow coordination only: each use case wires the data and
// infra layers together and hands a plain report back to the
// CLI, which decides what to print.
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// XML corpus → labeled-examples artifact
pub mod convert_use_case;

// Summary of an existing artifact
pub mod inspect_use_case;
